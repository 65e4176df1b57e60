//! Domain-specific analysis modules
//!
//! This module contains the rehash distribution analysis and the constants it
//! renders with.

pub mod constants;
pub mod distribution;

pub use distribution::{compute_distribution, DistributionError};
