//! Common infrastructure modules shared across analysis phases
//!
//! This module provides reusable infrastructure for:
//! - Data structures for rehash statistics
//! - Plotting the rehash distribution chart
//! - ASCII table formatting

pub mod data_structures;
pub mod plots;
pub mod table;

// Re-export commonly used items
pub use data_structures::{RehashDistribution, RehashSamples};
pub use plots::PlotError;
