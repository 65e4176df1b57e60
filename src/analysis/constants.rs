//! Fixed paths and chart constants
//!
//! The paths are relative to the working directory, matching the layout the
//! instrumentation run writes its CSV output into.

/// Default location of the instrumentation CSV
pub const DEFAULT_INPUT_PATH: &str = "../csv/main_rehash.csv";

/// Default location of the rendered chart
pub const DEFAULT_OUTPUT_PATH: &str = "../figures/main_rehash.png";

/// Horizontal axis label
pub const X_AXIS_LABEL: &str = "Rehash Count";

/// Vertical axis label
pub const Y_AXIS_LABEL: &str = "Frequency out of Total Buckets";

/// Legend label of the background (cumulative) series
pub const CUMULATIVE_SERIES_LABEL: &str = "Cumulative";

/// Legend label of the foreground (per rehash count) series
pub const FREQUENCY_SERIES_LABEL: &str = "Frequency";

/// Chart resolution in pixels (640x480, i.e. a 6.4x4.8in figure at 100 dpi)
pub const PLOT_SIZE: (u32, u32) = (640, 480);

/// Fraction of a category slot covered by a bar
pub const BAR_WIDTH: f64 = 0.8;
