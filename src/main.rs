mod analysis;
mod common;
mod parsing;

use analysis::constants::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
use argh::FromArgs;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;
use tracing::{debug, error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

// Import analysis functions
use analysis::compute_distribution;
use common::plots::create_rehash_plot;
use common::table::format_distribution_table;

// Import parsing functionality
use parsing::parse_rehash_csv;

/// Frequency and cumulative distribution of hash table bucket rehash counts
#[derive(FromArgs, Debug)]
pub struct Args {
    /// rehash CSV produced by the instrumentation run (default: ../csv/main_rehash.csv)
    #[argh(option, short = 'i', default = "PathBuf::from(DEFAULT_INPUT_PATH)")]
    input: PathBuf,

    /// where to save the chart (default: ../figures/main_rehash.png)
    #[argh(option, short = 'o', default = "PathBuf::from(DEFAULT_OUTPUT_PATH)")]
    output: PathBuf,

    /// do not print the distribution table
    #[argh(switch, short = 'q')]
    no_display: bool,
}

/// Errors that can occur during analysis
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Parsing error: {0}")]
    Parsing(#[from] parsing::ParsingError),

    #[error("Distribution error: {0}")]
    Distribution(#[from] analysis::DistributionError),

    #[error("Plot error: {0}")]
    Plot(#[from] common::PlotError),
}

type Result<T> = core::result::Result<T, AnalysisError>;

fn main() -> ExitCode {
    init_logging();
    let args: Args = argh::from_env();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Loads the CSV, derives the distribution, saves the chart and shows the table
///
/// The chart is the last thing written, so a failure while loading or
/// analysing never leaves an output file behind.
fn run(args: &Args) -> Result<()> {
    info!(input = %args.input.display(), "Loading rehash statistics");
    let samples = parse_rehash_csv(&args.input)?;
    debug!(rehash_counts = ?samples.rehash_counts(), "Loaded rehash counts");
    debug!(counts = ?samples.occurrence_counts(), "Loaded occurrence counts");

    let distribution = compute_distribution(&samples)?;
    debug!(total = distribution.total, "Total buckets");
    debug!(percent_count = ?distribution.percent_count);
    debug!(cumulative = ?distribution.cumulative);
    debug!(percent_cumulative = ?distribution.percent_cumulative);

    create_rehash_plot(
        &distribution.rehash_counts,
        &distribution.percent_cumulative,
        &distribution.percent_count,
        &args.output,
    )?;
    info!(
        output = %args.output.display(),
        rows = samples.len(),
        buckets = distribution.total,
        "Saved rehash distribution chart"
    );

    if !args.no_display {
        let rows = distribution.rows(&samples);
        println!(
            "{}",
            format_distribution_table(&rows, Some("Rehash Distribution"))
        );
    }

    Ok(())
}

/// Init logging using LOG_LEVEL
fn init_logging() {
    // Logs go to stderr, stdout carries the distribution table
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    // Filter events with LOG_LEVEL
    let env_filter =
        EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn args(input: PathBuf, output: PathBuf) -> Args {
        Args {
            input,
            output,
            no_display: true,
        }
    }

    #[test]
    fn defaults_match_fixed_paths() {
        let args = Args::from_args(&["rehash-stats"], &[]).unwrap();
        assert_eq!(args.input, PathBuf::from("../csv/main_rehash.csv"));
        assert_eq!(args.output, PathBuf::from("../figures/main_rehash.png"));
        assert!(!args.no_display);
    }

    #[test]
    fn paths_can_be_overridden() {
        let args = Args::from_args(
            &["rehash-stats"],
            &["-i", "data.csv", "--output", "chart.png", "-q"],
        )
        .unwrap();
        assert_eq!(args.input, PathBuf::from("data.csv"));
        assert_eq!(args.output, PathBuf::from("chart.png"));
        assert!(args.no_display);
    }

    #[test]
    fn missing_input_aborts_without_output() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output = temp_dir.path().join("main_rehash.png");

        let result = run(&args(temp_dir.path().join("main_rehash.csv"), output.clone()));

        assert!(matches!(result, Err(AnalysisError::Parsing(_))));
        assert!(!output.exists());
    }

    #[test]
    fn failure_is_reported_as_display_text() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output = temp_dir.path().join("main_rehash.png");

        let error = run(&args(temp_dir.path().join("main_rehash.csv"), output)).unwrap_err();
        let message = error.to_string();

        assert!(message.starts_with("Parsing error: Failed to read input file: "));
        assert!(!message.contains("FileRead"));
        assert_eq!(message.lines().count(), 1);
    }

    #[test]
    fn zero_total_aborts_without_output() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = temp_dir.path().join("main_rehash.csv");
        let output = temp_dir.path().join("main_rehash.png");
        fs::write(&input, "rehashes per bucket, count\n0,0\n1,0\n").unwrap();

        let result = run(&args(input, output.clone()));

        assert!(matches!(result, Err(AnalysisError::Distribution(_))));
        assert!(!output.exists());
    }

    #[test]
    fn single_huge_count_passes_validation() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = temp_dir.path().join("main_rehash.csv");
        // Missing directory stops the run right after validation, before any drawing
        let output = temp_dir.path().join("figures").join("main_rehash.png");
        fs::write(&input, "rehashes per bucket, count\n0,547326792947875\n").unwrap();

        let result = run(&args(input, output.clone()));

        match result {
            Err(AnalysisError::Plot(common::PlotError::FileSave(_))) => {}
            other => panic!("expected missing output directory, got {:?}", other),
        }
        assert!(!output.exists());
    }

    #[test]
    fn header_only_input_fails_to_plot() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = temp_dir.path().join("main_rehash.csv");
        let output = temp_dir.path().join("main_rehash.png");
        fs::write(&input, "rehashes per bucket, count\n").unwrap();

        let result = run(&args(input, output.clone()));

        assert!(matches!(result, Err(AnalysisError::Plot(_))));
        assert!(!output.exists());
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn writes_chart_for_valid_input() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = temp_dir.path().join("main_rehash.csv");
        let output = temp_dir.path().join("main_rehash.png");
        fs::write(&input, "rehashes per bucket, count\n0,50\n1,30\n2,20\n").unwrap();

        run(&args(input, output.clone())).unwrap();

        assert!(output.exists());
    }
}
