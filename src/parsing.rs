//! File parsing functionality for rehash statistics data
//!
//! This module handles loading and parsing the rehash CSV produced by the
//! hash table instrumentation.

use crate::common::data_structures::{RehashRecord, RehashSamples};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during file parsing
#[derive(Error, Debug)]
pub enum ParsingError {
    #[error("Failed to read input file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),
}

type Result<T> = core::result::Result<T, ParsingError>;

/// Parse the rehash CSV file and load the data for analysis
///
/// # Arguments
/// * `file_path` - Path to the rehash CSV file
///
/// # Returns
/// * `Ok(RehashSamples)` - Rows of the file, in file order
/// * `Err(ParsingError)` - If the file could not be opened or a row failed to parse
pub fn parse_rehash_csv(file_path: &Path) -> Result<RehashSamples> {
    let file = File::open(file_path)?;
    parse_rehash_reader(file)
}

/// Parse rehash CSV data from any reader
///
/// The header row must name the columns `rehashes per bucket` and ` count`.
/// Headers are matched verbatim, so the leading space of the second one is
/// significant. Data fields are trimmed before being parsed as non-negative integers.
pub fn parse_rehash_reader<R: Read>(reader: R) -> Result<RehashSamples> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .trim(Trim::Fields)
        .from_reader(reader);

    let mut samples = RehashSamples::new();
    for record in reader.deserialize::<RehashRecord>() {
        samples.push(record?);
    }

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_rows_in_file_order() {
        let data = "rehashes per bucket, count\n0,50\n1,30\n2,20\n";
        let samples = parse_rehash_reader(data.as_bytes()).unwrap();

        assert_eq!(samples.rehash_counts(), &[0, 1, 2]);
        assert_eq!(samples.occurrence_counts(), &[50, 30, 20]);
    }

    #[test]
    fn accepts_padded_data_fields() {
        let data = "rehashes per bucket, count\n0, 7\n1, 3\n";
        let samples = parse_rehash_reader(data.as_bytes()).unwrap();
        assert_eq!(samples.occurrence_counts(), &[7, 3]);
    }

    #[test]
    fn header_only_yields_empty_samples() {
        let samples = parse_rehash_reader("rehashes per bucket, count\n".as_bytes()).unwrap();
        assert!(samples.is_empty());
    }

    #[test]
    fn count_header_requires_leading_space() {
        let data = "rehashes per bucket,count\n0,50\n";
        let result = parse_rehash_reader(data.as_bytes());
        assert!(matches!(result, Err(ParsingError::CsvParse(_))));
    }

    #[test]
    fn rejects_non_integer_field() {
        let data = "rehashes per bucket, count\n0,50\n1,thirty\n";
        let result = parse_rehash_reader(data.as_bytes());
        assert!(matches!(result, Err(ParsingError::CsvParse(_))));
    }

    #[test]
    fn rejects_negative_count() {
        let data = "rehashes per bucket, count\n0,-1\n";
        let result = parse_rehash_reader(data.as_bytes());
        assert!(matches!(result, Err(ParsingError::CsvParse(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = parse_rehash_csv(&dir.path().join("main_rehash.csv"));
        assert!(matches!(result, Err(ParsingError::FileRead(_))));
    }

    #[test]
    fn parses_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "rehashes per bucket, count\n0,10\n").unwrap();

        let samples = parse_rehash_csv(file.path()).unwrap();
        assert_eq!(samples.rehash_counts(), &[0]);
        assert_eq!(samples.occurrence_counts(), &[10]);
    }
}
