//! ASCII table formatting for the rehash distribution
//!
//! This module renders [`DistributionRow`]s as a table using the [`tabled`]
//! crate, which is how the distribution is shown on screen.

use super::data_structures::DistributionRow;
use tabled::{Table, Tabled};

/// A single table line with pre-formatted percentages
#[derive(Debug, Clone, Tabled)]
struct TableEntry {
    #[tabled(rename = "Rehashes")]
    rehash_count: u64,
    #[tabled(rename = "Buckets")]
    occurrence_count: u64,
    #[tabled(rename = "Frequency")]
    percent_count: String,
    #[tabled(rename = "Cumulative")]
    percent_cumulative: String,
}

impl From<&DistributionRow> for TableEntry {
    fn from(row: &DistributionRow) -> Self {
        Self {
            rehash_count: row.rehash_count,
            occurrence_count: row.occurrence_count,
            percent_count: format!("{:.2}%", row.percent_count),
            percent_cumulative: format!("{:.2}%", row.percent_cumulative),
        }
    }
}

/// Formats distribution rows as an ASCII table using the [`tabled`] crate
///
/// # Arguments
/// * `rows` - A slice of [`DistributionRow`] to format
/// * `title` - Optional title for the table
///
/// # Returns
/// A formatted ASCII table as a [`String`]
pub fn format_distribution_table(rows: &[DistributionRow], title: Option<&str>) -> String {
    if rows.is_empty() {
        return "No rehash data available".to_string();
    }

    let entries: Vec<TableEntry> = rows.iter().map(TableEntry::from).collect();
    let table = Table::new(entries).to_string();

    if let Some(title) = title {
        format!("{}\n{}\n{}", title, "=".repeat(title.len()), table)
    } else {
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<DistributionRow> {
        vec![
            DistributionRow {
                rehash_count: 0,
                occurrence_count: 50,
                percent_count: 50.0,
                percent_cumulative: 0.0,
            },
            DistributionRow {
                rehash_count: 1,
                occurrence_count: 30,
                percent_count: 30.0,
                percent_cumulative: 50.0,
            },
            DistributionRow {
                rehash_count: 2,
                occurrence_count: 20,
                percent_count: 20.0,
                percent_cumulative: 20.0,
            },
        ]
    }

    #[test]
    fn test_format_distribution_table() {
        let table = format_distribution_table(&rows(), Some("Rehash Distribution"));
        assert!(table.starts_with("Rehash Distribution\n==================="));
        assert!(table.contains("Rehashes"));
        assert!(table.contains("Buckets"));
        assert!(table.contains("Frequency"));
        assert!(table.contains("Cumulative"));
        assert!(table.contains("30.00%"));
        assert!(table.contains("0.00%"));

        // Test without title
        let table_no_title = format_distribution_table(&rows(), None);
        assert!(!table_no_title.contains("Rehash Distribution"));
        assert!(table_no_title.contains("Rehashes"));
    }

    #[test]
    fn test_format_empty_table() {
        assert_eq!(
            format_distribution_table(&[], None),
            "No rehash data available"
        );
    }
}
