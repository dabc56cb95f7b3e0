//! Table-ready data structures for multi-file output.
//!
//! `StatsTable` is a presentation-ready structure that can be consumed by a
//! text renderer or serialized to JSON directly. Rows follow the order of the
//! `CountResult` they come from; ordering happens while counting.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::counter::CountResult;
use crate::data::stats::TextStats;

/// Column headers, label column first.
pub const HEADERS: [&str; 4] = ["File", "Words", "Letters (no spaces)", "Letters (with spaces)"];

/// A single row in the table (data row or footer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Row label (file path or "Total (N files)")
    pub label: String,
    /// Values for each count column, ready for display
    pub values: Vec<String>,
}

/// Table-ready counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsTable {
    /// Column headers: [label_header, Words, Letters (no spaces), Letters (with spaces)]
    pub headers: Vec<String>,
    /// Data rows, one per file
    pub rows: Vec<TableRow>,
    /// Summary row
    pub footer: TableRow,
}

impl StatsTable {
    /// Build a table from a count result.
    ///
    /// File labels are shown relative to `base` when they live under it.
    pub fn from_result(result: &CountResult, base: &Path) -> Self {
        let rows = result
            .files
            .iter()
            .map(|f| TableRow {
                label: make_relative(&f.path, base),
                values: format_stats(&f.stats),
            })
            .collect();

        Self {
            headers: HEADERS.iter().map(|h| h.to_string()).collect(),
            rows,
            footer: TableRow {
                label: format!("Total ({} files)", result.file_count),
                values: format_stats(&result.total),
            },
        }
    }

    /// Width of each column, the widest of header and values.
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in self.rows.iter().chain(std::iter::once(&self.footer)) {
            let cells = std::iter::once(&row.label).chain(row.values.iter());
            for (width, cell) in widths.iter_mut().zip(cells) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }
}

/// Convert a path to a relative path from the base directory.
fn make_relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|_| path.to_string_lossy().to_string())
}

fn format_stats(stats: &TextStats) -> Vec<String> {
    vec![
        stats.word_count.to_string(),
        stats.letter_count_excluding_spaces.to_string(),
        stats.letter_count_including_spaces.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::stats::FileStats;
    use std::path::PathBuf;

    fn stats(words: u64, excluding: u64, including: u64) -> TextStats {
        TextStats {
            word_count: words,
            letter_count_excluding_spaces: excluding,
            letter_count_including_spaces: including,
        }
    }

    fn sample_result() -> CountResult {
        CountResult {
            file_count: 2,
            total: stats(5, 20, 24),
            files: vec![
                FileStats::new(PathBuf::from("/docs/a.txt"), stats(2, 8, 9)),
                FileStats::new(PathBuf::from("/other/b.txt"), stats(3, 12, 15)),
            ],
        }
    }

    #[test]
    fn test_table_headers() {
        let table = StatsTable::from_result(&sample_result(), Path::new("/docs"));
        assert_eq!(
            table.headers,
            vec!["File", "Words", "Letters (no spaces)", "Letters (with spaces)"]
        );
    }

    #[test]
    fn test_table_rows_and_footer() {
        let table = StatsTable::from_result(&sample_result(), Path::new("/docs"));
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].label, "a.txt");
        assert_eq!(table.rows[0].values, vec!["2", "8", "9"]);
        // Outside the base directory the full path is kept
        assert_eq!(table.rows[1].label, "/other/b.txt");
        assert_eq!(table.footer.label, "Total (2 files)");
        assert_eq!(table.footer.values, vec!["5", "20", "24"]);
    }

    #[test]
    fn test_table_total_only() {
        let mut result = sample_result();
        result.files.clear();
        let table = StatsTable::from_result(&result, Path::new("/"));
        assert!(table.rows.is_empty());
        assert_eq!(table.footer.label, "Total (2 files)");
    }

    #[test]
    fn test_column_widths() {
        let table = StatsTable::from_result(&sample_result(), Path::new("/docs"));
        assert_eq!(table.column_widths(), vec![15, 5, 19, 21]);
    }
}
