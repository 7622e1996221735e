//! Semicolon-separated CSV loading.
//!
//! Files are read without header handling into a [`Table`] of raw string
//! cells. Interpreting cells as numbers is left to the typed accessors on
//! [`Table`], so every caller reports bad content the same way.

use anyhow::{Context, Result, anyhow};
use csv::{ReaderBuilder, Trim};
use std::path::Path;
use tracing::debug;

const BOM: char = '\u{feff}';

/// A parsed CSV file: rows of untyped cells in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

/// Reads a semicolon-delimited file, dropping the first `skip_rows` rows.
///
/// A leading UTF-8 byte-order mark is ignored.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid CSV.
#[tracing::instrument(skip_all, fields(path = %path.display(), skip_rows))]
pub fn read_csv(path: &Path, skip_rows: usize) -> Result<Table> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let table = parse_csv(&content, skip_rows)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    debug!(rows = table.len(), "CSV loaded");
    Ok(table)
}

/// Parses semicolon-delimited text, dropping the first `skip_rows` rows.
pub fn parse_csv(content: &str, skip_rows: usize) -> Result<Table> {
    let content = content.strip_prefix(BOM).unwrap_or(content);

    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("malformed CSV row {}", index + 1))?;
        if index < skip_rows {
            continue;
        }
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Table { rows })
}

impl Table {
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of cells in `row`, or 0 if the row does not exist.
    pub fn width(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .ok_or_else(|| anyhow!("missing cell at row {row}, column {col}"))
    }

    /// Reads a cell as an integer.
    ///
    /// Decimal text is accepted and truncated toward zero, so `"1234.0"`
    /// reads as `1234`.
    pub fn int(&self, row: usize, col: usize) -> Result<i64> {
        let raw = self.cell(row, col)?;
        parse_int(raw).ok_or_else(|| {
            anyhow!("expected an integer at row {row}, column {col}, found '{raw}'")
        })
    }

    pub fn float(&self, row: usize, col: usize) -> Result<f64> {
        let raw = self.cell(row, col)?;
        parse_float(raw)
            .ok_or_else(|| anyhow!("expected a number at row {row}, column {col}, found '{raw}'"))
    }

    /// Reads a year cell and renders it in canonical form (`"2020.0"` -> `"2020"`).
    pub fn year(&self, row: usize, col: usize) -> Result<String> {
        Ok(self.int(row, col)?.to_string())
    }
}

fn parse_int(raw: &str) -> Option<i64> {
    if let Ok(v) = raw.parse::<i64>() {
        return Some(v);
    }
    // float -> int casts saturate, so reject anything outside the i64 range
    parse_float(raw)
        .map(f64::trunc)
        .filter(|v| *v >= i64::MIN as f64 && *v < i64::MAX as f64)
        .map(|v| v as i64)
}

fn parse_float(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    #[test]
    fn test_parse_semicolon_rows() {
        let table = parse_csv("a;b;c\n1;2;3\n", 0).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.cell(0, 1).unwrap(), "b");
        assert_eq!(table.cell(1, 2).unwrap(), "3");
    }

    #[test]
    fn test_skip_rows() {
        let table = parse_csv("header;x\n2020;1\n2021;2\n", 1).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.cell(0, 0).unwrap(), "2020");
    }

    #[test]
    fn test_bom_is_ignored() {
        let with_bom = parse_csv("\u{feff}2020;1\n", 0).unwrap();
        let without = parse_csv("2020;1\n", 0).unwrap();
        assert_eq!(with_bom, without);
        assert_eq!(with_bom.int(0, 0).unwrap(), 2020);
    }

    #[test]
    fn test_ragged_rows_and_blank_lines() {
        let table = parse_csv("a;b;c\n\nd\n", 0).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.width(0), 3);
        assert_eq!(table.width(1), 1);
        assert_eq!(table.width(7), 0);
    }

    #[test]
    fn test_cells_are_trimmed() {
        let table = parse_csv(" 2020 ; 5.5 \n", 0).unwrap();
        assert_eq!(table.year(0, 0).unwrap(), "2020");
        assert_eq!(table.float(0, 1).unwrap(), 5.5);
    }

    #[test]
    fn test_int_truncates_decimal_text() {
        let table = parse_csv("1234.0;1234.9;-3.7\n", 0).unwrap();
        assert_eq!(table.int(0, 0).unwrap(), 1234);
        assert_eq!(table.int(0, 1).unwrap(), 1234);
        assert_eq!(table.int(0, 2).unwrap(), -3);
        assert_eq!(table.year(0, 0).unwrap(), "1234");
    }

    #[test]
    fn test_non_numeric_cell_names_position() {
        let table = parse_csv("2020;n/a\n", 0).unwrap();
        let err = table.int(0, 1).unwrap_err().to_string();
        assert!(err.contains("row 0, column 1"));
        assert!(err.contains("n/a"));
        assert!(table.float(0, 1).is_err());
    }

    #[test]
    fn test_missing_cell() {
        let table = parse_csv("2020\n", 0).unwrap();
        assert!(table.cell(0, 1).is_err());
        assert!(table.cell(3, 0).is_err());
    }

    #[test]
    fn test_read_csv_missing_file() {
        let path = temp_path("birth_stats_submitter_missing.csv");
        let _ = fs::remove_file(&path);

        let err = read_csv(Path::new(&path), 0).unwrap_err().to_string();
        assert!(err.contains("birth_stats_submitter_missing.csv"));
    }

    #[test]
    fn test_read_csv_from_disk() {
        let path = temp_path("birth_stats_submitter_read.csv");
        fs::write(&path, "\u{feff}Jahr;m;w\n2020;10;11\n").unwrap();

        let table = read_csv(Path::new(&path), 1).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.int(0, 2).unwrap(), 11);

        fs::remove_file(&path).unwrap();
    }
}
