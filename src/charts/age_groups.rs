//! Chart 2: births per 1000 women by age group (DESTATIS 12612-0008).
//!
//! The table is transposed: row 0 holds the years, rows 1..=35 hold the
//! single ages 15..=49. Ages are folded into seven 5-year brackets by row
//! offset; the age labels in column 0 are not consulted.

use super::utility::round_to;
use crate::loader::Table;
use crate::records::{Record, Value};
use anyhow::{Result, ensure};

/// Rows per bracket.
pub const BRACKET_SIZE: usize = 5;

/// 15-19, 20-24, 25-29, 30-34, 35-39, 40-44, 45+.
pub const BRACKETS: usize = 7;

const AGE_ROWS: usize = BRACKET_SIZE * BRACKETS;

pub fn transform(table: &Table) -> Result<Vec<Record>> {
    ensure!(
        table.len() > AGE_ROWS,
        "expected a header row and {AGE_ROWS} age rows, found {} rows",
        table.len()
    );

    (1..table.width(0))
        .map(|col| {
            let year = table.year(0, col)?;
            let values = (0..BRACKETS)
                .map(|bracket| bracket_mean(table, col, bracket).map(Value::Float))
                .collect::<Result<Vec<_>>>()?;
            Ok(Record::new(year, values))
        })
        .collect()
}

/// Mean of one bracket's rows in `col`, rounded to one decimal.
fn bracket_mean(table: &Table, col: usize, bracket: usize) -> Result<f64> {
    let first = 1 + bracket * BRACKET_SIZE;
    let sum = (first..first + BRACKET_SIZE)
        .map(|row| table.float(row, col))
        .sum::<Result<f64>>()?;

    Ok(round_to(sum / BRACKET_SIZE as f64, 1))
}
