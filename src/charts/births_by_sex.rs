//! Chart 1: annual live births by sex (DESTATIS 12612-0001).
//!
//! Rows are `[year, male, female, ...]`; values are passed through unchanged.

use crate::loader::Table;
use crate::records::{Record, Value};
use anyhow::Result;

pub fn transform(table: &Table) -> Result<Vec<Record>> {
    (0..table.len())
        .map(|row| {
            let male = table.int(row, 1)?;
            let female = table.int(row, 2)?;
            Ok(Record::new(
                table.year(row, 0)?,
                [Value::Int(male), Value::Int(female)],
            ))
        })
        .collect()
}
