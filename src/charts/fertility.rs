//! Chart 4: total fertility rate (DESTATIS 12612-0009).
//!
//! Rows are `[year, rate_15_44, rate_15_49]`; the two rates are averaged.

use super::utility::round_to;
use crate::loader::Table;
use crate::records::{Record, Value};
use anyhow::Result;

pub fn transform(table: &Table) -> Result<Vec<Record>> {
    (0..table.len())
        .map(|row| {
            let rate_15_44 = table.float(row, 1)?;
            let rate_15_49 = table.float(row, 2)?;
            let avg = round_to((rate_15_44 + rate_15_49) / 2.0, 3);
            Ok(Record::new(table.year(row, 0)?, [Value::Float(avg)]))
        })
        .collect()
}
