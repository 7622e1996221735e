//! Chart 3: stillbirths, summed over all federal states (DESTATIS BEV032).
//!
//! Row 0 holds the years, rows 1..=16 hold one state each.

use crate::loader::Table;
use crate::records::{Record, Value};
use anyhow::{Result, anyhow, ensure};

pub const STATES: usize = 16;

pub fn transform(table: &Table) -> Result<Vec<Record>> {
    ensure!(
        table.len() > STATES,
        "expected a header row and {STATES} state rows, found {} rows",
        table.len()
    );

    (1..table.width(0))
        .map(|col| {
            let year = table.year(0, col)?;
            let total = (1..=STATES).try_fold(0i64, |acc, row| {
                acc.checked_add(table.int(row, col)?)
                    .ok_or_else(|| anyhow!("stillbirth total for {year} overflows at row {row}"))
            })?;
            Ok(Record::new(year, [Value::Int(total)]))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(years: &[&str], value: impl Fn(usize, usize) -> i64) -> Table {
        let mut rows = vec![
            std::iter::once("Land".to_string())
                .chain(years.iter().map(|y| y.to_string()))
                .collect::<Vec<_>>(),
        ];
        for row in 1..=STATES {
            let mut cells = vec![format!("state {row}")];
            cells.extend((1..=years.len()).map(|col| value(row, col).to_string()));
            rows.push(cells);
        }
        Table::from_rows(rows)
    }

    #[test]
    fn test_sums_all_states() {
        // 1 + 2 + ... + 16 = 136
        let table = table(&["2020", "2021"], |row, col| (row * col) as i64);
        let records = transform(&table).unwrap();

        assert_eq!(
            records,
            vec![
                Record::new("2020", [Value::Int(136)]),
                Record::new("2021", [Value::Int(272)]),
            ]
        );
    }

    #[test]
    fn test_rows_after_states_ignored() {
        let mut rows = table(&["2020"], |_, _| 1).rows().to_vec();
        rows.push(vec!["Deutschland".to_string(), "9999".to_string()]);
        let records = transform(&Table::from_rows(rows)).unwrap();

        assert_eq!(records[0].d[0].v, Value::Int(16));
    }

    #[test]
    fn test_too_few_rows_fails() {
        let mut rows = table(&["2020"], |_, _| 1).rows().to_vec();
        rows.truncate(STATES);
        assert!(transform(&Table::from_rows(rows)).is_err());
    }

    #[test]
    fn test_overflowing_total_fails() {
        let table = table(&["2020"], |row, _| if row <= 2 { i64::MAX } else { 0 });
        let err = transform(&table).unwrap_err().to_string();
        assert!(err.contains("overflows"));
    }

    #[test]
    fn test_missing_value_fails() {
        let mut rows = table(&["2020"], |_, _| 1).rows().to_vec();
        rows[4][1] = String::new();
        assert!(transform(&Table::from_rows(rows)).is_err());
    }
}
