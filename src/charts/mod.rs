//! The four birth-statistics charts and their table transforms.
//!
//! Each chart knows its source file, how many leading rows to drop, and a
//! pure `transform(&Table) -> Result<Vec<Record>>`. Nothing in here does I/O.

pub mod age_groups;
pub mod births_by_sex;
pub mod fertility;
pub mod stillbirths;
pub mod utility;

use crate::loader::Table;
use crate::records::Record;
use anyhow::{Result, bail};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Chart {
    /// Annual live births by sex.
    BirthsBySex,
    /// Births per 1000 women by age group.
    BirthsPerThousandWomen,
    /// Stillbirths, all states combined.
    Stillbirths,
    /// Average total fertility rate.
    FertilityRate,
}

impl Chart {
    pub const ALL: [Chart; 4] = [
        Chart::BirthsBySex,
        Chart::BirthsPerThousandWomen,
        Chart::Stillbirths,
        Chart::FertilityRate,
    ];

    /// 1-based chart number, shared by the data file and the bucket variable.
    pub fn number(self) -> u8 {
        match self {
            Chart::BirthsBySex => 1,
            Chart::BirthsPerThousandWomen => 2,
            Chart::Stillbirths => 3,
            Chart::FertilityRate => 4,
        }
    }

    pub fn from_number(number: u8) -> Result<Self> {
        match Self::ALL.iter().find(|c| c.number() == number) {
            Some(chart) => Ok(*chart),
            None => bail!("unknown chart {number}, expected 1-4"),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Chart::BirthsBySex => "births by sex",
            Chart::BirthsPerThousandWomen => "births per 1000 women by age group",
            Chart::Stillbirths => "stillbirths",
            Chart::FertilityRate => "fertility rate",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}-chart-data.csv", self.number())
    }

    /// Leading rows dropped by the loader. Transposed tables keep their
    /// header row because it carries the years.
    pub fn skip_rows(self) -> usize {
        match self {
            Chart::BirthsBySex | Chart::FertilityRate => 1,
            Chart::BirthsPerThousandWomen | Chart::Stillbirths => 0,
        }
    }

    pub fn transform(self, table: &Table) -> Result<Vec<Record>> {
        match self {
            Chart::BirthsBySex => births_by_sex::transform(table),
            Chart::BirthsPerThousandWomen => age_groups::transform(table),
            Chart::Stillbirths => stillbirths::transform(table),
            Chart::FertilityRate => fertility::transform(table),
        }
    }

    /// Resolves a list of chart numbers into charts, deduplicated and in
    /// ascending order. An empty list selects every chart.
    pub fn select(numbers: &[u8]) -> Result<Vec<Chart>> {
        if numbers.is_empty() {
            return Ok(Self::ALL.to_vec());
        }

        let mut charts = numbers
            .iter()
            .map(|n| Self::from_number(*n))
            .collect::<Result<Vec<_>>>()?;
        charts.sort();
        charts.dedup();
        Ok(charts)
    }
}

impl fmt::Display for Chart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Chart {} ({})", self.number(), self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_round_trip() {
        for chart in Chart::ALL {
            assert_eq!(Chart::from_number(chart.number()).unwrap(), chart);
        }
        assert!(Chart::from_number(0).is_err());
        assert!(Chart::from_number(5).is_err());
    }

    #[test]
    fn test_file_names() {
        assert_eq!(Chart::BirthsBySex.file_name(), "1-chart-data.csv");
        assert_eq!(Chart::FertilityRate.file_name(), "4-chart-data.csv");
    }

    #[test]
    fn test_select_all_by_default() {
        assert_eq!(Chart::select(&[]).unwrap(), Chart::ALL.to_vec());
    }

    #[test]
    fn test_select_dedups_and_sorts() {
        assert_eq!(
            Chart::select(&[4, 2, 4]).unwrap(),
            vec![Chart::BirthsPerThousandWomen, Chart::FertilityRate]
        );
    }

    #[test]
    fn test_select_rejects_unknown() {
        assert!(Chart::select(&[1, 9]).is_err());
    }
}
