//! Runtime configuration.
//!
//! Values come from the process environment, which `main` first populates
//! from an optional `.env` file:
//!
//! ```text
//! API_BASE=https://data.dashgrid.com
//! API_KEY=...
//! BUCKET_1_ID=...        # one per chart, unset disables that chart
//! DATA_DIR=data
//! ```

use crate::charts::Chart;
use anyhow::{Result, anyhow};
use std::path::PathBuf;

pub const DEFAULT_API_BASE: &str = "https://data.dashgrid.com";
pub const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base: String,
    pub api_key: Option<String>,
    /// Bucket per chart, indexed by `chart.number() - 1`.
    pub buckets: [Option<String>; 4],
    pub data_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source. Empty or
    /// whitespace-only values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let buckets = Chart::ALL.map(|chart| get(&bucket_var(chart)));

        Self {
            api_base: get("API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            api_key: get("API_KEY"),
            buckets,
            data_dir: get("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
        }
    }

    /// The bucket configured for `chart`, if any.
    pub fn bucket(&self, chart: Chart) -> Option<&str> {
        self.buckets[usize::from(chart.number() - 1)].as_deref()
    }

    pub fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| anyhow!("API_KEY must be set to submit data"))
    }

    pub fn data_path(&self, chart: Chart) -> PathBuf {
        self.data_dir.join(chart.file_name())
    }
}

/// Environment variable holding the bucket for `chart`, e.g. `BUCKET_2_ID`.
pub fn bucket_var(chart: Chart) -> String {
    format!("BUCKET_{}_ID", chart.number())
}
