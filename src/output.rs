//! Payload logging and export.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::charts::Chart;
use crate::records::Record;

/// Logs a payload as pretty-printed JSON at debug level.
pub fn log_payload(records: &[Record]) -> Result<()> {
    debug!("{}", serde_json::to_string_pretty(records)?);
    Ok(())
}

/// Writes a chart's payload to `dir/chart-{n}.json`, creating `dir` if needed.
///
/// Returns the path written.
pub fn write_payload(dir: &Path, chart: Chart, records: &[Record]) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let path = dir.join(format!("chart-{}.json", chart.number()));
    let json = serde_json::to_string_pretty(records)?;
    fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;

    info!(path = %path.display(), records = records.len(), "Payload written");
    Ok(path)
}
