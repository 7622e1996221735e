//! Drives the charts: skip if unconfigured, read, transform, submit.

use crate::buckets::BucketClient;
use crate::charts::Chart;
use crate::config::Config;
use crate::loader::read_csv;
use crate::output::log_payload;
use crate::records::Record;
use crate::transport::HttpClient;
use anyhow::{Context, Result};
use tracing::info;

/// What happened to a single chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Submitted { records: usize },
    Skipped,
}

/// Reads the chart's CSV from the data directory and transforms it.
#[tracing::instrument(skip_all, fields(chart = chart.number()))]
pub fn build_payload(config: &Config, chart: Chart) -> Result<Vec<Record>> {
    let table = read_csv(&config.data_path(chart), chart.skip_rows())?;
    chart
        .transform(&table)
        .with_context(|| format!("{chart}: unexpected data in {}", chart.file_name()))
}

/// Submits one chart to its bucket.
///
/// An unconfigured bucket is not an error: the chart is skipped before its
/// data file is even opened.
#[tracing::instrument(skip_all, fields(chart = chart.number()))]
pub async fn run_chart<C: HttpClient>(
    api: &BucketClient<C>,
    config: &Config,
    chart: Chart,
) -> Result<Outcome> {
    let Some(bucket) = config.bucket(chart) else {
        info!("Bucket {} not configured", chart.number());
        return Ok(Outcome::Skipped);
    };

    info!(bucket, "{chart}: submitting");
    let records = build_payload(config, chart)?;
    api.submit(bucket, &records)
        .await
        .with_context(|| format!("{chart} submission failed"))?;

    info!(records = records.len(), "Submitted records");
    Ok(Outcome::Submitted {
        records: records.len(),
    })
}

/// Runs `charts` strictly one after another, stopping at the first failure.
pub async fn run_all<C: HttpClient>(
    api: &BucketClient<C>,
    config: &Config,
    charts: &[Chart],
) -> Result<Vec<(Chart, Outcome)>> {
    let mut outcomes = Vec::with_capacity(charts.len());
    for &chart in charts {
        let outcome = run_chart(api, config, chart).await?;
        outcomes.push((chart, outcome));
    }
    Ok(outcomes)
}

/// Like [`run_all`] but only logs what would be sent.
#[tracing::instrument(skip_all)]
pub fn dry_run(config: &Config, charts: &[Chart]) -> Result<Vec<(Chart, Outcome)>> {
    let mut outcomes = Vec::with_capacity(charts.len());
    for &chart in charts {
        let Some(bucket) = config.bucket(chart) else {
            info!("Bucket {} not configured", chart.number());
            outcomes.push((chart, Outcome::Skipped));
            continue;
        };

        let records = build_payload(config, chart)?;
        info!(
            chart = chart.number(),
            bucket,
            records = records.len(),
            "Dry run, not submitting"
        );
        log_payload(&records)?;
        outcomes.push((
            chart,
            Outcome::Submitted {
                records: records.len(),
            },
        ));
    }
    Ok(outcomes)
}
