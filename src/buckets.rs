//! Client for the bucket data API.

use crate::records::Record;
use crate::transport::{HttpClient, post_json};
use anyhow::{Context, Result};
use tracing::info;

/// Submits record batches to `{api_base}/api/buckets/{bucket_id}`.
///
/// Authentication is the wrapped client's concern; see
/// [`crate::transport::auth::ApiKey`].
pub struct BucketClient<C> {
    client: C,
    api_base: String,
}

impl<C: HttpClient> BucketClient<C> {
    pub fn new(client: C, api_base: &str) -> Self {
        Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn bucket_url(&self, bucket_id: &str) -> String {
        format!("{}/api/buckets/{}", self.api_base, bucket_id)
    }

    /// POSTs `records` as one JSON array. No retries: any failure is
    /// returned to the caller.
    #[tracing::instrument(skip(self, records), fields(records = records.len()))]
    pub async fn submit(&self, bucket_id: &str, records: &[Record]) -> Result<()> {
        let url = self.bucket_url(bucket_id);
        post_json(&self.client, &url, records)
            .await
            .with_context(|| format!("submitting to bucket {bucket_id} failed"))?;

        info!("Bucket accepted records");
        Ok(())
    }
}
