use super::{RemoteStore, StoreError};
use crate::models::{RecordPatch, TrackerRecord};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use std::time::Duration;

const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// A hosted PostgREST table (Supabase style) holding the tracker row.
pub struct RestStore {
    client: Client,
    base_url: String,
    api_key: String,
    table: String,
}

impl RestStore {
    pub fn new(base_url: String, api_key: String, table: String) -> Result<Self, StoreError> {
        Self::with_timeouts(base_url, api_key, table, CONNECT_TIMEOUT, REQUEST_TIMEOUT)
    }

    /// Requests that exceed `request` fail, so a stalled backend cannot hold the tracker.
    pub fn with_timeouts(
        base_url: String,
        api_key: String,
        table: String,
        connect: Duration,
        request: Duration,
    ) -> Result<Self, StoreError> {
        let client = Client::builder()
            .connect_timeout(connect)
            .timeout(request)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            table,
        })
    }

    fn row_url(&self, id: i64) -> String {
        format!("{}/rest/v1/{}?id=eq.{id}", self.base_url, self.table)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
    }
}

#[async_trait]
impl RemoteStore for RestStore {
    async fn fetch_record(&self, id: i64) -> Result<TrackerRecord, StoreError> {
        let request = self
            .client
            .get(format!("{}&select=*", self.row_url(id)))
            .header("Accept", SINGLE_OBJECT);
        let resp = self.authorized(request).send().await?;

        // PostgREST answers 406 when the single-object read matches no row.
        if resp.status() == StatusCode::NOT_ACCEPTABLE || resp.status() == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(id));
        }
        let resp = ensure_success(resp).await?;
        Ok(resp.json::<TrackerRecord>().await?)
    }

    async fn update_record(&self, id: i64, patch: &RecordPatch) -> Result<(), StoreError> {
        let request = self
            .client
            .patch(self.row_url(id))
            .header("Prefer", "return=minimal")
            .json(patch);
        let resp = self.authorized(request).send().await?;
        ensure_success(resp).await?;
        Ok(())
    }
}

async fn ensure_success(resp: Response) -> Result<Response, StoreError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    Err(StoreError::Status { status, body })
}
