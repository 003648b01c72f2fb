use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, warn};

use crate::clients::api_client::ApiClient;
use crate::errors::FetchError;
use crate::models::interview_record::InterviewRecord;

/// Source of the raw interview-record feed.
#[async_trait]
pub trait InterviewRecordsProvider: Send + Sync {
    async fn fetch_records(&self) -> Result<Vec<InterviewRecord>, FetchError>;
}

pub struct HttpRecordsProvider {
    client: ApiClient,
}

impl HttpRecordsProvider {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl InterviewRecordsProvider for HttpRecordsProvider {
    async fn fetch_records(&self) -> Result<Vec<InterviewRecord>, FetchError> {
        let path = self.client.config().schedule_path.clone();
        let body: Value = self.client.get_json(&path).await?;
        decode_feed(body)
    }
}

/// Pulls the rows out of a `{ data: [...], totalCount }` body. Rows that do
/// not decode are dropped; a missing or non-list `data` fails the whole feed.
pub fn decode_feed(body: Value) -> Result<Vec<InterviewRecord>, FetchError> {
    let Value::Object(mut object) = body else {
        return Err(FetchError::MissingData);
    };
    let total_count = object.get("totalCount").and_then(Value::as_u64);
    let Some(Value::Array(rows)) = object.remove("data") else {
        return Err(FetchError::MissingData);
    };

    let row_count = rows.len();
    let records: Vec<InterviewRecord> = rows
        .into_iter()
        .enumerate()
        .filter_map(|(idx, row)| match serde_json::from_value::<InterviewRecord>(row) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping interview record #{}: {}", idx, e);
                None
            }
        })
        .collect();

    info!(
        "Decoded {}/{} interview records (totalCount: {:?})",
        records.len(),
        row_count,
        total_count
    );
    Ok(records)
}
