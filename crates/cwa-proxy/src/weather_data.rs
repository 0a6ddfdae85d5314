use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::models::datastore::{DatastoreResponse, Records};

/// 36-hour county forecast dataset.
pub const THIRTY_SIX_HOUR_DATASET: &str = "F-C0032-001";
/// Weekly county forecast dataset.
pub const WEEKLY_DATASET: &str = "F-D0047-091";

const THIRTY_SIX_HOUR_ELEMENTS: [&str; 6] = ["Wx", "PoP", "MinT", "MaxT", "CI", "WS"];
const WEEKLY_ELEMENTS: [&str; 5] = ["Wx", "PoP12h", "MinT", "MaxT", "T"];

const USER_AGENT: &str = "cwa-proxy/1.0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("CWA_API_KEY is not configured")]
    MissingApiKey,
    #[error("failed to call the CWA datastore: {0}")]
    Request(#[from] reqwest::Error),
    #[error("CWA datastore returned status {status}: {detail}")]
    UpstreamStatus { status: u16, detail: String },
}

/// Outbound collaborator boundary. Routes hold an `Arc<dyn WeatherData>` so
/// tests can swap the CWA datastore for a mock.
#[async_trait]
pub trait WeatherData: Send + Sync {
    async fn thirty_six_hour(&self, location_names: Vec<String>) -> Result<Records, Error>;
    async fn weekly(&self, location_names: Vec<String>) -> Result<Records, Error>;
}

pub struct CwaClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl CwaClient {
    pub fn new(base_url: String, api_key: Option<String>) -> Result<Self, Error> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(CwaClient {
            client,
            base_url,
            api_key,
        })
    }

    async fn fetch_datastore(
        &self,
        dataset: &str,
        location_names: Vec<String>,
        elements: &[&str],
    ) -> Result<Records, Error> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(Error::MissingApiKey)?;

        let url = format!("{}/v1/rest/datastore/{}", self.base_url, dataset);
        let location_names = location_names.join(",");
        let elements = elements.join(",");
        let response = self
            .client
            .get(&url)
            .query(&[
                ("Authorization", api_key),
                ("locationName", location_names.as_str()),
                ("elementName", elements.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(Error::UpstreamStatus {
                status: status.as_u16(),
                detail,
            });
        }

        let payload: DatastoreResponse = response.json().await?;
        Ok(payload.records)
    }
}

#[async_trait]
impl WeatherData for CwaClient {
    async fn thirty_six_hour(&self, location_names: Vec<String>) -> Result<Records, Error> {
        self.fetch_datastore(THIRTY_SIX_HOUR_DATASET, location_names, &THIRTY_SIX_HOUR_ELEMENTS)
            .await
    }

    async fn weekly(&self, location_names: Vec<String>) -> Result<Records, Error> {
        self.fetch_datastore(WEEKLY_DATASET, location_names, &WEEKLY_ELEMENTS)
            .await
    }
}
