use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::ACCEPT;
use url::Url;

use crate::{FailureKind, LookupError};

#[derive(Debug, Clone)]
pub struct LookupSettings {
    /// OpenSearch-style endpoint; query parameters are appended to it.
    pub endpoint: String,
    pub limit: u32,
    pub namespace: u32,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://en.wikipedia.org/w/api.php".to_string(),
            limit: 100,
            namespace: 0,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 1024 * 1024,
        }
    }
}

#[async_trait::async_trait]
pub trait Lookup: Send + Sync {
    /// Suggestions for `query`, in the order the service ranked them.
    async fn suggest(&self, query: &str) -> Result<Vec<String>, LookupError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestLookup {
    settings: LookupSettings,
    client: reqwest::Client,
}

impl ReqwestLookup {
    pub fn new(settings: LookupSettings) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| LookupError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub fn request_url(&self, query: &str) -> Result<Url, LookupError> {
        let limit = self.settings.limit.to_string();
        let namespace = self.settings.namespace.to_string();
        Url::parse_with_params(
            &self.settings.endpoint,
            &[
                ("action", "opensearch"),
                ("search", query),
                ("limit", limit.as_str()),
                ("namespace", namespace.as_str()),
                ("format", "json"),
                ("origin", "*"),
            ],
        )
        .map_err(|err| LookupError::new(FailureKind::InvalidUrl, err.to_string()))
    }
}

#[async_trait::async_trait]
impl Lookup for ReqwestLookup {
    async fn suggest(&self, query: &str) -> Result<Vec<String>, LookupError> {
        let url = self.request_url(query)?;

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(too_large(max_bytes, content_len));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(too_large(max_bytes, next_len));
            }
            body.extend_from_slice(&chunk);
        }

        parse_suggestions(&body)
    }
}

/// Extracts the suggestion list from an OpenSearch reply.
///
/// The reply is a JSON array whose first element echoes the query and whose
/// second element lists the suggestions. Services may append further arrays
/// (descriptions, links); those are ignored.
pub fn parse_suggestions(body: &[u8]) -> Result<Vec<String>, LookupError> {
    let mut parts: Vec<serde_json::Value> = serde_json::from_slice(body)
        .map_err(|err| LookupError::new(FailureKind::MalformedResponse, err.to_string()))?;
    if parts.len() < 2 {
        return Err(LookupError::new(
            FailureKind::MalformedResponse,
            format!("expected [query, suggestions], got {} element(s)", parts.len()),
        ));
    }
    serde_json::from_value(parts.swap_remove(1))
        .map_err(|err| LookupError::new(FailureKind::MalformedResponse, err.to_string()))
}

fn too_large(max_bytes: u64, actual: u64) -> LookupError {
    LookupError::new(
        FailureKind::TooLarge {
            max_bytes,
            actual: Some(actual),
        },
        "response too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> LookupError {
    if err.is_timeout() {
        return LookupError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return LookupError::new(FailureKind::MalformedResponse, err.to_string());
    }
    LookupError::new(FailureKind::Network, err.to_string())
}
