use async_trait::async_trait;
use reqwest::Client;
use shared::protocol::AuthorityRequest;
use thiserror::Error;
use tracing::debug;
use url::Url;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid authority url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("authority url {0:?} must use http or https")]
    UnsupportedScheme(String),
    #[error("request {path} failed: {source}")]
    Request {
        path: String,
        #[source]
        source: reqwest::Error,
    },
}

/// One request, one response body. No retries, no timeouts.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, request: &AuthorityRequest) -> Result<String, TransportError>;
}

pub struct HttpTransport {
    http: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        Ok(Self {
            http: Client::new(),
            base_url: normalize_base_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, request: &AuthorityRequest) -> Result<String, TransportError> {
        let path = request.path();
        let url = format!("{}{path}", self.base_url);
        debug!(request = request.name(), %url, "sending authority request");

        let fail = |source: reqwest::Error| TransportError::Request {
            path: path.clone(),
            source,
        };
        let res = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(fail)?
            .error_for_status()
            .map_err(fail)?;
        res.text().await.map_err(fail)
    }
}

/// Validates `raw` and strips trailing slashes so request paths can be appended.
pub fn normalize_base_url(raw: &str) -> Result<String, TransportError> {
    let trimmed = raw.trim();
    let parsed = Url::parse(trimmed).map_err(|source| TransportError::InvalidUrl {
        url: trimmed.to_string(),
        source,
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(TransportError::UnsupportedScheme(trimmed.to_string()));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
