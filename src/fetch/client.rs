//! HTTP capability used by the fetch controller.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::config::Defaults;

use super::error::TransportError;

/// Issues a GET and returns the decoded JSON body.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &str) -> Result<Value, TransportError>;
}

/// Longest prefix of a non-2xx body kept in [`TransportError::Status`].
pub const MAX_ERROR_BODY: usize = 512;

/// [`HttpClient`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: Client,
    timeout: Duration,
    connect_timeout: Duration,
}

impl ReqwestClient {
    pub fn new(timeout: Duration, connect_timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;
        Ok(Self {
            client,
            timeout,
            connect_timeout,
        })
    }

    pub fn from_defaults(defaults: &Defaults) -> Result<Self, reqwest::Error> {
        Self::new(
            Duration::from_secs(u64::from(defaults.timeout_seconds)),
            Duration::from_secs(u64::from(defaults.connect_timeout_seconds)),
        )
    }

    /// Budget that expired for a timed-out request.
    fn expired_budget(&self, during_connect: bool) -> Duration {
        if during_connect {
            self.connect_timeout
        } else {
            self.timeout
        }
    }

    fn classify(&self, url: &str, err: reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout {
                url: url.to_string(),
                millis: self.expired_budget(err.is_connect()).as_millis() as u64,
            }
        } else {
            TransportError::Connect {
                url: url.to_string(),
                source: err,
            }
        }
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str) -> Result<Value, TransportError> {
        tracing::debug!(url = %url, "Sending GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| self.classify(url, err))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map(truncate_body)
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(TransportError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await.map_err(|err| self.classify(url, err))?;
        serde_json::from_str(&text).map_err(|err| TransportError::Decode {
            url: url.to_string(),
            reason: err.to_string(),
        })
    }
}

/// Cut `body` to at most [`MAX_ERROR_BODY`] bytes on a char boundary.
fn truncate_body(mut body: String) -> String {
    if body.len() <= MAX_ERROR_BODY {
        return body;
    }
    let mut end = MAX_ERROR_BODY;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    body.truncate(end);
    body.push_str("...");
    body
}
