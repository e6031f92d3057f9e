use std::time::Duration;

use reqwest::header::ACCEPT;

use crate::{ContactInquiry, DeliveryError};

pub const DEFAULT_RELAY_BASE_URL: &str = "https://formspree.io";

/// One POST to the hosted form relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayRequest {
    pub endpoint: String,
    pub inquiry: ContactInquiry,
}

impl RelayRequest {
    pub fn endpoint_for(base_url: &str, relay_id: &str) -> String {
        format!(
            "{}/f/{}",
            base_url.trim_end_matches('/'),
            urlencoding::encode(relay_id)
        )
    }
}

#[async_trait::async_trait]
pub trait Relay: Send + Sync {
    async fn post(&self, request: &RelayRequest) -> Result<(), DeliveryError>;
}

/// Relay backed by a real HTTP client.
#[derive(Clone)]
pub struct HttpRelay {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpRelay {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { client, timeout })
    }
}

#[async_trait::async_trait]
impl Relay for HttpRelay {
    async fn post(&self, request: &RelayRequest) -> Result<(), DeliveryError> {
        let send = self
            .client
            .post(&request.endpoint)
            .header(ACCEPT, "application/json")
            .json(&request.inquiry)
            .send();

        let response = match tokio::time::timeout(self.timeout, send).await {
            Ok(Ok(response)) => response,
            Ok(Err(err)) if err.is_timeout() => return Err(DeliveryError::TimedOut(self.timeout)),
            Ok(Err(err)) => return Err(err.into()),
            Err(_) => return Err(DeliveryError::TimedOut(self.timeout)),
        };

        let status = response.status();
        if !status.is_success() {
            return Err(DeliveryError::Rejected(status.as_u16()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_id() {
        assert_eq!(
            RelayRequest::endpoint_for("https://formspree.io", "xkgqzabc"),
            "https://formspree.io/f/xkgqzabc"
        );
        assert_eq!(
            RelayRequest::endpoint_for("http://127.0.0.1:8080/", "abc"),
            "http://127.0.0.1:8080/f/abc"
        );
    }
}
