//! HTTP transport for the log collector.

use async_trait::async_trait;

use super::{LogRecord, LogTransport, TransportError};

/// POSTs log records to a fixed collector URL as JSON.
///
/// The response body is parsed as JSON regardless of status code; the
/// collector's contract does not define an error schema, so a non-2xx reply
/// with a JSON body still counts as delivered.
pub struct HttpCollector {
    client: reqwest::Client,
    collector_url: String,
}

impl HttpCollector {
    /// Creates a collector transport with a fresh HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Client`] if the client cannot be built.
    pub fn new(collector_url: impl Into<String>) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;

        Ok(Self::with_client(client, collector_url))
    }

    /// Creates a collector transport reusing an existing client.
    pub fn with_client(client: reqwest::Client, collector_url: impl Into<String>) -> Self {
        Self {
            client,
            collector_url: collector_url.into(),
        }
    }

    /// The collector endpoint this transport posts to.
    pub fn collector_url(&self) -> &str {
        &self.collector_url
    }
}

#[async_trait]
impl LogTransport for HttpCollector {
    async fn post(&self, record: &LogRecord) -> Result<serde_json::Value, TransportError> {
        let response = self
            .client
            .post(&self.collector_url)
            .json(record)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collector_url_is_kept_verbatim() {
        let transport = HttpCollector::new("http://localhost:8080/logs").unwrap();
        assert_eq!(transport.collector_url(), "http://localhost:8080/logs");
    }
}
