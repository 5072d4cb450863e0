//! Remote log event reporting.
//!
//! Builds structured [`LogRecord`]s and forwards them to a remote collector
//! through a [`LogTransport`]. Each send is a single POST with no retry, no
//! batching, and no ordering guarantee between concurrent sends.
//!
//! Delivery failures never propagate as errors: they are written to the
//! diagnostic log and surfaced to interested callers through
//! [`ReportOutcome`], so fire-and-forget call sites can simply drop the
//! outcome while tests assert on it.

pub mod http;

pub use http::HttpCollector;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

/// Originating half of the system for a log event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stack {
    Backend,
    Frontend,
}

/// Unknown stack name supplied to [`Stack::from_str`].
#[derive(Debug, thiserror::Error)]
#[error("unknown stack: {0}")]
pub struct ParseStackError(String);

impl FromStr for Stack {
    type Err = ParseStackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "backend" => Ok(Stack::Backend),
            "frontend" => Ok(Stack::Frontend),
            other => Err(ParseStackError(other.to_string())),
        }
    }
}

/// Severity of a log event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

/// Unknown level name supplied to [`Level::from_str`].
#[derive(Debug, thiserror::Error)]
#[error("unknown log level: {0}")]
pub struct ParseLevelError(String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "fatal" => Ok(Level::Fatal),
            other => Err(ParseLevelError(other.to_string())),
        }
    }
}

/// Wire form of one log event.
///
/// `stack` and `level` serialize lowercase by construction; `package` is
/// lowercased in [`LogRecord::new`]. The message is transmitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub stack: Stack,
    pub level: Level,
    pub package: String,
    pub message: String,
}

impl LogRecord {
    pub fn new(
        stack: Stack,
        level: Level,
        package: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            stack,
            level,
            package: package.into().to_lowercase(),
            message: message.into(),
        }
    }
}

/// Failure while talking to the collector.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    #[error("collector request failed: {0}")]
    Request(String),

    #[error("collector response was not JSON: {0}")]
    Decode(String),
}

/// Result of one delivery attempt.
///
/// `Delivered` carries the collector's parsed response body. `Failed` means
/// the event was dropped; nothing is retried.
#[derive(Debug)]
pub enum ReportOutcome {
    Delivered(serde_json::Value),
    Failed(TransportError),
}

impl ReportOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, ReportOutcome::Delivered(_))
    }
}

/// Transport seam between the reporter and the collector.
///
/// The production implementation is [`HttpCollector`]; tests substitute a
/// mock to assert on the exact transmitted record.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LogTransport: Send + Sync {
    /// Sends one record to the collector and parses the response body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] on connection, request, or decode failure.
    async fn post(&self, record: &LogRecord) -> Result<serde_json::Value, TransportError>;
}

/// Forwards log events to the configured collector.
///
/// Cheap to clone behind an [`Arc`]; concurrent sends are independent.
pub struct LogReporter {
    transport: Arc<dyn LogTransport>,
}

impl LogReporter {
    pub fn new(transport: Arc<dyn LogTransport>) -> Self {
        Self { transport }
    }

    /// Builds a record from the call-site fields and delivers it once.
    ///
    /// Never returns an error: failures are logged to the diagnostic sink
    /// and reported through the returned [`ReportOutcome`].
    pub async fn send(
        &self,
        stack: Stack,
        level: Level,
        package: &str,
        message: &str,
    ) -> ReportOutcome {
        self.dispatch(LogRecord::new(stack, level, package, message))
            .await
    }

    /// Delivers an already-built record.
    pub async fn dispatch(&self, record: LogRecord) -> ReportOutcome {
        match self.transport.post(&record).await {
            Ok(body) => ReportOutcome::Delivered(body),
            Err(e) => {
                tracing::warn!(error = %e, package = %record.package, "log delivery failed");
                ReportOutcome::Failed(e)
            }
        }
    }
}
