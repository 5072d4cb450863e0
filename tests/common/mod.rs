#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};

use miniurl::application::services::{RedirectService, ShortenService, StatsService};
use miniurl::infrastructure::{FixtureRedirectMap, FixtureStatsRepository};
use miniurl::reporter::{LogRecord, LogReporter, LogTransport, TransportError};
use miniurl::state::AppState;
use miniurl::utils::code_generator::CodeGenerator;

pub const TEST_BASE_URL: &str = "http://localhost:3000";

/// Transport that captures records instead of talking to a collector.
#[derive(Default)]
pub struct RecordingTransport {
    records: Mutex<Vec<LogRecord>>,
}

impl RecordingTransport {
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().unwrap().clone()
    }

    /// Polls until at least `n` records arrived or a second passed.
    pub async fn wait_for(&self, n: usize) -> Vec<LogRecord> {
        for _ in 0..100 {
            let records = self.records();
            if records.len() >= n {
                return records;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        self.records()
    }
}

#[async_trait]
impl LogTransport for RecordingTransport {
    async fn post(&self, record: &LogRecord) -> Result<Value, TransportError> {
        self.records.lock().unwrap().push(record.clone());
        Ok(json!({ "status": "accepted" }))
    }
}

/// Builds app state over fixtures with a seeded code generator, a zero
/// redirect delay, and a recording log transport.
pub fn create_test_state() -> (AppState, Arc<RecordingTransport>) {
    create_test_state_with_delay(Duration::ZERO)
}

pub fn create_test_state_with_delay(delay: Duration) -> (AppState, Arc<RecordingTransport>) {
    let transport = Arc::new(RecordingTransport::default());
    let reporter = Arc::new(LogReporter::new(transport.clone()));

    let shorten_service = Arc::new(ShortenService::with_generator(
        TEST_BASE_URL,
        CodeGenerator::seeded(42),
    ));
    let stats_service = Arc::new(StatsService::new(Arc::new(FixtureStatsRepository::new(
        TEST_BASE_URL,
    ))));
    let redirect_service = Arc::new(RedirectService::new(
        Arc::new(FixtureRedirectMap::new()),
        delay,
    ));

    let state = AppState::new(
        shorten_service,
        stats_service,
        redirect_service,
        reporter,
        "http://localhost:9999/logs".to_string(),
    );

    (state, transport)
}
