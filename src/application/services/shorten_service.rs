//! Shortening batch validation and result derivation.

use std::sync::Mutex;

use chrono::{Duration, Utc};
use serde_json::json;

use crate::application::form::MAX_INPUTS;
use crate::domain::entities::{ShortenInput, ShortenResult};
use crate::error::AppError;
use crate::utils::code_generator::CodeGenerator;
use crate::utils::validation::validate_input;

/// Expiry window applied when an input does not specify one, in minutes.
pub const DEFAULT_VALIDITY_MINUTES: i64 = 30;

/// Fabricates shortening results for validated input batches.
///
/// There is no backing store: every submission derives fresh results from
/// the inputs alone. The only shared mutable state is the shortcode PRNG,
/// guarded by a mutex.
pub struct ShortenService {
    base_url: String,
    codegen: Mutex<CodeGenerator>,
}

impl ShortenService {
    /// Creates a service with an OS-seeded shortcode generator.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_generator(base_url, CodeGenerator::new())
    }

    /// Creates a service with a caller-supplied generator.
    ///
    /// Tests pass a seeded generator to pin the derived shortcodes.
    pub fn with_generator(base_url: impl Into<String>, codegen: CodeGenerator) -> Self {
        Self {
            base_url: base_url.into(),
            codegen: Mutex::new(codegen),
        }
    }

    /// Validates a batch and derives one result per input.
    ///
    /// Validation is all-or-nothing: when any input fails, no derivation runs
    /// and the error details list every failing input by index. On success
    /// each input is derived independently:
    ///
    /// - shortcode: the supplied one, or a random alphanumeric code
    /// - `created_at`: now; `expires_at`: `created_at` + validity minutes
    ///   (default [`DEFAULT_VALIDITY_MINUTES`])
    /// - `short_url`: `{base_url}/{shortcode}`
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an out-of-range batch size or any
    /// failing input, [`AppError::Internal`] if the generator lock is
    /// poisoned.
    pub fn shorten_batch(&self, inputs: &[ShortenInput]) -> Result<Vec<ShortenResult>, AppError> {
        if inputs.is_empty() || inputs.len() > MAX_INPUTS {
            return Err(AppError::bad_request(
                format!("Batch must contain 1 to {} URLs", MAX_INPUTS),
                json!({ "provided": inputs.len() }),
            ));
        }

        let failures: Vec<serde_json::Value> = inputs
            .iter()
            .enumerate()
            .filter_map(|(index, input)| {
                validate_input(input)
                    .err()
                    .map(|message| json!({ "index": index, "error": message }))
            })
            .collect();

        if !failures.is_empty() {
            return Err(AppError::bad_request(
                "One or more inputs are invalid",
                json!({ "items": failures }),
            ));
        }

        inputs.iter().map(|input| self.derive(input)).collect()
    }

    fn derive(&self, input: &ShortenInput) -> Result<ShortenResult, AppError> {
        let shortcode = if input.shortcode.is_empty() {
            self.next_code()?
        } else {
            input.shortcode.clone()
        };

        let created_at = Utc::now();
        let minutes = input
            .validity_minutes()
            .unwrap_or(DEFAULT_VALIDITY_MINUTES);

        Ok(ShortenResult {
            original_url: input.url.clone(),
            short_url: self.short_url(&shortcode),
            shortcode,
            created_at,
            expires_at: created_at + Duration::minutes(minutes),
        })
    }

    /// Constructs the full short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }

    fn next_code(&self) -> Result<String, AppError> {
        let mut codegen = self
            .codegen
            .lock()
            .map_err(|_| AppError::internal("Code generator unavailable", json!({})))?;
        Ok(codegen.generate())
    }
}
