//! Application layer implementing business logic.
//!
//! Orchestrates validation, derivation, and lookups on top of the domain
//! traits, and exposes a clean API for the HTTP handlers.
//!
//! # Modules
//!
//! - [`form`] - Shortening form state machine (add/remove/edit/validate)
//! - [`services`] - Shortening, statistics, and redirect services

pub mod form;
pub mod services;
