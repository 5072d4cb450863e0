//! Domain layer containing business entities and logic.
//!
//! Defines the core data structures and data-access traits independent of
//! infrastructure and presentation concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`redirect`] - Redirect simulation state machine
//!
//! Repository traits defined here are implemented by fixture-backed sources
//! in [`crate::infrastructure`]; business logic lives in
//! [`crate::application::services`].

pub mod entities;
pub mod redirect;
pub mod repositories;
