//! Utility functions shared across the application.
//!
//! - [`code_generator`] - Seedable random shortcode generation
//! - [`validation`] - Per-input validation rules and error messages

pub mod code_generator;
pub mod validation;
