//! Core business data structures.

pub mod shorten;
pub mod stat;

pub use shorten::{MAX_VALIDITY_MINUTES, ShortenInput, ShortenResult};
pub use stat::{ClickRecord, StatRecord};
