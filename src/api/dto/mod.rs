//! Data Transfer Objects for request and response serialization.

pub mod health;
pub mod shorten;
pub mod stats;
