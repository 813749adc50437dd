//! Data Transfer Objects for API requests and responses.
//!
//! Query DTOs use Serde with `serde_with` adapters for string-typed query
//! parameters and validator for input validation.

pub mod health;
pub mod qr;
