//! Utility functions used across the application.
//!
//! - [`url_normalizer`] - Scheme completion for bare host names

pub mod url_normalizer;
