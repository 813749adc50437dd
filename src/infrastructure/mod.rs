//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations backed by third-party libraries.
//!
//! # Modules
//!
//! - [`qr`] - QR symbol encoder built on the `qrcode` crate

pub mod qr;
