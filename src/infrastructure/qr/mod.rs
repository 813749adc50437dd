//! QR symbol encoding.
//!
//! Provides the [`QrcodeEncoder`] implementation of
//! [`crate::domain::encoder::QrEncoder`], backed by the `qrcode` crate.

mod qrcode_encoder;

pub use qrcode_encoder::QrcodeEncoder;
