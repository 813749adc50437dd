//! Core domain entities representing the render data model.
//!
//! Entities are transient value types. Nothing here is persisted or shared
//! between renders.
//!
//! # Entity Types
//!
//! - [`RenderRequest`] - One QR code render: text, size, colors, level
//! - [`HexColor`] - An RGB color parsed from `#rrggbb` / `#rgb`
//! - [`ErrorCorrectionLevel`] - QR redundancy tier (`L`, `M`, `Q`, `H`)
//! - [`SizeLimits`] - Clamp bounds for requested canvas sizes

pub mod color;
pub mod render_request;

pub use color::{ColorParseError, HexColor};
pub use render_request::{ErrorCorrectionLevel, LevelParseError, RenderRequest, SizeLimits};
