//! Domain layer containing render entities and the compositing core.
//!
//! Nothing in this layer performs I/O or depends on the HTTP stack. The QR
//! symbol itself comes from an implementation of [`encoder::QrEncoder`]
//! provided by the infrastructure layer.
//!
//! # Architecture
//!
//! - [`entities`] - Render request value types
//! - [`encoder`] - QR encoder trait definition
//! - [`composite`] - Layout ratios and derived per-render geometry
//! - [`geometry`] - Vector paths, including the rounded rectangle
//! - [`surface`] - Owned RGBA drawing surface
//! - [`compositor`] - Background, QR and badge layering
//!
//! # Render Flow
//!
//! 1. [`entities::RenderRequest`] arrives with an already clamped size
//! 2. [`composite::CompositeParameters`] are derived from size and layout
//! 3. The encoder produces a `qr_draw_size` square bitmap with no quiet zone
//! 4. [`compositor::composite`] layers everything onto a [`surface::Surface`]

pub mod composite;
pub mod compositor;
pub mod encoder;
pub mod entities;
pub mod geometry;
pub mod surface;
