//! Layers the background, QR bitmap and logo badge onto one surface.
//!
//! Paint order is fixed and every step occludes the previous ones:
//!
//! 1. background fill
//! 2. QR bitmap, inset by the quiet zone
//! 3. badge: white halo stroke, black rounded square, white "P" monogram

use crate::domain::composite::CompositeParameters;
use crate::domain::entities::HexColor;
use crate::domain::geometry;
use crate::domain::surface::Surface;
use image::{Rgba, RgbaImage};

const BADGE_COLOR: Rgba<u8> = Rgba([0x00, 0x00, 0x00, 0xff]);
const MARK_COLOR: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);
const HALO_COLOR: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);

/// Produces the final `size × size` surface.
///
/// `qr` is expected to be `qr_draw_size` square; other sizes are rescaled.
/// The output is a pure function of the inputs. Returns `None` for a zero
/// canvas size.
pub fn composite(
    background: HexColor,
    qr: &RgbaImage,
    params: &CompositeParameters,
) -> Option<Surface> {
    let mut surface = Surface::new(params.size, params.size)?;

    surface.fill(background.to_rgba());
    surface.draw_image(qr, params.qr_offset, params.qr_offset, params.qr_draw_size);

    if params.has_logo() {
        draw_badge(&mut surface, params);
    }

    Some(surface)
}

fn draw_badge(surface: &mut Surface, params: &CompositeParameters) {
    let (cx, cy) = params.center();
    let size = params.logo_size;
    let padding = params.logo_padding;
    let radius = params.logo_corner_radius;

    if params.halo && padding > 0.0 {
        // Centered on a path half a stroke outside the badge, so the halo's
        // inner edge meets the badge edge.
        if let Some(halo) = geometry::rounded_rect(
            cx - size / 2.0 - padding / 2.0,
            cy - size / 2.0 - padding / 2.0,
            size + padding,
            size + padding,
            radius + padding / 2.0,
        ) {
            surface.stroke_path(&halo, padding, HALO_COLOR);
        }
    }

    if let Some(badge) = geometry::rounded_rect(cx - size / 2.0, cy - size / 2.0, size, size, radius)
    {
        surface.fill_path(&badge, BADGE_COLOR);
    }

    draw_monogram(surface, cx, cy, size);
}

/// Draws the "P" mark from plain shapes so no font is needed.
fn draw_monogram(surface: &mut Surface, cx: f32, cy: f32, logo_size: f32) {
    let glyph = logo_size * 0.55;
    let stem_x = cx - glyph * 0.35;
    let top = cy - glyph * 0.5;
    let stem_width = glyph * 0.2;

    let stem = geometry::rect(stem_x, top, stem_width, glyph);

    // Bowl overlaps the stem slightly to avoid a seam.
    let bowl_x = stem_x + stem_width;
    let bowl_width = glyph * 0.5;
    let bowl_height = glyph * 0.55;
    let overlap = stem_width * 0.25;
    let bowl = geometry::rounded_rect(
        bowl_x - overlap,
        top,
        bowl_width,
        bowl_height,
        bowl_height / 2.0,
    );

    let inner_pad = glyph * 0.15;
    let counter_height = bowl_height - inner_pad * 2.0;
    let counter = geometry::rounded_rect(
        bowl_x,
        top + inner_pad,
        bowl_width - inner_pad,
        counter_height,
        counter_height / 2.0,
    );

    for (shape, color) in [(stem, MARK_COLOR), (bowl, MARK_COLOR), (counter, BADGE_COLOR)] {
        if let Some(path) = shape {
            surface.fill_path(&path, color);
        }
    }
}
