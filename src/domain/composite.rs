//! Layout ratios and the per-render geometry derived from them.

use crate::domain::geometry::Bounds;

/// Tunable layout ratios, all relative to the canvas or badge side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Quiet zone on each side, as a fraction of the canvas size.
    pub margin_ratio: f32,
    /// Badge side as a fraction of the canvas size. `0` disables the badge.
    pub logo_ratio: f32,
    /// Upper bound for the badge side in pixels.
    pub logo_max_px: Option<f32>,
    /// Halo stroke width as a fraction of the badge side.
    pub padding_ratio: f32,
    /// Badge corner radius as a fraction of the badge side.
    pub corner_ratio: f32,
    /// Whether the white separation halo is stroked around the badge.
    pub halo: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            margin_ratio: 0.05,
            logo_ratio: 0.22,
            logo_max_px: None,
            padding_ratio: 0.12,
            corner_ratio: 0.25,
            halo: true,
        }
    }
}

/// Geometry of a single render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeParameters {
    pub size: u32,
    /// Exact quiet-zone width, `size × margin_ratio`.
    pub margin: f32,
    /// Integer pixel inset of the QR image.
    pub qr_offset: u32,
    /// Side of the QR image in pixels; insets are equal on all four sides.
    pub qr_draw_size: u32,
    pub logo_size: f32,
    pub logo_padding: f32,
    pub logo_corner_radius: f32,
    pub halo: bool,
}

impl CompositeParameters {
    pub fn derive(size: u32, layout: &LayoutConfig) -> Self {
        let size_f = size as f32;
        let margin = size_f * layout.margin_ratio;
        let qr_offset = (margin.round() as u32).min(size / 2);

        let mut logo_size = size_f * layout.logo_ratio;
        if let Some(max) = layout.logo_max_px {
            logo_size = logo_size.min(max);
        }

        Self {
            size,
            margin,
            qr_offset,
            qr_draw_size: size - 2 * qr_offset,
            logo_size,
            logo_padding: logo_size * layout.padding_ratio,
            logo_corner_radius: logo_size * layout.corner_ratio,
            halo: layout.halo,
        }
    }

    /// Canvas center, which is also the badge center.
    pub fn center(&self) -> (f32, f32) {
        let c = self.size as f32 / 2.0;
        (c, c)
    }

    pub fn has_logo(&self) -> bool {
        self.logo_size > 0.0
    }

    /// Bounding box of the filled badge square.
    pub fn badge_bounds(&self) -> Bounds {
        let (cx, cy) = self.center();
        let half = self.logo_size / 2.0;
        Bounds {
            min_x: cx - half,
            min_y: cy - half,
            max_x: cx + half,
            max_y: cy + half,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_default_geometry_for_256() {
        let params = CompositeParameters::derive(256, &LayoutConfig::default());

        assert!(approx(params.margin, 12.8));
        assert_eq!(params.qr_offset, 13);
        assert_eq!(params.qr_draw_size, 230);
        assert!(approx(params.logo_size, 56.32));
        assert!(approx(params.logo_padding, 56.32 * 0.12));
        assert!(approx(params.logo_corner_radius, 14.08));
        assert!(params.halo);
    }

    #[test]
    fn test_qr_insets_equal_for_all_sizes() {
        let layout = LayoutConfig::default();
        for size in [32, 100, 255, 256, 333, 600, 1024] {
            let params = CompositeParameters::derive(size, &layout);
            let far_inset = size - params.qr_offset - params.qr_draw_size;

            assert_eq!(params.qr_offset, far_inset, "size {size}");
            assert!(approx(params.margin, size as f32 * 0.05));
            assert!((params.qr_offset as f32 - params.margin).abs() <= 0.5);
        }
    }

    #[test]
    fn test_badge_centered_for_all_sizes_and_ratios() {
        for size in [64, 200, 256, 1000] {
            for logo_ratio in [0.1, 0.15, 0.22, 0.3] {
                let layout = LayoutConfig {
                    logo_ratio,
                    ..LayoutConfig::default()
                };
                let params = CompositeParameters::derive(size, &layout);
                let center = params.badge_bounds().center();

                assert!(approx(center.x, size as f32 / 2.0));
                assert!(approx(center.y, size as f32 / 2.0));
                assert!(approx(params.badge_bounds().width(), params.logo_size));
            }
        }
    }

    #[test]
    fn test_logo_cap_applies() {
        let layout = LayoutConfig {
            logo_ratio: 0.1,
            logo_max_px: Some(25.0),
            ..LayoutConfig::default()
        };

        assert!(approx(CompositeParameters::derive(200, &layout).logo_size, 20.0));
        assert!(approx(CompositeParameters::derive(600, &layout).logo_size, 25.0));
    }

    #[test]
    fn test_zero_logo_ratio_disables_badge() {
        let layout = LayoutConfig {
            logo_ratio: 0.0,
            ..LayoutConfig::default()
        };
        assert!(!CompositeParameters::derive(256, &layout).has_logo());
    }
}
