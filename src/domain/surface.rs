//! Owned RGBA drawing surface.
//!
//! The surface is the only mutable state in a render: it is created per
//! request, painted in order, encoded to PNG and dropped.

use image::imageops::{self, FilterType};
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use tiny_skia::{
    BlendMode, Color, ColorU8, FillRule, FilterQuality, IntSize, Paint, Path, Pixmap, PixmapPaint,
    Stroke, Transform,
};

/// A fixed-size pixel buffer with canvas-style paint operations.
///
/// Paths are rasterized by `tiny_skia` with anti-aliasing turned off, so
/// the same sequence of operations always produces the same pixels.
#[derive(Debug, Clone)]
pub struct Surface {
    pixmap: Pixmap,
}

impl Surface {
    /// Creates a transparent surface. `None` when either side is zero.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Pixmap::new(width, height).map(|pixmap| Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Color at `(x, y)`, transparent outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        self.pixmap
            .pixel(x, y)
            .map(|p| {
                let c = p.demultiply();
                Rgba([c.red(), c.green(), c.blue(), c.alpha()])
            })
            .unwrap_or(Rgba([0, 0, 0, 0]))
    }

    /// Copies the surface into an `image` buffer with straight alpha.
    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width(), self.height(), |x, y| self.pixel(x, y))
    }

    /// Paints every pixel with `color`.
    pub fn fill(&mut self, color: Rgba<u8>) {
        let [r, g, b, a] = color.0;
        self.pixmap.fill(Color::from_rgba8(r, g, b, a));
    }

    /// Copies `image` with its top-left corner at `(x, y)`, scaled to
    /// `size × size` with nearest-neighbour sampling when it differs.
    ///
    /// Source pixels replace the destination, alpha included.
    pub fn draw_image(&mut self, image: &RgbaImage, x: u32, y: u32, size: u32) {
        let scaled;
        let image = if image.width() == size && image.height() == size {
            image
        } else {
            scaled = imageops::resize(image, size, size, FilterType::Nearest);
            &scaled
        };

        let Some(source) = pixmap_from_image(image) else {
            return;
        };
        let paint = PixmapPaint {
            blend_mode: BlendMode::Source,
            quality: FilterQuality::Nearest,
            ..PixmapPaint::default()
        };
        self.pixmap.draw_pixmap(
            x as i32,
            y as i32,
            source.as_ref(),
            &paint,
            Transform::identity(),
            None,
        );
    }

    /// Fills the interior of `path` using the non-zero winding rule.
    pub fn fill_path(&mut self, path: &Path, color: Rgba<u8>) {
        self.pixmap.fill_path(
            path,
            &solid_paint(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    /// Strokes the outline of `path` with a line of the given width,
    /// centered on the outline.
    pub fn stroke_path(&mut self, path: &Path, width: f32, color: Rgba<u8>) {
        if width <= 0.0 {
            return;
        }
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            path,
            &solid_paint(color),
            &stroke,
            Transform::identity(),
            None,
        );
    }

    /// Encodes the surface as PNG bytes.
    pub fn encode_png(&self) -> Result<Vec<u8>, image::ImageError> {
        let mut bytes = Vec::new();
        self.to_image()
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }
}

fn solid_paint(color: Rgba<u8>) -> Paint<'static> {
    let [r, g, b, a] = color.0;
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = false;
    paint
}

/// Converts straight RGBA into a premultiplied pixmap.
fn pixmap_from_image(image: &RgbaImage) -> Option<Pixmap> {
    let size = IntSize::from_wh(image.width(), image.height())?;
    let data = image
        .pixels()
        .flat_map(|Rgba([r, g, b, a])| {
            let p = ColorU8::from_rgba(*r, *g, *b, *a).premultiply();
            [p.red(), p.green(), p.blue(), p.alpha()]
        })
        .collect();
    Pixmap::from_vec(data, size)
}
