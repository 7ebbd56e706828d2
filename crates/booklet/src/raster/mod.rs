//! # Raster image processing
//!
//! All drawing operations clip to the canvas. Coordinates may be negative or
//! past the edge (e.g. due to rounding at the border of the grid), and the
//! part of a shape that is off the canvas is silently dropped.

use std::borrow::Cow;

use image::{imageops, Rgba, RgbaImage};

mod data;
pub mod font;
mod scalers;

pub use font::{draw_centered_text, BitmapFace, Face, TtfFace};
pub use scalers::scale_nearest;

/// An axis aligned rectangle in canvas coordinates
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The intersection with a `width` x `height` canvas as `(x0, y0, x1, y1)`
    /// with exclusive upper bounds, or `None` if nothing is left.
    fn clip(&self, width: u32, height: u32) -> Option<(u32, u32, u32, u32)> {
        let x0 = i64::from(self.x).max(0);
        let y0 = i64::from(self.y).max(0);
        let x1 = (i64::from(self.x) + i64::from(self.width)).min(i64::from(width));
        let y1 = (i64::from(self.y) + i64::from(self.height)).min(i64::from(height));
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }
}

/// `a + b`, saturating at the `i32` bounds
pub(crate) fn offset(a: i32, b: u32) -> i32 {
    a.saturating_add(i32::try_from(b).unwrap_or(i32::MAX))
}

/// A sheet that is being painted
///
/// This is a thin wrapper around an [`RgbaImage`] that only exposes
/// operations which are safe to call with any coordinates.
#[derive(Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl From<RgbaImage> for Canvas {
    fn from(image: RgbaImage) -> Self {
        Self { image }
    }
}

impl Canvas {
    /// Create a new, fully transparent canvas
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    /// The width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// The height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The color at the given position, if it is on the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.image.get_pixel_checked(x, y).copied()
    }

    /// Borrow the underlying image
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Turn the canvas into an `RgbaImage` from the `image` crate
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Paint the whole canvas with a single color
    pub fn fill(&mut self, color: Rgba<u8>) {
        for px in self.image.pixels_mut() {
            *px = color;
        }
    }

    /// Replace all pixels within `rect` with `color`
    pub fn fill_rect(&mut self, rect: Rect, color: Rgba<u8>) {
        let Some((x0, y0, x1, y1)) = rect.clip(self.width(), self.height()) else {
            return;
        };
        for y in y0..y1 {
            for x in x0..x1 {
                self.image.put_pixel(x, y, color);
            }
        }
    }

    /// Blend `color` onto a single pixel, scaled by `coverage` (0..=255)
    ///
    /// Takes `i64` coordinates so glyph offsets can be added to an anchor
    /// anywhere in the `i32` range.
    pub fn blend(&mut self, x: i64, y: i64, color: Rgba<u8>, coverage: u8) {
        if coverage == 0 {
            return;
        }
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        let Some(dst) = self.image.get_pixel_mut_checked(x, y) else {
            return;
        };
        let alpha = u32::from(color[3]) * u32::from(coverage) / 255;
        if alpha == 0 {
            return;
        }
        let inv = 255 - alpha;
        let [dr, dg, db, da] = dst.0;
        let mix = |s: u8, d: u8| ((u32::from(s) * alpha + u32::from(d) * inv + 127) / 255) as u8;
        *dst = Rgba([
            mix(color[0], dr),
            mix(color[1], dg),
            mix(color[2], db),
            (alpha + (u32::from(da) * inv + 127) / 255).min(255) as u8,
        ]);
    }

    /// Draw the outline of a rectangle
    ///
    /// The stroke lies inside the rectangle and never gets thicker than the
    /// rectangle itself. Every edge is drawn on its own, so an edge that is
    /// off the canvas does not affect the others.
    pub fn draw_rect_border(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        thickness: u32,
        color: Rgba<u8>,
    ) {
        let t = thickness.min(width).min(height);
        if t == 0 {
            return;
        }
        // top, bottom, left, right
        self.fill_rect(Rect::new(x, y, width, t), color);
        self.fill_rect(Rect::new(x, offset(y, height - t), width, t), color);
        self.fill_rect(Rect::new(x, y, t, height), color);
        self.fill_rect(Rect::new(offset(x, width - t), y, t, height), color);
    }

    /// Draw a horizontal line of `length` pixels, extending downwards from `y`
    pub fn draw_horizontal_rule(
        &mut self,
        x: i32,
        y: i32,
        length: u32,
        thickness: u32,
        color: Rgba<u8>,
    ) {
        self.fill_rect(Rect::new(x, y, length, thickness), color);
    }

    /// Scale `source` into `dest` and draw it over the current content
    pub fn composite_image(&mut self, source: &RgbaImage, dest: Rect) {
        let scaled = if source.dimensions() == (dest.width, dest.height) {
            Cow::Borrowed(source)
        } else {
            Cow::Owned(scale_nearest(source, dest.width, dest.height))
        };
        imageops::overlay(
            &mut self.image,
            scaled.as_ref(),
            i64::from(dest.x),
            i64::from(dest.y),
        );
    }
}
