//! # Text rendering
//!
//! The layout only needs to measure a single character and to draw a run of
//! text at a baseline, so fonts are hidden behind the small [`Face`] trait.

use image::Rgba;

use super::{data, Canvas};

/// A font at a fixed size
pub trait Face {
    /// The horizontal advance of `ch` in pixels
    fn advance(&self, ch: char) -> u32;

    /// The distance between two baselines in pixels
    fn line_height(&self) -> u32;

    /// Draw `text` starting at `x`, with the baseline at `baseline`
    fn draw_text(&self, canvas: &mut Canvas, text: &str, x: i32, baseline: i32, color: Rgba<u8>);
}

/// Draw `text` so that it is roughly centered on `y`
///
/// The baseline is put a quarter line height below `y`. This is not exact
/// typographic centering, but close enough for digits.
pub fn draw_centered_text(
    canvas: &mut Canvas,
    text: &str,
    face: &dyn Face,
    x: i32,
    y: i32,
    color: Rgba<u8>,
) {
    let baseline = y.saturating_add((face.line_height() / 4) as i32);
    face.draw_text(canvas, text, x, baseline, color);
}

/// The built-in monospace face
///
/// Every character is 7 pixels wide and lines are 13 pixels high. Only digits
/// and a few punctuation characters have a glyph, anything else is drawn as
/// a hollow box.
#[derive(Debug, Default, Copy, Clone)]
pub struct BitmapFace;

impl Face for BitmapFace {
    fn advance(&self, _ch: char) -> u32 {
        data::CELL_WIDTH
    }

    fn line_height(&self) -> u32 {
        data::CELL_HEIGHT
    }

    fn draw_text(&self, canvas: &mut Canvas, text: &str, x: i32, baseline: i32, color: Rgba<u8>) {
        let top = i64::from(baseline) - i64::from(data::ASCENT) + i64::from(data::GLYPH_TOP);
        let mut pen = i64::from(x);
        for ch in text.chars() {
            for (row, &bits) in (0..).zip(data::glyph(ch).iter()) {
                for col in 0..data::CELL_WIDTH {
                    if bits & (0x80 >> col) != 0 {
                        canvas.blend(pen + i64::from(col), top + row, color, 255);
                    }
                }
            }
            pen += i64::from(data::CELL_WIDTH);
        }
    }
}

/// A TrueType/OpenType font rasterized with `fontdue`
///
/// The size is given in pixels per em, which equals the point size at 72 DPI.
pub struct TtfFace {
    font: fontdue::Font,
    px: f32,
}

impl TtfFace {
    /// Parse a font file
    pub fn from_bytes(data: &[u8], px: f32) -> Result<Self, &'static str> {
        let font = fontdue::Font::from_bytes(data, fontdue::FontSettings::default())?;
        Ok(Self { font, px })
    }

    /// The name of the font, if the file has one
    pub fn name(&self) -> Option<&str> {
        self.font.name()
    }
}

impl Face for TtfFace {
    fn advance(&self, ch: char) -> u32 {
        let metrics = self.font.metrics(ch, self.px);
        metrics.advance_width.round().max(0.0) as u32
    }

    fn line_height(&self) -> u32 {
        let height = match self.font.horizontal_line_metrics(self.px) {
            Some(lm) => lm.new_line_size,
            None => self.px,
        };
        height.round().max(0.0) as u32
    }

    fn draw_text(&self, canvas: &mut Canvas, text: &str, x: i32, baseline: i32, color: Rgba<u8>) {
        let mut pen = f64::from(x);
        for ch in text.chars() {
            let (metrics, bitmap) = self.font.rasterize(ch, self.px);
            if metrics.width > 0 {
                let left = pen.round() as i64 + i64::from(metrics.xmin);
                // ymin is the offset of the bottom edge above the baseline
                let top = i64::from(baseline) - i64::from(metrics.ymin) - metrics.height as i64;
                for (row, line) in (0..).zip(bitmap.chunks_exact(metrics.width)) {
                    for (col, &coverage) in (0..).zip(line) {
                        canvas.blend(left + col, top + row, color, coverage);
                    }
                }
            }
            pen += f64::from(metrics.advance_width);
        }
    }
}
