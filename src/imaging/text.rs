//! Text rendering backend trait and the `ab_glyph` implementation.
//!
//! The [`TextRenderer`] trait is the two operations composition needs from a
//! font: measure a line, and draw a line at a position. The production
//! implementation is [`FontRenderer`], which rasterizes TrueType/OpenType
//! outlines with `ab_glyph` and alpha-blends glyph coverage onto the canvas.
//!
//! Keeping this behind a trait lets the layout and composition logic be
//! tested with a deterministic block font, with no font file on disk.

use crate::color::Color;
use ab_glyph::{Font, FontVec, PxScale, ScaleFont, point};
use image::RgbImage;
use std::path::Path;
use thiserror::Error;

/// Pixel size the quote is set in unless configured otherwise.
pub const DEFAULT_FONT_SIZE: f32 = 64.0;

#[derive(Error, Debug)]
pub enum TextError {
    #[error("IO error reading font {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid font {path}: {reason}")]
    InvalidFont { path: String, reason: String },
}

/// Measured extent of a rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextSize {
    pub width: u32,
    pub height: u32,
}

/// Measure and draw single lines of text.
pub trait TextRenderer {
    /// Width and height `text` occupies when drawn.
    fn measure(&self, text: &str) -> TextSize;

    /// Draw `text` with its top-left corner at `(x, y)`.
    ///
    /// Pixels outside the canvas are clipped.
    fn draw(&self, canvas: &mut RgbImage, text: &str, x: i32, y: i32, color: Color);
}

/// Outline font rasterized with `ab_glyph`.
pub struct FontRenderer {
    font: FontVec,
    scale: PxScale,
}

impl FontRenderer {
    /// Load a font file and set it at `size` pixels.
    pub fn open(path: &Path, size: f32) -> Result<Self, TextError> {
        let data = std::fs::read(path).map_err(|source| TextError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_bytes(data, size).map_err(|e| match e {
            TextError::InvalidFont { reason, .. } => TextError::InvalidFont {
                path: path.display().to_string(),
                reason,
            },
            other => other,
        })
    }

    /// Parse font data already in memory.
    pub fn from_bytes(data: Vec<u8>, size: f32) -> Result<Self, TextError> {
        let font = FontVec::try_from_vec(data).map_err(|e| TextError::InvalidFont {
            path: "<memory>".to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            font,
            scale: PxScale::from(size),
        })
    }

    pub fn size(&self) -> f32 {
        self.scale.y
    }
}

impl TextRenderer for FontRenderer {
    fn measure(&self, text: &str) -> TextSize {
        let scaled = self.font.as_scaled(self.scale);
        let mut width = 0.0f32;
        let mut previous = None;
        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = previous {
                width += scaled.kern(prev, id);
            }
            width += scaled.h_advance(id);
            previous = Some(id);
        }

        TextSize {
            width: width.max(0.0).ceil() as u32,
            height: scaled.height().max(0.0).ceil() as u32,
        }
    }

    fn draw(&self, canvas: &mut RgbImage, text: &str, x: i32, y: i32, color: Color) {
        let scaled = self.font.as_scaled(self.scale);
        let baseline = y as f32 + scaled.ascent();
        let mut caret = x as f32;
        let mut previous = None;

        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = previous {
                caret += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(self.scale, point(caret, baseline));
            caret += scaled.h_advance(id);
            previous = Some(id);

            let Some(outlined) = self.font.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let px = bounds.min.x as i32 + gx as i32;
                let py = bounds.min.y as i32 + gy as i32;
                blend_pixel(canvas, px, py, color, coverage);
            });
        }
    }
}

/// Blend `color` over the canvas pixel at `(x, y)` with the given coverage.
///
/// Out-of-bounds coordinates are ignored.
pub fn blend_pixel(canvas: &mut RgbImage, x: i32, y: i32, color: Color, coverage: f32) {
    if x < 0 || y < 0 || x as u32 >= canvas.width() || y as u32 >= canvas.height() {
        return;
    }
    let coverage = coverage.clamp(0.0, 1.0);
    let px = canvas.get_pixel_mut(x as u32, y as u32);
    for (dst, src) in px.0.iter_mut().zip([color.r, color.g, color.b]) {
        let blended = *dst as f32 + (src as f32 - *dst as f32) * coverage;
        *dst = blended.round() as u8;
    }
}
