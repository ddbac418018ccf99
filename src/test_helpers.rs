//! Shared test utilities for the quote-image test suite.
//!
//! Provides a deterministic block font (so layout and composition can be
//! checked pixel-exactly without a font file) and writers for synthetic
//! flair images.
//!
//! # Usage
//!
//! ```text
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! write_flair_dir(tmp.path(), &["star.png", "ring.png"]);
//! let img = compose(&BlockFont::default(), &FlairLibrary::new(tmp.path()), ...);
//! ```

use crate::color::Color;
use crate::imaging::text::blend_pixel;
use crate::imaging::{TextRenderer, TextSize};
use crate::layout::{LINE_PADDING, centered_x, start_offset};
use image::{ImageEncoder, RgbImage, Rgba, RgbaImage};
use std::path::{Path, PathBuf};

// =========================================================================
// Block font
// =========================================================================

/// Every non-space char is a solid `ADVANCE × HEIGHT` block.
#[derive(Debug, Default, Clone, Copy)]
pub struct BlockFont;

impl BlockFont {
    pub const ADVANCE: u32 = 30;
    pub const HEIGHT: u32 = 40;

    /// `(x, y, width, height)` of every laid-out line, top to bottom.
    pub fn line_boxes(&self, lines: &[String], canvas_width: u32) -> Vec<(u32, u32, u32, u32)> {
        let mut y = start_offset(lines.len());
        lines
            .iter()
            .map(|line| {
                let size = self.measure(line);
                let x = centered_x(canvas_width, size.width).max(0) as u32;
                let bbox = (x, y, size.width, size.height);
                y += size.height + LINE_PADDING;
                bbox
            })
            .collect()
    }
}

impl TextRenderer for BlockFont {
    fn measure(&self, text: &str) -> TextSize {
        TextSize {
            width: text.chars().count() as u32 * Self::ADVANCE,
            height: Self::HEIGHT,
        }
    }

    fn draw(&self, canvas: &mut RgbImage, text: &str, x: i32, y: i32, color: Color) {
        for (i, c) in text.chars().enumerate() {
            if c.is_whitespace() {
                continue;
            }
            let left = x + (i as u32 * Self::ADVANCE) as i32;
            for dy in 0..Self::HEIGHT as i32 {
                for dx in 0..Self::ADVANCE as i32 {
                    blend_pixel(canvas, left + dx, y + dy, color, 1.0);
                }
            }
        }
    }
}

// =========================================================================
// Synthetic flairs
// =========================================================================

/// Horizontal gray ramp with a vertical alpha ramp.
pub fn gradient_flair(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        let level = (x * 255 / (width - 1).max(1)) as u8;
        let alpha = (y * 255 / (height - 1).max(1)) as u8;
        Rgba([level, level, level, alpha])
    })
}

/// A 64×64 flair: opaque 16×16 corner block, transparent elsewhere except a
/// half-transparent diagonal. The base color is derived from `seed`.
pub fn corner_flair(seed: u8) -> RgbaImage {
    RgbaImage::from_fn(64, 64, |x, y| {
        if x < 16 && y < 16 {
            Rgba([seed, 255 - seed, (x * 16) as u8, 255])
        } else if x == y {
            Rgba([seed / 2, 128, 200, 128])
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
}

/// Write one [`corner_flair`] PNG per name into `dir`; returns their paths.
pub fn write_flair_dir(dir: &Path, names: &[&str]) -> Vec<PathBuf> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let path = dir.join(name);
            corner_flair((i as u8).wrapping_mul(40))
                .save_with_format(&path, image::ImageFormat::Png)
                .unwrap();
            path
        })
        .collect()
}

/// Write a small opaque JPEG.
pub fn write_opaque_jpeg(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x * 30) as u8, (y * 30) as u8, 128])
    });
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}
