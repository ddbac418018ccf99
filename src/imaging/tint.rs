//! Flair tinting: recolor a decorative image while keeping its shape.
//!
//! The pipeline runs in a fixed order; reordering changes the result
//! (brightening before colorizing, for instance, shifts saturation):
//!
//! ```text
//! RGBA ─┬─ alpha ───────────────────────────────────────────────┐
//!       └─ RGB → grayscale → autocontrast → colorize → ×1.5 ────┴→ RGBA
//! ```
//!
//! Each stage is a standalone function so it can be tested in isolation.

use crate::color::Color;
use image::{GrayImage, Luma, Rgb, RgbImage, RgbaImage};

/// Brightness multiplier applied after colorizing.
pub const BRIGHTNESS: f32 = 1.5;

/// Tint `img` toward `color`, preserving its alpha channel exactly.
pub fn tint_image(img: &RgbaImage, color: Color) -> RgbaImage {
    let gray = autocontrast(&grayscale(img));
    let tinted = brighten(&colorize(&gray, Color::BLACK, color), BRIGHTNESS);

    RgbaImage::from_fn(img.width(), img.height(), |x, y| {
        let Rgb([r, g, b]) = *tinted.get_pixel(x, y);
        let alpha = img.get_pixel(x, y)[3];
        image::Rgba([r, g, b, alpha])
    })
}

/// ITU-R 601-2 luma of the RGB channels; alpha is ignored.
pub fn grayscale(img: &RgbaImage) -> GrayImage {
    GrayImage::from_fn(img.width(), img.height(), |x, y| {
        let [r, g, b, _] = img.get_pixel(x, y).0;
        let luma = (r as u32 * 299 + g as u32 * 587 + b as u32 * 114 + 500) / 1000;
        Luma([luma as u8])
    })
}

/// Stretch the observed luminance range linearly to `0..=255`.
///
/// A flat image (one distinct level) is returned unchanged.
pub fn autocontrast(img: &GrayImage) -> GrayImage {
    let Some((lo, hi)) = luminance_range(img) else {
        return img.clone();
    };
    if hi <= lo {
        return img.clone();
    }

    let (lo, hi) = (lo as u32, hi as u32);
    let lut: Vec<u8> = (0..=255u32)
        .map(|v| (v.clamp(lo, hi) - lo) * 255 / (hi - lo))
        .map(|v| v as u8)
        .collect();

    let mut out = img.clone();
    for px in out.pixels_mut() {
        px.0[0] = lut[px.0[0] as usize];
    }
    out
}

fn luminance_range(img: &GrayImage) -> Option<(u8, u8)> {
    img.pixels().map(|p| p.0[0]).fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Map gray level 0 to `black` and 255 to `white`, linearly per channel.
pub fn colorize(img: &GrayImage, black: Color, white: Color) -> RgbImage {
    let lerp = |from: u8, to: u8, level: u8| -> u8 {
        let (from, to, level) = (from as i32, to as i32, level as i32);
        (from + (to - from) * level / 255) as u8
    };

    RgbImage::from_fn(img.width(), img.height(), |x, y| {
        let level = img.get_pixel(x, y).0[0];
        Rgb([
            lerp(black.r, white.r, level),
            lerp(black.g, white.g, level),
            lerp(black.b, white.b, level),
        ])
    })
}

/// Multiply every channel by `factor`, saturating at 255.
pub fn brighten(img: &RgbImage, factor: f32) -> RgbImage {
    let mut out = img.clone();
    for px in out.pixels_mut() {
        for c in px.0.iter_mut() {
            *c = (*c as f32 * factor).round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}
