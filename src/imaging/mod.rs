//! Pixel work in pure Rust, built on the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode flairs** | `image::ImageReader` (PNG, JPEG, WebP) |
//! | **Tint** | grayscale → autocontrast → colorize → brighten, per pixel |
//! | **Paste** | `image::imageops::overlay` onto an opaque `RgbaImage` |
//! | **Text** | `ab_glyph` outlines, coverage-blended |
//!
//! The module is split into:
//! - **Flair**: directory listing, sampling pool, decoding
//! - **Tint**: the recoloring pipeline
//! - **Text**: [`TextRenderer`] trait + [`FontRenderer`]

pub mod flair;
pub mod text;
pub mod tint;

pub use flair::{FlairError, FlairLibrary, FlairPool, load_flair};
pub use text::{DEFAULT_FONT_SIZE, FontRenderer, TextError, TextRenderer, TextSize};
pub use tint::tint_image;
