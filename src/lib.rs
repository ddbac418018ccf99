//! # quote-image
//!
//! Renders a short quote onto a 640×640 image, optionally decorated with
//! randomly chosen overlay images ("flairs") and a text shadow, and saves it
//! as PNG. Meant for quick social-media graphics.
//!
//! # Pipeline
//!
//! ```text
//! background  →  flairs (0–4, random, maybe tinted)  →  wrapped, centered text
//! ```
//!
//! Everything random flows from one RNG the caller passes in, so a fixed seed
//! reproduces an image exactly.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`compose`] | The render pipeline: [`compose::compose`], [`compose::compose_to_file`], [`compose::RenderOptions`] |
//! | [`color`] | [`color::Color`], hex parsing, the random palette |
//! | [`layout`] | Word wrap, start offset, horizontal centering (pure math) |
//! | [`imaging`] | Pixel work: flair loading, tinting, font rendering |
//! | [`config`] | `config.toml` loading, defaults, validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Text Rendering Behind a Trait
//!
//! Composition talks to fonts only through
//! [`TextRenderer`](imaging::TextRenderer): measure a line, draw a line. The
//! shipped implementation rasterizes outlines with `ab_glyph`. Layout and
//! composition tests substitute a block font, so they check exact pixel
//! positions without bundling a font file.
//!
//! ## Sorted Flair Listing
//!
//! The flair directory is listed in file-name order before sampling. Directory
//! iteration order differs between filesystems; sorting is what makes a seed
//! portable.
//!
//! ## Flairs Stack at the Origin
//!
//! Every flair is pasted at `(0, 0)` with its own alpha as the mask. Flair
//! artwork is expected to be drawn at canvas size with its own placement
//! baked in, so stacking rather than tiling is what the assets assume.

pub mod color;
pub mod compose;
pub mod config;
pub mod imaging;
pub mod layout;
pub mod output;

#[cfg(test)]
pub(crate) mod test_helpers;
