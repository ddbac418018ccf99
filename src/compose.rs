//! Quote image composition.
//!
//! A render is a straight-line pipeline over one mutable canvas:
//!
//! ```text
//! 1. Canvas   640×640 filled with the background color
//! 2. Flairs   up to 4 random assets, optionally tinted, pasted at (0, 0)
//! 3. Layout   word-wrap at 20 chars, pick the start offset
//! 4. Text     per line: shadow at (−2, −2) if enabled, then the text, centered
//! ```
//!
//! There is no state kept between renders. Every call lists the flair
//! directory afresh, builds its own [`FlairPool`], and draws all randomness
//! from the `rng` it is handed, so a seeded RNG reproduces an image
//! pixel-for-pixel.

use crate::color::{Color, random_color};
use crate::imaging::{FlairError, FlairLibrary, FlairPool, TextRenderer, load_flair, tint_image};
use crate::layout::{LINE_PADDING, WRAP_WIDTH, centered_x, start_offset, wrap_text};
use image::imageops::overlay;
use image::{DynamicImage, ImageFormat, RgbImage, RgbaImage};
use rand::Rng;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Width and height of the square canvas.
pub const CANVAS_SIZE: u32 = 640;

/// Upper bound on flairs per image.
pub const MAX_FLAIRS: usize = 4;

/// Shadow position relative to the text it shadows.
pub const SHADOW_OFFSET: (i32, i32) = (-2, -2);

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error(transparent)]
    Flair(#[from] FlairError),
    #[error("Failed to encode {path}: {source}")]
    Encode {
        path: String,
        #[source]
        source: image::ImageError,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ComposeError>;

/// Style for a single render.
///
/// `text_color` and `flair_tint` are optional because their absence means
/// "pick at random": a palette color for the text, and a 50% chance of a
/// palette tint for each flair.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub shadow: bool,
    /// Requested flairs; clamped to [`MAX_FLAIRS`] and to what's on disk.
    pub flair_count: usize,
    pub text_color: Option<Color>,
    pub shadow_color: Color,
    pub background_color: Color,
    pub flair_tint: Option<Color>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            shadow: false,
            flair_count: 2,
            text_color: None,
            shadow_color: Color::DARK_GRAY,
            background_color: Color::WHITE,
            flair_tint: None,
        }
    }
}

/// A flair as it was placed on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedFlair {
    pub path: PathBuf,
    pub tint: Option<Color>,
}

/// Composed image plus what went into it.
#[derive(Debug, Clone)]
pub struct Render {
    pub image: RgbImage,
    pub lines: Vec<String>,
    pub text_color: Color,
    pub flairs: Vec<PlacedFlair>,
}

/// Compose `quote` onto a new canvas and return the image.
pub fn compose(
    renderer: &impl TextRenderer,
    flairs: &FlairLibrary,
    quote: &str,
    options: &RenderOptions,
    rng: &mut impl Rng,
) -> Result<RgbImage> {
    render(renderer, flairs, quote, options, rng).map(|r| r.image)
}

/// Compose `quote` and report the wrapped lines, text color and flairs used.
#[tracing::instrument(skip(renderer, flairs, options, rng))]
pub fn render(
    renderer: &impl TextRenderer,
    flairs: &FlairLibrary,
    quote: &str,
    options: &RenderOptions,
    rng: &mut impl Rng,
) -> Result<Render> {
    let text_color = match options.text_color {
        Some(color) => color,
        None => random_color(rng),
    };

    // Flairs blend in RGBA. The background is opaque, so every pixel stays
    // opaque and the drop to RGB for text loses nothing.
    let mut backdrop = RgbaImage::from_pixel(
        CANVAS_SIZE,
        CANVAS_SIZE,
        options.background_color.to_rgba(),
    );

    let placed = if options.flair_count.min(MAX_FLAIRS) > 0 {
        let mut pool = flairs.pool()?;
        paste_flairs(&mut backdrop, &mut pool, options, rng)?
    } else {
        Vec::new()
    };

    let mut canvas = DynamicImage::ImageRgba8(backdrop).into_rgb8();

    let lines = wrap_text(quote, WRAP_WIDTH);
    draw_lines(&mut canvas, renderer, &lines, text_color, options);

    Ok(Render {
        image: canvas,
        lines,
        text_color,
        flairs: placed,
    })
}

/// Compose `quote` and write it as a PNG to `path`.
///
/// Missing parent directories are created. Nothing is written if composition
/// fails.
pub fn compose_to_file(
    renderer: &impl TextRenderer,
    flairs: &FlairLibrary,
    quote: &str,
    options: &RenderOptions,
    rng: &mut impl Rng,
    path: &Path,
) -> Result<Render> {
    let rendered = render(renderer, flairs, quote, options, rng)?;
    save_png(&rendered.image, path)?;
    Ok(rendered)
}

/// Write `image` as PNG regardless of the path's extension.
pub fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| ComposeError::Encode {
            path: path.display().to_string(),
            source,
        })?;
    info!(path = %path.display(), "wrote quote image");
    Ok(())
}

/// `<home>/Pictures/quote.png`, or `quote.png` when no home is known.
///
/// Evaluated on every call so a changed environment is picked up.
pub fn default_output_path() -> PathBuf {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .filter(|home| !home.is_empty())
        .map(|home| PathBuf::from(home).join("Pictures").join("quote.png"))
        .unwrap_or_else(|| PathBuf::from("quote.png"))
}

fn paste_flairs(
    canvas: &mut RgbaImage,
    pool: &mut FlairPool,
    options: &RenderOptions,
    rng: &mut impl Rng,
) -> Result<Vec<PlacedFlair>> {
    let count = options.flair_count.min(MAX_FLAIRS).min(pool.len());
    let mut placed = Vec::with_capacity(count);

    for _ in 0..count {
        let Some(path) = pool.draw(rng) else {
            break;
        };
        let flair = load_flair(&path)?;

        let tint = match options.flair_tint {
            Some(color) => Some(color),
            None if rng.gen_bool(0.5) => Some(random_color(rng)),
            None => None,
        };
        debug!(flair = %path.display(), tint = ?tint.map(|c| c.to_hex()), "pasting flair");

        match tint {
            Some(color) => overlay(canvas, &tint_image(&flair, color), 0, 0),
            None => overlay(canvas, &flair, 0, 0),
        }
        placed.push(PlacedFlair { path, tint });
    }

    Ok(placed)
}

fn draw_lines(
    canvas: &mut RgbImage,
    renderer: &impl TextRenderer,
    lines: &[String],
    text_color: Color,
    options: &RenderOptions,
) {
    let mut y = start_offset(lines.len()) as i32;

    for line in lines {
        let size = renderer.measure(line);
        let x = centered_x(canvas.width(), size.width);
        debug!(line = %line, x, y, width = size.width, "drawing line");

        if options.shadow {
            let (dx, dy) = SHADOW_OFFSET;
            renderer.draw(
                canvas,
                line,
                x.saturating_add(dx),
                y.saturating_add(dy),
                options.shadow_color,
            );
        }
        renderer.draw(canvas, line, x, y, text_color);

        let advance = size.height.saturating_add(LINE_PADDING);
        y = y.saturating_add(i32::try_from(advance).unwrap_or(i32::MAX));
    }
}
