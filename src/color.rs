//! RGB colors: hex parsing and the random palette.
//!
//! Colors enter the program in two ways:
//!
//! - **User input**: `config.toml` values and CLI flags, written as
//!   six hex digits with or without a leading `#` (`"#FF5F00"`, `"ff5f00"`).
//!   [`parse_hex_color`] is the single entry point for these; [`Color`]
//!   deserializes through it so config files get the same validation.
//! - **Chance**: [`random_color`] picks from a fixed eight-color palette.
//!   It is the default text color and the per-flair tint when no explicit
//!   tint is configured.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid color {input:?}: expected 6 hex digits, found {len}")]
    InvalidLength { input: String, len: usize },
    #[error("invalid color {input:?}: {found:?} is not a hex digit")]
    InvalidCharacter { input: String, found: char },
}

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);
    /// Default text shadow.
    pub const DARK_GRAY: Color = Color::new(75, 75, 75);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_rgb(self) -> image::Rgb<u8> {
        image::Rgb([self.r, self.g, self.b])
    }

    /// Fully opaque RGBA.
    pub fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, 255])
    }

    /// Uppercase `#RRGGBB` form, the same shape [`parse_hex_color`] accepts.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(c: Color) -> Self {
        c.to_rgb()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_hex()
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        parse_hex_color(&s)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex_color(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Parse a hex color string into a [`Color`].
///
/// Accepts exactly six hex digits, case-insensitive, with or without one
/// leading `#`.
///
/// ```text
/// "#FFFFFF" → (255, 255, 255)
/// "ff5500"  → (255, 85, 0)
/// "12345"   → InvalidLength
/// "GGGGGG"  → InvalidCharacter
/// ```
pub fn parse_hex_color(input: &str) -> Result<Color, ColorError> {
    let digits = input.strip_prefix('#').unwrap_or(input).to_ascii_uppercase();

    let len = digits.chars().count();
    if len != 6 {
        return Err(ColorError::InvalidLength {
            input: input.to_string(),
            len,
        });
    }
    if let Some(found) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidCharacter {
            input: input.to_string(),
            found,
        });
    }

    // All six chars are ASCII hex digits past this point, so byte slicing and
    // radix parsing cannot fail.
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).unwrap_or_default();
    Ok(Color::new(channel(0), channel(2), channel(4)))
}

/// The fixed palette [`random_color`] draws from.
pub const PALETTE: [Color; 8] = [
    Color::new(153, 255, 153), // light green
    Color::new(100, 200, 0),   // olive
    Color::new(255, 153, 0),   // orange
    Color::new(255, 153, 204), // pink
    Color::new(0, 255, 255),   // cyan
    Color::new(0, 255, 153),   // teal green
    Color::new(204, 102, 255), // purple
    Color::new(255, 80, 80),   // coral
];

/// Pick a palette color uniformly at random.
pub fn random_color(rng: &mut impl Rng) -> Color {
    *PALETTE.choose(rng).unwrap_or(&PALETTE[0])
}
