//! Render configuration module.
//!
//! Handles loading and validating `config.toml`. Every key has a default, so
//! a config file only needs the keys it wants to change. CLI flags override
//! whatever the file sets.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [assets]
//! flair_dir = "flairs"                 # Directory of decorative overlay images
//! font = "fonts/playlist_script.otf"   # TrueType/OpenType font for the quote
//! font_size = 64.0                     # Pixel size of the quote text
//!
//! [render]
//! shadow = false                       # Draw a text shadow
//! flairs = 2                           # Flairs per image (0-4)
//! shadow_color = "#4B4B4B"
//! background_color = "#FFFFFF"
//! # text_color = "#FF5F00"             # Omit for a random palette color
//! # flair_tint = "#FF5F00"             # Omit for random tints on ~half the flairs
//! ```
//!
//! ## Partial Configuration
//!
//! ```toml
//! # Only switch on the shadow
//! [render]
//! shadow = true
//! ```
//!
//! Unknown keys are rejected to catch typos early. Colors are validated by
//! [`parse_hex_color`](crate::color::parse_hex_color) while deserializing.

use crate::color::Color;
use crate::compose::{CANVAS_SIZE, MAX_FLAIRS, RenderOptions};
use crate::imaging::DEFAULT_FONT_SIZE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuoteConfig {
    /// Where flairs and the font are found.
    pub assets: AssetsConfig,
    /// Default style for every render.
    pub render: RenderConfig,
}

impl QuoteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.render.flairs > MAX_FLAIRS {
            return Err(ConfigError::Validation(format!(
                "render.flairs must be 0-{MAX_FLAIRS}"
            )));
        }
        let size = self.assets.font_size;
        if !size.is_finite() || size <= 0.0 || size > CANVAS_SIZE as f32 {
            return Err(ConfigError::Validation(format!(
                "assets.font_size must be above 0 and at most {CANVAS_SIZE}"
            )));
        }
        Ok(())
    }

    /// The render style this config describes.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            shadow: self.render.shadow,
            flair_count: self.render.flairs,
            text_color: self.render.text_color,
            shadow_color: self.render.shadow_color,
            background_color: self.render.background_color,
            flair_tint: self.render.flair_tint,
        }
    }
}

/// Asset locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssetsConfig {
    /// Directory of flair images (PNG with transparency recommended).
    pub flair_dir: PathBuf,
    /// Font file used for the quote.
    pub font: PathBuf,
    /// Pixel size of the quote text.
    pub font_size: f32,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            flair_dir: PathBuf::from("flairs"),
            font: PathBuf::from("fonts/playlist_script.otf"),
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

/// Render style defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub shadow: bool,
    /// Number of flairs per image, 0 to 4.
    pub flairs: usize,
    /// Fixed text color. Absent means a random palette color per render.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Color>,
    pub shadow_color: Color,
    pub background_color: Color,
    /// Fixed flair tint. Absent means each flair has a 50% chance of a
    /// random palette tint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flair_tint: Option<Color>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let defaults = RenderOptions::default();
        Self {
            shadow: defaults.shadow,
            flairs: defaults.flair_count,
            text_color: defaults.text_color,
            shadow_color: defaults.shadow_color,
            background_color: defaults.background_color,
            flair_tint: defaults.flair_tint,
        }
    }
}

// =============================================================================
// Config loading
// =============================================================================

/// Load config from the file at `path`.
///
/// A missing file yields the stock defaults. Keys the file leaves out keep
/// their defaults through `#[serde(default)]`. Unknown keys and out-of-range
/// values are errors.
pub fn load_config(path: &Path) -> Result<QuoteConfig, ConfigError> {
    if !path.exists() {
        return Ok(QuoteConfig::default());
    }
    let content = fs::read_to_string(path)?;
    let config: QuoteConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# quote-image Configuration
# =========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Command-line flags override them.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Assets
# ---------------------------------------------------------------------------
[assets]
# Directory of decorative overlay images ("flairs"). PNGs with transparency
# work best; every flair is pasted at the top-left corner of the canvas.
flair_dir = "flairs"

# TrueType/OpenType font used for the quote.
font = "fonts/playlist_script.otf"

# Pixel size of the quote text.
font_size = 64.0

# ---------------------------------------------------------------------------
# Render style
# ---------------------------------------------------------------------------
[render]
# Draw a shadow up and to the left of the text.
shadow = false

# Flairs per image, 0-4. Never more than there are files in flair_dir.
flairs = 2

# Colors are six hex digits, with or without a leading '#'.
shadow_color = "#4B4B4B"
background_color = "#FFFFFF"

# Fixed text color. Leave commented out for a random palette color.
# text_color = "#FF5F00"

# Fixed flair tint. Leave commented out to tint about half the flairs with
# random palette colors.
# flair_tint = "#FF5F00"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_values() {
        let config = QuoteConfig::default();
        assert_eq!(config.assets.flair_dir, PathBuf::from("flairs"));
        assert_eq!(config.assets.font_size, 64.0);
        assert!(!config.render.shadow);
        assert_eq!(config.render.flairs, 2);
        assert_eq!(config.render.shadow_color, Color::new(75, 75, 75));
        assert_eq!(config.render.background_color, Color::WHITE);
        assert_eq!(config.render.text_color, None);
        assert_eq!(config.render.flair_tint, None);
    }

    #[test]
    fn default_config_matches_default_render_options() {
        assert_eq!(
            QuoteConfig::default().render_options(),
            RenderOptions::default()
        );
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
[render]
shadow = true
text_color = "ff5f00"
"##;
        let config: QuoteConfig = toml::from_str(toml).unwrap();
        assert!(config.render.shadow);
        assert_eq!(config.render.text_color, Some(Color::new(255, 95, 0)));
        // Defaults preserved
        assert_eq!(config.render.flairs, 2);
        assert_eq!(config.assets.font_size, 64.0);
    }

    #[test]
    fn invalid_color_is_parse_error() {
        let toml = r##"
[render]
background_color = "#GGGGGG"
"##;
        let result: Result<QuoteConfig, _> = toml::from_str(toml);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("not a hex digit"), "unexpected error: {err}");
    }

    #[test]
    fn render_options_carry_config_values() {
        let toml = r##"
[render]
shadow = true
flairs = 3
text_color = "#102030"
shadow_color = "#000000"
background_color = "#FAFAFA"
flair_tint = "#00FFFF"
"##;
        let config: QuoteConfig = toml::from_str(toml).unwrap();
        let opts = config.render_options();
        assert!(opts.shadow);
        assert_eq!(opts.flair_count, 3);
        assert_eq!(opts.text_color, Some(Color::new(16, 32, 48)));
        assert_eq!(opts.shadow_color, Color::BLACK);
        assert_eq!(opts.background_color, Color::new(250, 250, 250));
        assert_eq!(opts.flair_tint, Some(Color::new(0, 255, 255)));
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join("config.toml")).unwrap();
        assert_eq!(config, QuoteConfig::default());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(
            &path,
            r##"
[assets]
flair_dir = "/usr/share/quote-image/flairs"

[render]
flairs = 4
"##,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(
            config.assets.flair_dir,
            PathBuf::from("/usr/share/quote-image/flairs")
        );
        assert_eq!(config.render.flairs, 4);
        // Unspecified values should be defaults
        assert_eq!(config.assets.font, PathBuf::from("fonts/playlist_script.otf"));
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "this is not valid toml [[[").unwrap();

        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[render]\nflairs = 5\n").unwrap();

        let result = load_config(&path);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn unknown_key_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[render]\nnoise = 2\n").unwrap();

        assert!(matches!(load_config(&path), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn unknown_section_rejected() {
        let result: Result<QuoteConfig, _> = toml::from_str("[gui]\ndark = true\n");
        assert!(result.is_err());
    }

    // =========================================================================
    // Validation
    // =========================================================================

    #[test]
    fn validate_flairs_boundary_ok() {
        let mut config = QuoteConfig::default();
        config.render.flairs = MAX_FLAIRS;
        assert!(config.validate().is_ok());
        config.render.flairs = 0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_flairs_too_many() {
        let mut config = QuoteConfig::default();
        config.render.flairs = MAX_FLAIRS + 1;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_font_size() {
        let mut config = QuoteConfig::default();
        config.assets.font_size = 0.0;
        assert!(config.validate().is_err());
        config.assets.font_size = f32::NAN;
        assert!(config.validate().is_err());
        config.assets.font_size = 12.5;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_font_size_upper_bound() {
        let mut config = QuoteConfig::default();
        config.assets.font_size = 640.0;
        assert!(config.validate().is_ok());
        config.assets.font_size = 640.5;
        assert!(config.validate().is_err());
        config.assets.font_size = 1e30;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
        config.assets.font_size = f32::INFINITY;
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_config_rejects_oversized_font() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[assets]\nfont_size = 1e30\n").unwrap();

        assert!(matches!(load_config(&path), Err(ConfigError::Validation(_))));
    }

    // =========================================================================
    // Stock config
    // =========================================================================

    #[test]
    fn stock_config_omits_random_fields_when_serialized() {
        let text = toml::to_string(&QuoteConfig::default()).unwrap();
        assert!(!text.contains("text_color"));
        assert!(!text.contains("flair_tint"));
        assert!(text.contains("background_color = \"#FFFFFF\""));
    }

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: QuoteConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config, QuoteConfig::default());
    }

    #[test]
    fn stock_config_toml_contains_all_sections() {
        let text = stock_config_toml();
        for key in [
            "[assets]",
            "[render]",
            "flair_dir",
            "font_size",
            "shadow_color",
            "text_color",
            "flair_tint",
        ] {
            assert!(text.contains(key), "stock config missing {key}");
        }
    }
}
