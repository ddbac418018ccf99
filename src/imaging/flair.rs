//! Flair assets: listing, sampling without replacement, decoding.
//!
//! A [`FlairLibrary`] points at a directory of decorative images. Each render
//! lists it afresh into a [`FlairPool`], draws as many flairs as it needs
//! (never the same one twice), and decodes each with [`load_flair`].
//!
//! Listing is sorted by file name. Filesystems return directory entries in
//! arbitrary order, and a seeded render must pick the same files everywhere.

use image::{ImageFormat, ImageReader, RgbaImage};
use rand::Rng;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum FlairError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to decode flair {path}: {reason}")]
    Decode { path: String, reason: String },
}

/// Extensions recognised as flair images.
const FLAIR_CANDIDATES: &[(&str, ImageFormat)] = &[
    ("png", ImageFormat::Png),
    ("jpg", ImageFormat::Jpeg),
    ("jpeg", ImageFormat::Jpeg),
    ("webp", ImageFormat::WebP),
];

fn is_flair_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            FLAIR_CANDIDATES
                .iter()
                .any(|(candidate, fmt)| ext.eq_ignore_ascii_case(candidate) && fmt.reading_enabled())
        })
}

/// A read-only directory of flair images.
#[derive(Debug, Clone)]
pub struct FlairLibrary {
    dir: PathBuf,
}

impl FlairLibrary {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// All flair files directly inside the directory, sorted by file name.
    ///
    /// Symlinks count when they resolve to a file. Subdirectories, dangling
    /// links and files with unrecognised extensions are skipped. A missing or
    /// unreadable directory is an error.
    pub fn list(&self) -> Result<Vec<PathBuf>, FlairError> {
        let io_error = |source: std::io::Error| FlairError::Io {
            path: self.dir.display().to_string(),
            source,
        };

        let mut flairs = Vec::new();
        for entry in WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| io_error(e.into()))?;
            if entry.path().is_file() && is_flair_file(entry.path()) {
                flairs.push(entry.into_path());
            }
        }

        // WalkDir yields nothing for a path that isn't a directory at all
        if flairs.is_empty() && !self.dir.is_dir() {
            return Err(io_error(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "not a directory",
            )));
        }
        Ok(flairs)
    }

    /// A fresh sampling pool over the current directory contents.
    pub fn pool(&self) -> Result<FlairPool, FlairError> {
        Ok(FlairPool::new(self.list()?))
    }
}

/// Flairs not yet used in the current render.
#[derive(Debug, Clone, Default)]
pub struct FlairPool {
    remaining: Vec<PathBuf>,
}

impl FlairPool {
    pub fn new(flairs: Vec<PathBuf>) -> Self {
        Self { remaining: flairs }
    }

    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Remove and return a uniformly random remaining flair.
    ///
    /// Returns `None` once the pool is exhausted.
    pub fn draw(&mut self, rng: &mut impl Rng) -> Option<PathBuf> {
        if self.remaining.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.remaining.len());
        Some(self.remaining.remove(index))
    }
}

/// Decode a flair file to RGBA. Opaque formats get a fully opaque alpha.
pub fn load_flair(path: &Path) -> Result<RgbaImage, FlairError> {
    let decode_error = |reason: String| FlairError::Decode {
        path: path.display().to_string(),
        reason,
    };

    let img = ImageReader::open(path)
        .map_err(|source| FlairError::Io {
            path: path.display().to_string(),
            source,
        })?
        .with_guessed_format()
        .map_err(|e| decode_error(e.to_string()))?
        .decode()
        .map_err(|e| decode_error(e.to_string()))?;
    Ok(img.into_rgba8())
}
