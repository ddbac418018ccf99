//! CLI output formatting.
//!
//! Output describes what went onto the image, with file paths as indented
//! secondary context:
//!
//! ```text
//! Quote (2 lines)
//!     Every day is a new
//!     beginning
//! Text color: #FF9900
//! Flairs
//! 001 star.png
//!     Tint: #00FFFF
//! 002 swirl.png
//!     Tint: none
//! Saved → /home/me/Pictures/quote.png
//! ```
//!
//! `format_*` functions return `Vec<String>` and do no I/O; `print_*`
//! wrappers write them to stdout.

use crate::compose::Render;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Display name of a flair: its file name, or the full path if it has none.
fn flair_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Lines describing a finished render and where it was saved.
pub fn format_render_output(render: &Render, saved_to: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    match render.lines.len() {
        1 => lines.push("Quote (1 line)".to_string()),
        n => lines.push(format!("Quote ({n} lines)")),
    }
    for line in &render.lines {
        lines.push(format!("{}{}", indent(1), line));
    }

    lines.push(format!("Text color: {}", render.text_color));

    if !render.flairs.is_empty() {
        lines.push("Flairs".to_string());
        for (i, flair) in render.flairs.iter().enumerate() {
            lines.push(format!("{} {}", format_index(i + 1), flair_name(&flair.path)));
            let tint = flair
                .tint
                .map(|c| c.to_string())
                .unwrap_or_else(|| "none".to_string());
            lines.push(format!("{}Tint: {}", indent(1), tint));
        }
    }

    lines.push(format!("Saved → {}", saved_to.display()));
    lines
}

pub fn print_render_output(render: &Render, saved_to: &Path) {
    for line in format_render_output(render, saved_to) {
        println!("{}", line);
    }
}
