//! Text layout math: pure functions, no pixels.
//!
//! Everything here is integer arithmetic over line counts and measured
//! widths, so it is unit tested without a font:
//!
//! - [`wrap_text`] splits a quote into lines of at most [`WRAP_WIDTH`] characters.
//! - [`start_offset`] picks the first line's top edge from the line count.
//! - [`centered_x`] centers a measured line horizontally.
//!
//! ## Vertical placement
//!
//! The start offset is a fixed lookup, not a formula:
//!
//! | Lines | Top of first line |
//! |---|---|
//! | 0 or 1 | 250 px |
//! | 2 | 200 px |
//! | 3+ | 150 px |
//!
//! Each following line starts `line height + LINE_PADDING` below the previous one.

/// Maximum characters per wrapped line.
pub const WRAP_WIDTH: usize = 20;

/// Extra vertical gap between consecutive lines, in pixels.
pub const LINE_PADDING: u32 = 20;

/// Greedy word wrap.
///
/// Breaks only at whitespace, never inside a word. A word longer than
/// `width` is placed on its own line unbroken. Runs of whitespace collapse to
/// a single space. Empty or whitespace-only input yields no lines.
///
/// Width is counted in `char`s, not bytes.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Top edge of the first line for a quote wrapped into `line_count` lines.
pub fn start_offset(line_count: usize) -> u32 {
    match line_count {
        0 | 1 => 250,
        2 => 200,
        _ => 150,
    }
}

/// Left edge that centers a line of `line_width` pixels on the canvas.
///
/// Negative when the line is wider than the canvas; the overflow is clipped
/// evenly on both sides.
pub fn centered_x(canvas_width: u32, line_width: u32) -> i32 {
    (canvas_width as i64 - line_width as i64).div_euclid(2) as i32
}
