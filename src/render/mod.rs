//! Rendering of the directory model into styled ratatui `Line`s.

pub mod bars;
pub mod listing;
pub mod tree;

use std::time::SystemTime;

use chrono::{DateTime, Local};
use ratatui::text::Line;
use unicode_width::UnicodeWidthStr;

pub use bars::{render_bars, BarScale};
pub use listing::render_listing;
pub use tree::{render_tree, summary_line};

/// Sanitize control characters to avoid terminal control-sequence injection.
pub fn sanitize_terminal_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let code = c as u32;
                if code <= 0xFF {
                    out.push_str(&format!("\\x{:02X}", code));
                } else {
                    out.push_str(&format!("\\u{{{:X}}}", code));
                }
            }
            _ => out.push(c),
        }
    }
    out
}

/// Terminal columns `text` occupies (wide CJK and emoji count as two).
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Right-pad `text` with spaces to `width` columns; never truncates.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(text));
    let mut out = String::with_capacity(text.len() + pad);
    out.push_str(text);
    out.extend(std::iter::repeat(' ').take(pad));
    out
}

/// `"{n} bytes"` below 1024, otherwise kilobytes with two decimals.
pub fn size_label(size: u64) -> String {
    if size < 1024 {
        format!("{size} bytes")
    } else {
        format!("{:.2} KB", size as f64 / 1024.0)
    }
}

/// Local time as `YYYY-MM-DD HH:MM:SS`.
pub fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Extract plain text from a `Line` (useful for testing).
pub fn line_to_plain_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}
