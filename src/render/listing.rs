//! Flat listing decorated with the sort metric.

use ratatui::text::{Line, Span};

use super::{display_width, format_timestamp, pad_to_width, sanitize_terminal_text, size_label};
use crate::entry::{Entry, EntryProbe};
use crate::sort::{Measured, Metric};
use crate::style::{classify_entry, TEXT_STYLE};

/// Column the timestamp or size annotation starts at.
pub const NAME_COLUMN_WIDTH: usize = 50;

/// Render sorted entries, one per line.
///
/// Entries measured by time get a local timestamp, entries measured by size
/// get a size label, name-sorted entries get nothing. Names as wide as the
/// column are followed by a single space before the annotation.
pub fn render_listing<P: EntryProbe + ?Sized>(
    items: &[Measured<Entry>],
    show_hidden: bool,
    probe: &P,
) -> Vec<Line<'static>> {
    items
        .iter()
        .filter(|m| show_hidden || !m.entry().is_hidden())
        .map(|item| {
            let entry = item.entry();
            let style = classify_entry(entry, show_hidden, probe).style();
            let name = sanitize_terminal_text(&entry.name);
            let suffix = match item.metric {
                Metric::Name => return Line::from(Span::styled(name, style)),
                Metric::Modified(time) => format_timestamp(time),
                Metric::Size(size) => size_label(size),
            };
            let padded = if display_width(&name) < NAME_COLUMN_WIDTH {
                pad_to_width(&name, NAME_COLUMN_WIDTH)
            } else {
                format!("{name} ")
            };
            Line::from(vec![
                Span::styled(padded, style),
                Span::styled(suffix, TEXT_STYLE),
            ])
        })
        .collect()
}
