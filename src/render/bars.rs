//! Proportional size bars for one directory level.

use ratatui::text::{Line, Span};

use super::{display_width, pad_to_width, sanitize_terminal_text, size_label};
use crate::entry::{Entry, EntryProbe};
use crate::sort::Measured;
use crate::style::{classify_entry, BAR_STYLE, TEXT_STYLE};

pub const BAR_FILL: char = '=';
/// Columns taken by the two separators around the bar plus one spare column
/// so a full-length row never wraps.
pub const BAR_PADDING: usize = 3;

/// Layout computed from every visible entry before any row is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarScale {
    /// Widest visible name, in terminal columns.
    pub name_width: usize,
    /// Longest size label among visible entries.
    pub label_width: usize,
    /// Largest visible size; zero means every bar is empty.
    pub max_size: u64,
    /// Columns left for the longest bar.
    pub available_width: usize,
}

impl BarScale {
    pub fn compute(items: &[Measured<Entry>], terminal_width: u16, show_hidden: bool) -> Self {
        let mut name_width = 0;
        let mut label_width = 0;
        let mut max_size = 0;
        for item in visible(items, show_hidden) {
            let size = item.metric.size().unwrap_or(0);
            name_width = name_width.max(display_width(&sanitize_terminal_text(&item.entry().name)));
            label_width = label_width.max(size_label(size).len());
            max_size = max_size.max(size);
        }
        let available_width =
            (terminal_width as usize).saturating_sub(name_width + label_width + BAR_PADDING);
        Self {
            name_width,
            label_width,
            max_size,
            available_width,
        }
    }

    /// `floor(size / max_size * available_width)`, zero when `max_size` is zero.
    pub fn bar_length(&self, size: u64) -> usize {
        if self.max_size == 0 {
            return 0;
        }
        let size = size.min(self.max_size) as u128;
        (size * self.available_width as u128 / self.max_size as u128) as usize
    }
}

fn visible(items: &[Measured<Entry>], show_hidden: bool) -> impl Iterator<Item = &Measured<Entry>> {
    items
        .iter()
        .filter(move |m| show_hidden || !m.entry().is_hidden())
}

/// Render one row per visible entry: padded name, bar, size label.
///
/// `items` must be measured by size. An empty slice renders nothing.
pub fn render_bars<P: EntryProbe + ?Sized>(
    items: &[Measured<Entry>],
    terminal_width: u16,
    show_hidden: bool,
    probe: &P,
) -> Vec<Line<'static>> {
    let scale = BarScale::compute(items, terminal_width, show_hidden);
    visible(items, show_hidden)
        .map(|item| bar_line(item, &scale, show_hidden, probe))
        .collect()
}

fn bar_line<P: EntryProbe + ?Sized>(
    item: &Measured<Entry>,
    scale: &BarScale,
    show_hidden: bool,
    probe: &P,
) -> Line<'static> {
    let entry = item.entry();
    let size = item.metric.size().unwrap_or(0);
    let style = classify_entry(entry, show_hidden, probe).style();
    let name = sanitize_terminal_text(&entry.name);
    let bar: String = std::iter::repeat(BAR_FILL)
        .take(scale.bar_length(size))
        .collect();

    Line::from(vec![
        Span::styled(pad_to_width(&name, scale.name_width), style),
        Span::raw(" "),
        Span::styled(bar, BAR_STYLE),
        Span::raw(" "),
        Span::styled(size_label(size), TEXT_STYLE),
    ])
}
