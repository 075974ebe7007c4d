//! Entry classification into display styles.

use ratatui::style::{Color, Modifier, Style};

use crate::entry::{Entry, EntryKind, EntryProbe};

/// Descriptive style class for one entry; carries no rendering behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayStyle {
    Folder,
    HiddenFolder,
    Executable,
    HiddenExecutable,
    File,
    HiddenFile,
    Unknown,
}

// Palette of the original tool: bright colors, dimmed when hidden.
const FOLDER_STYLE: Style = Style::new().fg(Color::LightYellow);
const FILE_STYLE: Style = Style::new().fg(Color::LightBlue);
const EXECUTABLE_STYLE: Style = Style::new().fg(Color::LightRed);
const UNKNOWN_STYLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::DIM);

/// Fill characters of size bars.
pub const BAR_STYLE: Style = Style::new().fg(Color::LightGreen);
/// Size labels, timestamps, headers.
pub const TEXT_STYLE: Style = Style::new().fg(Color::LightCyan);
/// Tree-drawing characters.
pub const PREFIX_STYLE: Style = Style::new().fg(Color::White);

impl DisplayStyle {
    pub fn style(self) -> Style {
        let dim = |s: Style| s.add_modifier(Modifier::DIM);
        match self {
            DisplayStyle::Folder => FOLDER_STYLE,
            DisplayStyle::HiddenFolder => dim(FOLDER_STYLE),
            DisplayStyle::Executable => EXECUTABLE_STYLE,
            DisplayStyle::HiddenExecutable => dim(EXECUTABLE_STYLE),
            DisplayStyle::File => FILE_STYLE,
            DisplayStyle::HiddenFile => dim(FILE_STYLE),
            DisplayStyle::Unknown => UNKNOWN_STYLE,
        }
    }
}

/// Map a classification and an effective hidden flag to a style.
pub fn classify(kind: EntryKind, hidden: bool) -> DisplayStyle {
    match (kind, hidden) {
        (EntryKind::Directory, true) => DisplayStyle::HiddenFolder,
        (EntryKind::Directory, false) => DisplayStyle::Folder,
        (EntryKind::Executable, true) => DisplayStyle::HiddenExecutable,
        (EntryKind::Executable, false) => DisplayStyle::Executable,
        (EntryKind::File, true) => DisplayStyle::HiddenFile,
        (EntryKind::File, false) => DisplayStyle::File,
        (EntryKind::Other, _) => DisplayStyle::Unknown,
    }
}

/// Hidden styling applies to dotfiles that are on display because the
/// show-hidden option is active.
pub fn hidden_context(entry: &Entry, show_hidden: bool) -> bool {
    show_hidden && entry.is_hidden()
}

/// Classify `entry`, querying `probe` for its kind.
pub fn classify_entry<P: EntryProbe + ?Sized>(entry: &Entry, show_hidden: bool, probe: &P) -> DisplayStyle {
    classify(probe.kind(&entry.path), hidden_context(entry, show_hidden))
}
