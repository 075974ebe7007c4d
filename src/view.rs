//! One entry point per display mode.
//!
//! Each returns the complete set of styled lines, or the error that stopped
//! it. Nothing is rendered from a partially built model.

use std::path::Path;

use ratatui::text::{Line, Span};
use tracing::info;

use crate::entry::EntryProbe;
use crate::error::{DifoError, Result};
use crate::render::{render_bars, render_listing, render_tree, sanitize_terminal_text, summary_line};
use crate::sort::{measure, sort_entries, sort_tree, sort_with_metrics, SortField, SortKey};
use crate::style::TEXT_STYLE;
use crate::tree::{build_tree, list_entries, TreeConfig};

/// Options shared by every mode.
#[derive(Debug, Clone, Default)]
pub struct ViewOptions {
    /// Whether to include hidden files and directories.
    pub show_hidden: bool,
    /// Explicit ordering; tree mode keeps name order when `None`.
    pub sort: Option<SortKey>,
    /// Current terminal width in columns.
    pub terminal_width: u16,
    /// Maximum tree depth (`None` for unlimited).
    pub max_depth: Option<usize>,
}

/// Indented tree of `root`, followed by a blank line and a summary.
pub fn tree_view<P: EntryProbe + ?Sized>(
    root: &Path,
    options: &ViewOptions,
    probe: &P,
) -> Result<Vec<Line<'static>>> {
    let config = TreeConfig {
        show_hidden: options.show_hidden,
        max_depth: options.max_depth,
    };
    let mut tree = build_tree(root, &config, probe)?;
    if let Some(key) = options.sort {
        sort_tree(&mut tree, key, probe)?;
    }
    info!(
        dirs = tree.count_directories(),
        files = tree.count_files(),
        "built tree"
    );

    let mut lines = render_tree(&tree, options.show_hidden, probe);
    lines.push(Line::default());
    lines.push(summary_line(&tree));
    Ok(lines)
}

/// Header plus one size bar per entry of `root`.
pub fn size_view<P: EntryProbe + ?Sized>(
    root: &Path,
    options: &ViewOptions,
    probe: &P,
) -> Result<Vec<Line<'static>>> {
    require_dir(root, probe)?;
    let entries = list_entries(root, options.show_hidden, probe)?;
    let entries = match options.sort {
        Some(key) => sort_entries(entries, key, probe)?,
        None => entries,
    };
    let measured = measure(entries, SortField::Size, probe)?;

    let header = format!(
        "Size of directories and files in {}:",
        sanitize_terminal_text(&root.to_string_lossy())
    );
    let mut lines = vec![Line::from(Span::styled(header, TEXT_STYLE))];
    lines.extend(render_bars(
        &measured,
        options.terminal_width,
        options.show_hidden,
        probe,
    ));
    Ok(lines)
}

/// Entries of `root` ordered by the requested key (name ascending by default).
pub fn sort_view<P: EntryProbe + ?Sized>(
    root: &Path,
    options: &ViewOptions,
    probe: &P,
) -> Result<Vec<Line<'static>>> {
    require_dir(root, probe)?;
    let entries = list_entries(root, options.show_hidden, probe)?;
    let sorted = sort_with_metrics(entries, options.sort.unwrap_or_default(), probe)?;
    Ok(render_listing(&sorted, options.show_hidden, probe))
}

fn require_dir<P: EntryProbe + ?Sized>(path: &Path, probe: &P) -> Result<()> {
    if probe.is_dir(path) {
        Ok(())
    } else {
        Err(DifoError::NotADirectory {
            path: path.to_path_buf(),
        })
    }
}
