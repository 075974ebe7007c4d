//! Indented tree rendering with box-drawing connectors.

use ratatui::text::{Line, Span};

use super::sanitize_terminal_text;
use crate::entry::EntryProbe;
use crate::style::{classify_entry, PREFIX_STYLE, TEXT_STYLE};
use crate::tree::TreeNode;

const MID_BRANCH: &str = "\u{251c}\u{2500}\u{2500} "; // ├──
const LAST_BRANCH: &str = "\u{2514}\u{2500}\u{2500} "; // └──
const CONTINUATION: &str = "\u{2502}   "; // │
const BLANK: &str = "    ";

/// Render `root` and its descendants depth-first, pre-order.
///
/// The root is drawn as the last child of an empty prefix. Children keep the
/// order they have in the tree; hidden ones are skipped unless `show_hidden`.
pub fn render_tree<P: EntryProbe + ?Sized>(
    root: &TreeNode,
    show_hidden: bool,
    probe: &P,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    render_node(root, "", true, show_hidden, probe, &mut lines);
    lines
}

fn render_node<P: EntryProbe + ?Sized>(
    node: &TreeNode,
    prefix: &str,
    is_last: bool,
    show_hidden: bool,
    probe: &P,
    lines: &mut Vec<Line<'static>>,
) {
    let connector = if is_last { LAST_BRANCH } else { MID_BRANCH };
    let style = classify_entry(&node.entry, show_hidden, probe).style();
    lines.push(Line::from(vec![
        Span::styled(format!("{prefix}{connector}"), PREFIX_STYLE),
        Span::styled(sanitize_terminal_text(&node.entry.name), style),
    ]));

    let visible: Vec<&TreeNode> = node
        .children
        .iter()
        .filter(|c| show_hidden || !c.entry.is_hidden())
        .collect();
    let child_prefix = format!("{prefix}{}", if is_last { BLANK } else { CONTINUATION });
    for (i, child) in visible.iter().enumerate() {
        let last = i + 1 == visible.len();
        render_node(child, &child_prefix, last, show_hidden, probe, lines);
    }
}

/// `"{n} directories, {m} files"` for everything below `root`.
pub fn summary_line(root: &TreeNode) -> Line<'static> {
    let dirs = root.count_directories();
    let files = root.count_files();
    let text = format!(
        "{} {}, {} {}",
        dirs,
        if dirs == 1 { "directory" } else { "directories" },
        files,
        if files == 1 { "file" } else { "files" },
    );
    Line::from(Span::styled(text, TEXT_STYLE))
}
