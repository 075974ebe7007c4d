use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{TreeConfig, TreeNode};
use crate::entry::{is_hidden_name, Entry, EntryKind, EntryProbe};
use crate::error::Result;
use crate::sort::compare_names;

/// Build the tree rooted at `root`.
///
/// A non-directory root yields a single leaf. Any directory that cannot be
/// listed aborts the whole build with an error naming that directory.
pub fn build_tree<P: EntryProbe + ?Sized>(
    root: &Path,
    config: &TreeConfig,
    probe: &P,
) -> Result<TreeNode> {
    let entry = Entry::probe(root, probe);
    let mut ancestors = Vec::new();
    build_node(entry, 0, config, probe, &mut ancestors)
}

fn build_node<P: EntryProbe + ?Sized>(
    entry: Entry,
    depth: usize,
    config: &TreeConfig,
    probe: &P,
    ancestors: &mut Vec<PathBuf>,
) -> Result<TreeNode> {
    if !entry.is_dir || config.max_depth.is_some_and(|max| depth >= max) {
        return Ok(TreeNode::leaf(entry));
    }

    let identity = probe.canonical(&entry.path);
    if ancestors.contains(&identity) {
        warn!(path = %entry.path.display(), "directory cycle, not descending");
        return Ok(TreeNode::leaf(entry));
    }

    let listing = list_entries(&entry.path, config.show_hidden, probe)?;
    ancestors.push(identity);
    let mut children = Vec::with_capacity(listing.len());
    for child in listing {
        children.push(build_node(child, depth + 1, config, probe, ancestors)?);
    }
    ancestors.pop();

    Ok(TreeNode { entry, children })
}

/// List one directory level in canonical order (case-insensitive name,
/// exact name on ties), dropping hidden entries unless `show_hidden`.
///
/// A child that cannot be stat'ed fails the listing with that child's path.
pub fn list_entries<P: EntryProbe + ?Sized>(
    dir: &Path,
    show_hidden: bool,
    probe: &P,
) -> Result<Vec<Entry>> {
    let names = probe.list_dir(dir)?;
    debug!(dir = %dir.display(), count = names.len(), "listed directory");

    let mut entries = names
        .into_iter()
        .filter(|name| show_hidden || !is_hidden_name(name))
        .map(|name| {
            let path = dir.join(&name);
            let is_dir = probe.stat_kind(&path)? == EntryKind::Directory;
            Ok(Entry::new(path, name, is_dir))
        })
        .collect::<Result<Vec<_>>>()?;
    entries.sort_by(canonical_order);
    Ok(entries)
}

fn canonical_order(a: &Entry, b: &Entry) -> Ordering {
    compare_names(&a.name, &b.name).then_with(|| a.name.cmp(&b.name))
}
