//! Tree building and the in-memory directory model.

pub(crate) mod walk;

use crate::entry::Entry;

pub use walk::{build_tree, list_entries};

/// An entry plus its ordered children.
///
/// A node is a leaf iff `children` is empty: files always are, and so are
/// empty directories and those cut off by the depth limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub entry: Entry,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn leaf(entry: Entry) -> Self {
        Self {
            entry,
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of directories below this node (the node itself excluded).
    pub fn count_directories(&self) -> usize {
        self.children
            .iter()
            .filter(|c| c.entry.is_dir)
            .map(|c| 1 + c.count_directories())
            .sum()
    }

    /// Number of non-directory entries below this node.
    pub fn count_files(&self) -> usize {
        self.children
            .iter()
            .map(|c| {
                if c.entry.is_dir {
                    c.count_files()
                } else {
                    1
                }
            })
            .sum()
    }
}

impl AsRef<Entry> for TreeNode {
    fn as_ref(&self) -> &Entry {
        &self.entry
    }
}

/// Configuration for tree building.
#[derive(Debug, Clone, Default)]
pub struct TreeConfig {
    /// Whether to include hidden files and directories (dotfiles).
    pub show_hidden: bool,
    /// Maximum traversal depth (`None` for unlimited).
    pub max_depth: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(name: &str, is_dir: bool, children: Vec<TreeNode>) -> TreeNode {
        TreeNode {
            entry: Entry::new(format!("/r/{name}"), name, is_dir),
            children,
        }
    }

    #[test]
    fn counts_exclude_root() {
        let tree = node(
            "root",
            true,
            vec![
                node("a.txt", false, vec![]),
                node("b", true, vec![node("c.txt", false, vec![]), node("d", true, vec![])]),
            ],
        );
        assert_eq!(tree.count_directories(), 2);
        assert_eq!(tree.count_files(), 2);
    }

    #[test]
    fn empty_directory_is_leaf() {
        assert!(node("empty", true, vec![]).is_leaf());
    }
}
