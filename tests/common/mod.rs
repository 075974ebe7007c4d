#![allow(dead_code)]

use difo::entry::{EntryKind, EntryProbe};
use difo::error::{DifoError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create empty files.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for p in paths {
        let full = tmp.path().join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, "").unwrap();
        }
    }
    tmp
}

/// Create files with the given sizes (in bytes) under a fresh temp dir.
pub fn create_sized_fixture(files: &[(&str, usize)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (p, size) in files {
        let full = tmp.path().join(p);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full, vec![b'x'; *size]).unwrap();
    }
    tmp
}

/// Extract plain text from a ratatui Line.
pub fn line_to_text(line: &ratatui::text::Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

pub fn lines_to_text(lines: &[ratatui::text::Line<'_>]) -> Vec<String> {
    lines.iter().map(line_to_text).collect()
}

#[derive(Debug, Clone)]
struct MemNode {
    kind: EntryKind,
    size: u64,
    modified: SystemTime,
    denied: bool,
    unstatable: bool,
}

/// In-memory filesystem for deterministic probe-driven tests.
#[derive(Debug, Default)]
pub struct MemProbe {
    nodes: BTreeMap<PathBuf, MemNode>,
}

impl MemProbe {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(mut self, path: &str, kind: EntryKind, size: u64) -> Self {
        self.nodes.insert(
            PathBuf::from(path),
            MemNode {
                kind,
                size,
                modified: SystemTime::UNIX_EPOCH,
                denied: false,
                unstatable: false,
            },
        );
        self
    }

    pub fn dir(self, path: &str) -> Self {
        self.insert(path, EntryKind::Directory, 4096)
    }

    pub fn file(self, path: &str, size: u64) -> Self {
        self.insert(path, EntryKind::File, size)
    }

    pub fn exec(self, path: &str, size: u64) -> Self {
        self.insert(path, EntryKind::Executable, size)
    }

    pub fn special(self, path: &str) -> Self {
        self.insert(path, EntryKind::Other, 0)
    }

    /// Set the modification time to `secs` after the epoch.
    pub fn mtime(mut self, path: &str, secs: u64) -> Self {
        if let Some(node) = self.nodes.get_mut(Path::new(path)) {
            node.modified = SystemTime::UNIX_EPOCH + Duration::from_secs(secs);
        }
        self
    }

    /// Make listing this directory fail with permission denied.
    pub fn deny(mut self, path: &str) -> Self {
        if let Some(node) = self.nodes.get_mut(Path::new(path)) {
            node.denied = true;
        }
        self
    }

    /// Make stat'ing this path fail with permission denied.
    pub fn unstatable(mut self, path: &str) -> Self {
        if let Some(node) = self.nodes.get_mut(Path::new(path)) {
            node.unstatable = true;
        }
        self
    }

    fn node(&self, path: &Path) -> Result<&MemNode> {
        self.nodes.get(path).ok_or_else(|| DifoError::NotFound {
            path: path.to_path_buf(),
        })
    }
}

impl EntryProbe for MemProbe {
    fn stat_kind(&self, path: &Path) -> Result<EntryKind> {
        let node = self.node(path)?;
        if node.unstatable {
            return Err(DifoError::PermissionDenied {
                path: path.to_path_buf(),
            });
        }
        Ok(node.kind)
    }

    fn size(&self, path: &Path) -> Result<u64> {
        Ok(self.node(path)?.size)
    }

    fn modified(&self, path: &Path) -> Result<SystemTime> {
        Ok(self.node(path)?.modified)
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<String>> {
        if self.node(path)?.denied {
            return Err(DifoError::PermissionDenied {
                path: path.to_path_buf(),
            });
        }
        // Reverse map order so callers cannot rely on the listing being sorted.
        Ok(self
            .nodes
            .keys()
            .filter(|p| p.parent() == Some(path))
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .rev()
            .collect())
    }
}

/// The tree scenario used across tests: `a.txt` (10), `.hidden` (5),
/// `b/c.txt` (20).
pub fn scenario_probe() -> MemProbe {
    MemProbe::new()
        .dir("/mem")
        .file("/mem/a.txt", 10)
        .file("/mem/.hidden", 5)
        .dir("/mem/b")
        .file("/mem/b/c.txt", 20)
}
