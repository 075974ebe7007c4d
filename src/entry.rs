//! Filesystem entries and the probe used to classify and measure them.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use walkdir::WalkDir;

use crate::error::{DifoError, Result};

/// One filesystem object within a listing.
///
/// Only the directory bit is captured at creation time. Size, modification
/// time and the executable bit are queried from an [`EntryProbe`] when a
/// renderer or the sorter needs them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Full filesystem path.
    pub path: PathBuf,
    /// Display name (last path component).
    pub name: String,
    /// Whether this entry is a directory.
    pub is_dir: bool,
}

impl Entry {
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>, is_dir: bool) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            is_dir,
        }
    }

    /// Create an entry for `path`, asking `probe` whether it is a directory.
    pub fn probe<P: EntryProbe + ?Sized>(path: impl Into<PathBuf>, probe: &P) -> Self {
        let path = path.into();
        let name = display_name(&path);
        let is_dir = probe.is_dir(&path);
        Self { path, name, is_dir }
    }

    /// Dot-prefixed names are hidden.
    pub fn is_hidden(&self) -> bool {
        is_hidden_name(&self.name)
    }
}

impl AsRef<Entry> for Entry {
    fn as_ref(&self) -> &Entry {
        self
    }
}

pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
}

/// Last path component, or the whole path for roots such as `/`.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// Classification of a filesystem object, in the order it is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    Executable,
    File,
    /// Broken symlink, socket, device, or anything that could not be stat'ed.
    Other,
}

/// Narrow interface to the platform's file metadata.
pub trait EntryProbe {
    /// Classify the object at `path`, following symlinks.
    ///
    /// A dangling symlink is `Other`; a path that cannot be stat'ed at all
    /// is an error.
    fn stat_kind(&self, path: &Path) -> Result<EntryKind>;

    /// Like [`stat_kind`](Self::stat_kind), with errors treated as `Other`.
    fn kind(&self, path: &Path) -> EntryKind {
        self.stat_kind(path).unwrap_or(EntryKind::Other)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.kind(path) == EntryKind::Directory
    }

    /// Size in bytes. A dangling symlink reports the link's own length.
    fn size(&self, path: &Path) -> Result<u64>;

    /// Last modification time.
    fn modified(&self, path: &Path) -> Result<SystemTime>;

    /// Names of the direct children of a directory, in no particular order.
    fn list_dir(&self, path: &Path) -> Result<Vec<String>>;

    /// Identity used to detect directory cycles.
    fn canonical(&self, path: &Path) -> PathBuf {
        path.to_path_buf()
    }
}

/// `EntryProbe` backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl EntryProbe for FsProbe {
    fn stat_kind(&self, path: &Path) -> Result<EntryKind> {
        let meta = match fs::metadata(path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                // Dangling symlink: the link itself exists.
                fs::symlink_metadata(path).map_err(|e| DifoError::io(path, e))?;
                return Ok(EntryKind::Other);
            }
            Err(e) => return Err(DifoError::io(path, e)),
        };
        Ok(if meta.is_dir() {
            EntryKind::Directory
        } else if has_exec_bit(&meta) {
            EntryKind::Executable
        } else if meta.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        })
    }

    fn size(&self, path: &Path) -> Result<u64> {
        metadata_or_link(path)
            .map(|m| m.len())
            .map_err(|e| DifoError::io(path, e))
    }

    fn modified(&self, path: &Path) -> Result<SystemTime> {
        metadata_or_link(path)
            .and_then(|m| m.modified())
            .map_err(|e| DifoError::io(path, e))
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in WalkDir::new(path).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| walk_error(path, e))?;
            names.push(entry.file_name().to_string_lossy().to_string());
        }
        Ok(names)
    }

    fn canonical(&self, path: &Path) -> PathBuf {
        fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
    }
}

/// Metadata of the target, or of the link itself when the target is gone.
fn metadata_or_link(path: &Path) -> io::Result<fs::Metadata> {
    match fs::metadata(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => fs::symlink_metadata(path),
        other => other,
    }
}

fn walk_error(dir: &Path, err: walkdir::Error) -> DifoError {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| dir.to_path_buf());
    let message = err.to_string();
    match err.into_io_error() {
        Some(io_err) => DifoError::io(path, io_err),
        None => DifoError::Other { message },
    }
}

#[cfg(unix)]
fn has_exec_bit(meta: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn has_exec_bit(_meta: &fs::Metadata) -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn hidden_follows_dot_prefix() {
        assert!(Entry::new("/x/.env", ".env", false).is_hidden());
        assert!(!Entry::new("/x/env", "env", false).is_hidden());
    }

    #[test]
    fn display_name_falls_back_to_path() {
        assert_eq!(display_name(Path::new("/")), "/");
        assert_eq!(display_name(Path::new("/tmp/a.txt")), "a.txt");
    }

    #[test]
    fn fs_probe_classifies_and_measures() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("data.bin");
        fs::write(&file, vec![0u8; 42]).unwrap();

        let probe = FsProbe;
        assert_eq!(probe.kind(tmp.path()), EntryKind::Directory);
        assert_eq!(probe.kind(&file), EntryKind::File);
        assert_eq!(probe.kind(&tmp.path().join("missing")), EntryKind::Other);
        assert_eq!(probe.size(&file).unwrap(), 42);
        assert!(probe.modified(&file).is_ok());
        assert_eq!(probe.list_dir(tmp.path()).unwrap(), vec!["data.bin"]);
    }

    #[test]
    #[cfg(unix)]
    fn fs_probe_detects_executable() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let script = tmp.path().join("run.sh");
        fs::write(&script, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        assert_eq!(FsProbe.kind(&script), EntryKind::Executable);
    }

    #[test]
    #[cfg(unix)]
    fn fs_probe_measures_dangling_symlink_itself() {
        let tmp = TempDir::new().unwrap();
        let link = tmp.path().join("dangling");
        std::os::unix::fs::symlink(tmp.path().join("gone"), &link).unwrap();

        assert_eq!(FsProbe.stat_kind(&link).unwrap(), EntryKind::Other);
        assert!(FsProbe.size(&link).unwrap() > 0);
        assert!(FsProbe.modified(&link).is_ok());
    }

    #[test]
    fn fs_probe_missing_path_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let err = FsProbe.stat_kind(&tmp.path().join("gone")).unwrap_err();
        assert!(matches!(err, DifoError::NotFound { .. }));
    }

    #[test]
    fn fs_probe_missing_size_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let err = FsProbe.size(&tmp.path().join("gone")).unwrap_err();
        assert!(matches!(err, DifoError::NotFound { .. }));
    }
}
