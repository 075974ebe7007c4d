//! Paced display of a file's contents, one character at a time.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::error::{DifoError, Result};

/// Delay per character at speed 1.0.
pub const BASE_DELAY: Duration = Duration::from_millis(20);

/// Per-character delay for a speed multiplier (`speed` must be positive).
pub fn char_delay(speed: f32) -> Duration {
    Duration::from_nanos((BASE_DELAY.as_nanos() as f64 / f64::from(speed)).round() as u64)
}

/// Write `text` to `writer`, flushing and pausing after every character,
/// then end with a newline.
pub fn slide_text<W: Write>(text: &str, writer: &mut W, delay: Duration) -> io::Result<()> {
    for c in text.chars() {
        write!(writer, "{c}")?;
        writer.flush()?;
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
    writeln!(writer)?;
    writer.flush()
}

/// Slide the contents of the regular file at `path`.
///
/// Failing to open or read the file is a [`DifoError::Open`] error.
pub fn slide_file<W: Write>(path: &Path, writer: &mut W, speed: f32) -> Result<()> {
    if !path.is_file() {
        return Err(DifoError::NotAFile {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(|source| DifoError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    slide_reader(path, file, writer, speed)
}

/// Slide everything `reader` yields; `path` is only used for errors and logs.
pub fn slide_reader<R: Read, W: Write>(
    path: &Path,
    mut reader: R,
    writer: &mut W,
    speed: f32,
) -> Result<()> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| DifoError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    let text = String::from_utf8_lossy(&bytes);
    let delay = char_delay(speed);
    debug!(path = %path.display(), chars = text.chars().count(), ?delay, "sliding file");
    slide_text(&text, writer, delay).map_err(|e| DifoError::io(path, e))
}
