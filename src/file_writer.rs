//! File writer: puts a fixed byte sequence into a fixed file
//!
//! The target is opened create + truncate, written with a single write call,
//! and closed when the handle drops. A short write is fatal and never retried.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Output path, relative to the working directory at process start
pub const FIXED_PATH: &str = "test.txt";

/// Bytes written to [`FIXED_PATH`] (no trailing newline)
pub const FIXED_CONTENT: &[u8] = b"some great stuff";

/// Errors from the file-write and report steps
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("failed to open {} for writing", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write to {}: wrote {written} of {expected} bytes", .path.display())]
    Write {
        path: PathBuf,
        written: usize,
        expected: usize,
    },

    #[error("failed to write to {}", .path.display())]
    WriteIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to print wrapped value to stdout")]
    Report {
        #[source]
        source: std::io::Error,
    },
}

/// Result type for runner operations
pub type Result<T> = std::result::Result<T, RunnerError>;

/// Write [`FIXED_CONTENT`] to [`FIXED_PATH`] in the current directory
pub fn write_fixed_file() -> Result<()> {
    write_fixed_file_at(FIXED_PATH)
}

/// Write [`FIXED_CONTENT`] to `path`, replacing whatever was there
pub fn write_fixed_file_at(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "opening output file");

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|source| RunnerError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    // `file` is dropped (and closed) on both the error and success paths
    write_once(&mut file, FIXED_CONTENT, path)?;

    tracing::debug!(
        path = %path.display(),
        bytes = FIXED_CONTENT.len(),
        "output file written"
    );
    Ok(())
}

/// Issue exactly one `write` call and require it to take all of `content`
///
/// `path` only labels the error.
pub fn write_once<W: Write>(writer: &mut W, content: &[u8], path: &Path) -> Result<()> {
    let written = writer.write(content).map_err(|source| RunnerError::WriteIo {
        path: path.to_path_buf(),
        source,
    })?;

    if written != content.len() {
        tracing::trace!(written, expected = content.len(), "short write");
        return Err(RunnerError::Write {
            path: path.to_path_buf(),
            written,
            expected: content.len(),
        });
    }

    Ok(())
}
