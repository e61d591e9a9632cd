//! Append-only file sink.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;

use recordhook_core::error::{AppError, ErrorKind};
use recordhook_core::result::AppResult;
use recordhook_core::traits::MessageSink;

/// Appends each message as one line to a file.
#[derive(Debug)]
pub struct FileSink {
    /// Target file path.
    path: PathBuf,
    /// Open handle; the lock serializes writers.
    file: Mutex<File>,
}

impl FileSink {
    /// Open (or create) the file at `path` for appending.
    ///
    /// Missing parent directories are created.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::with_source(
                    ErrorKind::Sink,
                    format!("Failed to create sink directory: {}", parent.display()),
                    e,
                )
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Sink,
                    format!("Failed to open sink file: {}", path.display()),
                    e,
                )
            })?;

        debug!(path = %path.display(), "File sink opened");

        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }
}

impl MessageSink for FileSink {
    fn kind(&self) -> &str {
        "file"
    }

    fn write(&self, message: &str) -> AppResult<()> {
        let mut file = self.file.lock().unwrap_or_else(|e| e.into_inner());
        writeln!(file, "{message}").map_err(|e| {
            AppError::with_source(
                ErrorKind::Sink,
                format!("Failed to write to {}", self.path.display()),
                e,
            )
        })
    }
}
