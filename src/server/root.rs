//! The directory files are served from.
//!
//! Resolved once at startup and shared read-only by every connection.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::http::error::ProtocolError;

#[derive(Debug, Clone)]
pub struct ServeRoot {
    /// Absolute, canonical directory path.
    path: PathBuf,
}

impl ServeRoot {
    /// Uses `dir` itself as the root.
    pub fn new(dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        let dir = dir.as_ref();
        let path = std::fs::canonicalize(dir)
            .with_context(|| format!("error in file path '{}'", dir.display()))?;

        if !path.is_dir() {
            anyhow::bail!("'{}' is not a directory", path.display());
        }

        Ok(Self { path })
    }

    /// Uses the directory containing `file` as the root.
    ///
    /// `file` itself does not have to exist, only its parent directory.
    pub fn from_file_arg(file: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file = file.as_ref();
        let dir = match file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            Some(_) => Path::new("."),
            None if file.as_os_str().is_empty() => Path::new("."),
            None => file,
        };
        Self::new(dir)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Maps a request path onto the filesystem without leaving the root.
    ///
    /// `.` segments and empty segments are dropped and `..` removes the
    /// previous segment. A `..` with nothing left to remove is rejected.
    pub fn resolve(&self, request_path: &str) -> Result<PathBuf, ProtocolError> {
        let mut segments: Vec<&str> = Vec::new();

        for segment in request_path.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    if segments.pop().is_none() {
                        return Err(outside_root(request_path));
                    }
                }
                s => segments.push(s),
            }
        }

        let mut resolved = self.path.clone();
        resolved.extend(segments);
        Ok(resolved)
    }

    /// Reads the file named by `request_path`.
    ///
    /// Symlinks are followed, but the final target must still live under the
    /// root. Every failure is a [`ProtocolError::FileAccess`].
    pub async fn read(&self, request_path: &str) -> Result<Vec<u8>, ProtocolError> {
        let resolved = self.resolve(request_path)?;

        let target = tokio::fs::canonicalize(&resolved)
            .await
            .map_err(ProtocolError::FileAccess)?;
        if !target.starts_with(&self.path) {
            return Err(outside_root(request_path));
        }

        tokio::fs::read(&target)
            .await
            .map_err(ProtocolError::FileAccess)
    }
}

fn outside_root(request_path: &str) -> ProtocolError {
    ProtocolError::FileAccess(io::Error::new(
        io::ErrorKind::PermissionDenied,
        format!("'{request_path}' resolves outside the server root"),
    ))
}
