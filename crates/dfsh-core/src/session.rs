//! The operator session: one owned client handle, one operation at a time.
//!
//! `FsSession` is the boundary the shell and the one-shot commands talk to.
//! Every operation catches its failure here, records the cause in the
//! diagnostic log, and reports a boolean or empty result; raw errors never
//! cross this boundary. The handle is acquired once by `connect` and
//! released once when the session drops.

use std::path::Path;

use crate::client::RemoteFileSystem;
use crate::delete::delete_path;
use crate::errors::{FsError, FsResult};
use crate::localfs::LocalFs;
use crate::path::DfsPath;
use crate::stats::{collect_stats, DirectoryStats};
use crate::transfer::{download, upload};
use crate::tree::tree_lines;

/// Open a session against a filesystem URI.
///
/// `file://PATH` (or a bare path) attaches the local-export driver; any
/// other scheme is a connection failure, the one error that aborts a run.
pub fn connect(uri: &str) -> FsResult<FsSession> {
    let fs: Box<dyn RemoteFileSystem> = if let Some(root) = uri.strip_prefix("file://") {
        Box::new(LocalFs::open(root)?)
    } else if uri.contains("://") {
        return Err(FsError::Connection(format!(
            "no client for '{uri}' (supported schemes: file://)"
        )));
    } else {
        Box::new(LocalFs::open(uri)?)
    };
    tracing::info!(%uri, "connected");
    Ok(FsSession::new(fs))
}

pub struct FsSession {
    fs: Box<dyn RemoteFileSystem>,
}

impl std::fmt::Debug for FsSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FsSession").finish_non_exhaustive()
    }
}

impl FsSession {
    pub fn new(fs: Box<dyn RemoteFileSystem>) -> Self {
        Self { fs }
    }

    pub fn client(&self) -> &dyn RemoteFileSystem {
        self.fs.as_ref()
    }

    /// Upload a local file. True on success; failures are logged.
    pub fn upload(&self, local: &Path, remote: &DfsPath, overwrite: bool) -> bool {
        match upload(self.fs.as_ref(), local, remote, overwrite) {
            Ok(bytes) => {
                tracing::info!(local = %local.display(), %remote, bytes, "uploaded");
                true
            }
            Err(err) => {
                log_failure("upload", &err);
                false
            }
        }
    }

    /// Download a remote file. True on success; failures are logged.
    pub fn download(&self, remote: &DfsPath, local: &Path, overwrite: bool) -> bool {
        match download(self.fs.as_ref(), remote, local, overwrite) {
            Ok(bytes) => {
                tracing::info!(%remote, local = %local.display(), bytes, "downloaded");
                true
            }
            Err(err) => {
                log_failure("download", &err);
                false
            }
        }
    }

    /// Delete a remote path. The client's boolean outcome on success;
    /// false (logged) for a missing path or any failure.
    pub fn delete(&self, path: &DfsPath, recursive: bool) -> bool {
        match delete_path(self.fs.as_ref(), path, recursive) {
            Ok(deleted) => {
                tracing::info!(%path, recursive, deleted, "delete finished");
                deleted
            }
            Err(err) => {
                log_failure("delete", &err);
                false
            }
        }
    }

    /// Stats for the subtree under `path`. Zeroed counters (with a logged
    /// notice) when the path is missing or the traversal fails.
    pub fn directory_stats(&self, path: &DfsPath) -> DirectoryStats {
        match collect_stats(self.fs.as_ref(), path) {
            Ok(stats) => stats,
            Err(err) => {
                log_failure("stats", &err);
                DirectoryStats::default()
            }
        }
    }

    /// Rendered tree lines for `path`. A missing path or failed render
    /// yields a single notice line instead.
    pub fn list_tree(&self, path: &DfsPath) -> Vec<String> {
        match tree_lines(self.fs.as_ref(), path) {
            Ok(lines) => lines,
            Err(FsError::NotFound(missing)) => {
                tracing::warn!(path = %missing, "list target not found");
                vec![format!("{missing}: not found")]
            }
            Err(err) => {
                log_failure("list", &err);
                vec![format!("{path}: listing failed (see diagnostic log)")]
            }
        }
    }
}

impl Drop for FsSession {
    fn drop(&mut self) {
        tracing::info!("filesystem handle released");
    }
}

fn log_failure(operation: &str, err: &FsError) {
    if err.is_not_found() {
        tracing::warn!(operation, error = %err, "operation target missing");
    } else {
        tracing::error!(operation, error = %err, "operation failed");
    }
}
