//! Guarded path deletion.

use crate::client::RemoteFileSystem;
use crate::errors::{FsError, FsResult};
use crate::path::DfsPath;

/// Delete a remote path.
///
/// A missing path fails with `NotFound` before the client delete is ever
/// invoked. Otherwise the client's own outcome passes through: deleting a
/// non-empty directory without `recursive` is refused by the client itself,
/// no child counting happens here.
pub fn delete_path(fs: &dyn RemoteFileSystem, path: &DfsPath, recursive: bool) -> FsResult<bool> {
    if !fs.exists(path)? {
        return Err(FsError::NotFound(path.to_string()));
    }
    fs.delete(path, recursive)
}
