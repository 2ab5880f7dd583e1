//! The remote filesystem client contract.
//!
//! The distributed storage system itself lives behind this trait; the crate
//! only ever talks to it through these calls. Implementations are expected
//! to be synchronous and blocking, one operation at a time.

use std::io::{Read, Write};

use serde::Serialize;

use crate::errors::FsResult;
use crate::path::DfsPath;

/// What a remote entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

/// One remote entry as reported by the client. Never cached; fetched per
/// call. `len` is meaningful only for files.
#[derive(Debug, Clone, Serialize)]
pub struct PathStatus {
    pub path: DfsPath,
    pub kind: EntryKind,
    pub len: u64,
}

impl PathStatus {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn name(&self) -> &str {
        self.path.name()
    }
}

/// Blocking client for one remote filesystem.
///
/// `list_children` makes no ordering promise; callers that need determinism
/// sort the returned statuses themselves. The hierarchy is guaranteed
/// acyclic by the implementation.
pub trait RemoteFileSystem {
    fn exists(&self, path: &DfsPath) -> FsResult<bool>;

    /// Status of one entry. `NotFound` when the path is absent.
    fn status(&self, path: &DfsPath) -> FsResult<PathStatus>;

    /// Direct children of a directory, in no particular order.
    fn list_children(&self, path: &DfsPath) -> FsResult<Vec<PathStatus>>;

    /// Byte stream over a remote file.
    fn open_read(&self, path: &DfsPath) -> FsResult<Box<dyn Read>>;

    /// Byte stream creating (or, with `overwrite`, replacing) a remote file.
    /// `AlreadyExists` when the path is present and `overwrite` is false.
    fn create_write(&self, path: &DfsPath, overwrite: bool) -> FsResult<Box<dyn Write>>;

    /// Create a directory and any missing ancestors.
    fn create_directories(&self, path: &DfsPath) -> FsResult<bool>;

    /// Delete an entry. A directory with children is refused unless
    /// `recursive` is set.
    fn delete(&self, path: &DfsPath, recursive: bool) -> FsResult<bool>;
}
