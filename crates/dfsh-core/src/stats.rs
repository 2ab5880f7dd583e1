//! Directory statistics.

use std::fmt;

use serde::Serialize;

use crate::client::{EntryKind, RemoteFileSystem};
use crate::errors::FsResult;
use crate::path::DfsPath;
use crate::walk::walk;

/// Counter triple for one statistics request. Created fresh per request;
/// counters only ever grow during the traversal, and `total_size_bytes`
/// moves only when a file is visited.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryStats {
    pub file_count: u64,
    pub directory_count: u64,
    pub total_size_bytes: u64,
}

impl DirectoryStats {
    pub fn record_file(&mut self, len: u64) {
        self.file_count += 1;
        self.total_size_bytes += len;
    }

    pub fn record_directory(&mut self) {
        self.directory_count += 1;
    }
}

impl fmt::Display for DirectoryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "files={}, directories={}, size={} bytes",
            self.file_count, self.directory_count, self.total_size_bytes
        )
    }
}

/// Accumulate stats for everything reachable under `path`, the root entry
/// included. All-or-nothing: a mid-walk failure discards the partial counts.
pub fn collect_stats(fs: &dyn RemoteFileSystem, path: &DfsPath) -> FsResult<DirectoryStats> {
    let mut stats = DirectoryStats::default();
    walk(fs, path, &mut |entry| match entry.status.kind {
        EntryKind::Directory => stats.record_directory(),
        EntryKind::File => stats.record_file(entry.status.len),
    })?;
    Ok(stats)
}
