//! File transfers between the invoking host and the remote filesystem.
//!
//! Both directions are a single buffered byte copy with the preconditions
//! checked up front. Streams are scoped locals, released on every exit path.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::client::RemoteFileSystem;
use crate::errors::{classify_io_error, FsError, FsResult};
use crate::path::DfsPath;

const COPY_BUFFER: usize = 128 * 1024;

/// Upload a local file to the remote filesystem. Returns the bytes copied.
///
/// The remote parent directory (and ancestors) are created if absent. An
/// existing destination is refused unless `overwrite` is set.
pub fn upload(
    fs: &dyn RemoteFileSystem,
    local: &Path,
    remote: &DfsPath,
    overwrite: bool,
) -> FsResult<u64> {
    let meta = fs::metadata(local)
        .map_err(|err| classify_io_error(&local.display().to_string(), "reading", err))?;
    if !meta.is_file() {
        return Err(FsError::NotFound(local.display().to_string()));
    }

    if let Some(parent) = remote.parent() {
        if !fs.exists(&parent)? {
            fs.create_directories(&parent)?;
        }
    }

    let source = File::open(local)
        .map_err(|err| classify_io_error(&local.display().to_string(), "opening", err))?;
    let mut reader = BufReader::with_capacity(COPY_BUFFER, source);
    let mut writer = fs.create_write(remote, overwrite)?;
    let bytes = io::copy(&mut reader, &mut writer)
        .map_err(|err| FsError::io(format!("copying to {remote}"), err))?;
    writer
        .flush()
        .map_err(|err| FsError::io(format!("flushing {remote}"), err))?;
    Ok(bytes)
}

/// Download a remote file to the invoking host. Returns the bytes copied.
///
/// A directory-like local target (an existing directory, or a path with a
/// trailing separator) receives the remote base name as its file name. An
/// existing destination is refused unless `overwrite` is set. Missing local
/// parents are created best-effort; only an actual write failure aborts.
pub fn download(
    fs: &dyn RemoteFileSystem,
    remote: &DfsPath,
    local: &Path,
    overwrite: bool,
) -> FsResult<u64> {
    // surfaces NotFound before any local state is touched
    fs.status(remote)?;

    let target = resolve_local_target(remote, local);
    if target.exists() && !overwrite {
        return Err(FsError::AlreadyExists(target.display().to_string()));
    }

    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            if let Err(err) = fs::create_dir_all(parent) {
                tracing::warn!(
                    parent = %parent.display(),
                    error = %err,
                    "could not create local parent directory"
                );
            }
        }
    }

    let mut reader = fs.open_read(remote)?;
    let sink = File::create(&target)
        .map_err(|err| classify_io_error(&target.display().to_string(), "creating", err))?;
    let mut writer = BufWriter::with_capacity(COPY_BUFFER, sink);
    let bytes = io::copy(&mut reader, &mut writer)
        .map_err(|err| FsError::io(format!("copying from {remote}"), err))?;
    writer
        .flush()
        .map_err(|err| FsError::io(format!("flushing {}", target.display()), err))?;
    Ok(bytes)
}

/// Directory-like targets take the remote base name; everything else is the
/// destination as given.
fn resolve_local_target(remote: &DfsPath, local: &Path) -> PathBuf {
    let raw = local.to_string_lossy();
    let dir_like = local.is_dir()
        || raw.ends_with('/')
        || raw.ends_with(std::path::MAIN_SEPARATOR);
    if dir_like {
        local.join(remote.name())
    } else {
        local.to_path_buf()
    }
}
