//! Local-export driver.
//!
//! `LocalFs` roots the remote namespace at a directory on the invoking host,
//! the way a daemon exports a module path. It is the built-in capability used
//! for development and tests; distributed clients integrate by implementing
//! `RemoteFileSystem` themselves.

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::client::{EntryKind, PathStatus, RemoteFileSystem};
use crate::errors::{classify_io_error, FsError, FsResult};
use crate::path::DfsPath;

pub struct LocalFs {
    root: PathBuf,
}

impl LocalFs {
    /// Attach to an export root. The root must already exist as a directory;
    /// anything else is a connection failure.
    pub fn open(root: impl Into<PathBuf>) -> FsResult<Self> {
        let root = root.into();
        match fs::metadata(&root) {
            Ok(meta) if meta.is_dir() => Ok(Self { root }),
            Ok(_) => Err(FsError::Connection(format!(
                "export root is not a directory: {}",
                root.display()
            ))),
            Err(err) => Err(FsError::Connection(format!(
                "cannot open export root {}: {err}",
                root.display()
            ))),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a remote path under the export root. `DfsPath` normalisation
    /// guarantees no upward components, so the join cannot escape.
    fn resolve(&self, path: &DfsPath) -> PathBuf {
        if path.is_root() {
            self.root.clone()
        } else {
            self.root.join(path.relative())
        }
    }

    fn status_of(&self, path: &DfsPath, meta: &fs::Metadata) -> PathStatus {
        if meta.is_dir() {
            PathStatus {
                path: path.clone(),
                kind: EntryKind::Directory,
                len: 0,
            }
        } else {
            PathStatus {
                path: path.clone(),
                kind: EntryKind::File,
                len: meta.len(),
            }
        }
    }
}

impl RemoteFileSystem for LocalFs {
    fn exists(&self, path: &DfsPath) -> FsResult<bool> {
        match fs::metadata(self.resolve(path)) {
            Ok(_) => Ok(true),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(classify_io_error(path.as_str(), "checking", err)),
        }
    }

    fn status(&self, path: &DfsPath) -> FsResult<PathStatus> {
        let meta = fs::metadata(self.resolve(path))
            .map_err(|err| classify_io_error(path.as_str(), "reading status of", err))?;
        Ok(self.status_of(path, &meta))
    }

    fn list_children(&self, path: &DfsPath) -> FsResult<Vec<PathStatus>> {
        let dir = self.resolve(path);
        let mut children = Vec::new();
        let entries = fs::read_dir(&dir)
            .map_err(|err| classify_io_error(path.as_str(), "listing", err))?;
        for entry in entries {
            let entry = entry.map_err(|err| classify_io_error(path.as_str(), "listing", err))?;
            let meta = entry
                .metadata()
                .map_err(|err| classify_io_error(path.as_str(), "listing", err))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            children.push(self.status_of(&path.child(&name), &meta));
        }
        Ok(children)
    }

    fn open_read(&self, path: &DfsPath) -> FsResult<Box<dyn Read>> {
        let local = self.resolve(path);
        let meta = fs::metadata(&local)
            .map_err(|err| classify_io_error(path.as_str(), "opening", err))?;
        if meta.is_dir() {
            return Err(FsError::io(
                format!("opening {path}"),
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "is a directory"),
            ));
        }
        let file =
            File::open(&local).map_err(|err| classify_io_error(path.as_str(), "opening", err))?;
        Ok(Box::new(file))
    }

    fn create_write(&self, path: &DfsPath, overwrite: bool) -> FsResult<Box<dyn Write>> {
        let local = self.resolve(path);
        let file = if overwrite {
            File::create(&local)
        } else {
            // create_new refuses an existing destination without touching it
            OpenOptions::new().write(true).create_new(true).open(&local)
        };
        let file = file.map_err(|err| classify_io_error(path.as_str(), "creating", err))?;
        Ok(Box::new(file))
    }

    fn create_directories(&self, path: &DfsPath) -> FsResult<bool> {
        fs::create_dir_all(self.resolve(path))
            .map_err(|err| classify_io_error(path.as_str(), "creating directories under", err))?;
        Ok(true)
    }

    fn delete(&self, path: &DfsPath, recursive: bool) -> FsResult<bool> {
        let local = self.resolve(path);
        let meta = fs::metadata(&local)
            .map_err(|err| classify_io_error(path.as_str(), "deleting", err))?;
        let result = if meta.is_dir() {
            if recursive {
                fs::remove_dir_all(&local)
            } else {
                // refuses a non-empty directory
                fs::remove_dir(&local)
            }
        } else {
            fs::remove_file(&local)
        };
        result.map_err(|err| classify_io_error(path.as_str(), "deleting", err))?;
        Ok(true)
    }
}
