//! Depth-first traversal over the remote namespace.
//!
//! Tree rendering and statistics share this one walk: every status under a
//! path, pre-order, children sorted by name. Ordering is part of the
//! contract here (rendering depends on it); aggregation happens to be
//! order-independent.

use crate::client::{PathStatus, RemoteFileSystem};
use crate::errors::FsResult;
use crate::path::DfsPath;

/// One visited entry. `last_in_parent` is true for the final child of its
/// directory (the root counts as last), which is what connector rendering
/// needs to know.
#[derive(Debug, Clone)]
pub struct WalkEntry {
    pub status: PathStatus,
    pub depth: usize,
    pub last_in_parent: bool,
}

/// Children of a directory in lexicographic (ordinal, case-sensitive) order
/// by name. The client makes no ordering promise, so the sort happens here.
pub fn sorted_children(fs: &dyn RemoteFileSystem, parent: &DfsPath) -> FsResult<Vec<PathStatus>> {
    let mut children = fs.list_children(parent)?;
    children.sort_by(|a, b| a.name().cmp(b.name()));
    Ok(children)
}

/// Visit every status under `root`, depth-first. The root itself is visited
/// first at depth zero. A missing root or any mid-walk lookup failure aborts
/// the whole traversal.
pub fn walk<F>(fs: &dyn RemoteFileSystem, root: &DfsPath, visit: &mut F) -> FsResult<()>
where
    F: FnMut(&WalkEntry),
{
    let status = fs.status(root)?;
    let is_dir = status.is_dir();
    visit(&WalkEntry {
        status,
        depth: 0,
        last_in_parent: true,
    });
    if is_dir {
        walk_children(fs, root, 1, visit)?;
    }
    Ok(())
}

fn walk_children<F>(
    fs: &dyn RemoteFileSystem,
    parent: &DfsPath,
    depth: usize,
    visit: &mut F,
) -> FsResult<()>
where
    F: FnMut(&WalkEntry),
{
    let children = sorted_children(fs, parent)?;
    let count = children.len();
    for (index, child) in children.into_iter().enumerate() {
        let is_dir = child.is_dir();
        let child_path = child.path.clone();
        visit(&WalkEntry {
            status: child,
            depth,
            last_in_parent: index + 1 == count,
        });
        if is_dir {
            walk_children(fs, &child_path, depth + 1, visit)?;
        }
    }
    Ok(())
}
