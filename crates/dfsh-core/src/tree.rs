//! Directory tree rendering.
//!
//! Produces the conventional `tree`-style diagram: the root line bare,
//! descendants behind `├── `/`└── ` connectors with `│   ` continuation,
//! directories suffixed with `/`.

use crate::client::RemoteFileSystem;
use crate::errors::FsResult;
use crate::path::DfsPath;
use crate::walk::{walk, WalkEntry};

/// Render the subtree rooted at `path`, one line per entry.
///
/// The result is all-or-nothing: a lookup failure anywhere in the subtree
/// aborts the render and no partial output escapes. Re-running over an
/// unchanged tree yields byte-identical lines.
pub fn tree_lines(fs: &dyn RemoteFileSystem, path: &DfsPath) -> FsResult<Vec<String>> {
    let mut lines = Vec::new();
    // last_in_parent flags of the ancestors on the current chain
    let mut trail: Vec<bool> = Vec::new();

    walk(fs, path, &mut |entry: &WalkEntry| {
        let suffix = if entry.status.is_dir() { "/" } else { "" };
        if entry.depth == 0 {
            lines.push(format!("{}{suffix}", entry.status.path));
            return;
        }

        trail.truncate(entry.depth - 1);
        let mut line = String::new();
        for ancestor_last in &trail {
            line.push_str(if *ancestor_last { "    " } else { "│   " });
        }
        line.push_str(if entry.last_in_parent {
            "└── "
        } else {
            "├── "
        });
        line.push_str(entry.status.name());
        line.push_str(suffix);
        lines.push(line);
        trail.push(entry.last_in_parent);
    })?;

    Ok(lines)
}
