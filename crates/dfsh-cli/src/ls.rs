use crate::cli::LsArgs;
use crate::util::remote_path;
use dfsh_core::tree::tree_lines;
use dfsh_core::walk::walk;
use dfsh_core::{DfsPath, EntryKind, FsSession};
use eyre::Result;
use serde::Serialize;

#[derive(Serialize)]
struct TreeEntryJson {
    path: DfsPath,
    kind: EntryKind,
    size: u64,
}

pub fn run_ls(session: &FsSession, args: &LsArgs) -> Result<()> {
    let path = remote_path(&args.path)?;

    if args.json {
        let mut rows = Vec::new();
        walk(session.client(), &path, &mut |entry| {
            rows.push(TreeEntryJson {
                path: entry.status.path.clone(),
                kind: entry.status.kind,
                size: entry.status.len,
            });
        })?;
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for line in tree_lines(session.client(), &path)? {
        println!("{line}");
    }
    Ok(())
}
