use crate::cli::DuArgs;
use crate::util::{format_bytes, remote_path};
use dfsh_core::stats::collect_stats;
use dfsh_core::FsSession;
use eyre::Result;
use serde::Serialize;

#[derive(Serialize)]
struct DirectoryStatsJson<'a> {
    path: &'a str,
    files: u64,
    dirs: u64,
    bytes: u64,
}

pub fn run_du(session: &FsSession, args: &DuArgs) -> Result<()> {
    let path = remote_path(&args.path)?;
    let stats = collect_stats(session.client(), &path)?;

    if args.json {
        let row = DirectoryStatsJson {
            path: path.as_str(),
            files: stats.file_count,
            dirs: stats.directory_count,
            bytes: stats.total_size_bytes,
        };
        println!("{}", serde_json::to_string_pretty(&row)?);
    } else {
        println!("{:<40} {:>12} {:>8} {:>8}", "PATH", "BYTES", "FILES", "DIRS");
        println!(
            "{:<40} {:>12} {:>8} {:>8}",
            path.as_str(),
            stats.total_size_bytes,
            stats.file_count,
            stats.directory_count
        );
        println!("Total: {}", format_bytes(stats.total_size_bytes));
    }
    Ok(())
}
