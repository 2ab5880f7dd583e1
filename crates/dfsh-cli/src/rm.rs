use std::io::{self, Write};

use crate::cli::RmArgs;
use crate::util::remote_path;
use dfsh_core::delete::delete_path;
use dfsh_core::FsSession;
use eyre::{bail, Result};

pub fn run_rm(session: &FsSession, args: &RmArgs) -> Result<()> {
    let path = remote_path(&args.path)?;
    if path.is_root() {
        bail!("refusing to delete the filesystem root; specify a sub-path");
    }

    if !args.yes {
        print!(
            "Delete {}{}? [y/N]: ",
            path,
            if args.recursive { " (recursive)" } else { "" }
        );
        io::stdout().flush()?;
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let decision = input.trim().to_ascii_lowercase();
        if !(decision == "y" || decision == "yes") {
            println!("Aborted.");
            return Ok(());
        }
    }

    let deleted = delete_path(session.client(), &path, args.recursive)?;
    if deleted {
        println!("Deleted {path}.");
        Ok(())
    } else {
        bail!("delete of {path} was refused by the filesystem");
    }
}
