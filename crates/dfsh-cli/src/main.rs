mod cli;
mod config;
mod du;
mod logging;
mod ls;
mod rm;
mod shell;
mod transfer;
mod util;

use std::io;

use clap::Parser;
use eyre::{eyre, Context, Result};

use crate::cli::{Cli, Commands};
use crate::config::ShellConfig;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let shell_config = match ShellConfig::load_default() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("[warn] ignoring unreadable config: {err:#}");
            ShellConfig::default()
        }
    };

    let log_file = cli.log_file.clone().or(shell_config.log_file);
    logging::init(cli.verbose, log_file.as_deref())?;

    let uri = cli
        .fs
        .clone()
        .or(shell_config.filesystem)
        .ok_or_else(|| {
            eyre!("no filesystem given; pass --fs or set `filesystem` in dfsh.toml")
        })?;
    tracing::debug!(%uri, "attaching filesystem");
    let session = dfsh_core::connect(&uri).wrap_err_with(|| format!("connecting to {uri}"))?;

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout();
            shell::run_shell(&session, &mut input, &mut output)?;
        }
        Commands::Ls(args) => ls::run_ls(&session, &args)?,
        Commands::Du(args) => du::run_du(&session, &args)?,
        Commands::Rm(args) => rm::run_rm(&session, &args)?,
        Commands::Put(args) => transfer::run_put(&session, &args)?,
        Commands::Get(args) => transfer::run_get(&session, &args)?,
    }

    Ok(())
}
