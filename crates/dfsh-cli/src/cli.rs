use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dfsh")]
#[command(about = "Operator shell for a remote distributed filesystem")]
pub struct Cli {
    /// Filesystem to attach (file://PATH or a bare export path)
    #[arg(long, global = true)]
    pub fs: Option<String>,

    /// Increase diagnostic verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Append diagnostics to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive menu session (the default)
    Shell,
    /// Render a directory subtree as a tree diagram
    #[command(alias = "list")]
    Ls(LsArgs),
    /// Aggregate file count, directory count and byte total under a path
    Du(DuArgs),
    /// Delete a remote path (confirmation required unless --yes)
    Rm(RmArgs),
    /// Upload a local file into the remote filesystem
    Put(PutArgs),
    /// Download a remote file to this host
    Get(GetArgs),
}

#[derive(Args, Clone, Debug)]
pub struct LsArgs {
    /// Remote path to render
    #[arg(default_value = "/")]
    pub path: String,
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone, Debug)]
pub struct DuArgs {
    /// Remote path to aggregate
    #[arg(default_value = "/")]
    pub path: String,
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone, Debug)]
pub struct RmArgs {
    /// Remote path to delete
    pub path: String,
    /// Delete directories and their contents
    #[arg(short, long)]
    pub recursive: bool,
    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

#[derive(Args, Clone, Debug)]
pub struct PutArgs {
    /// Local source file
    pub local: PathBuf,
    /// Remote destination path
    pub remote: String,
    /// Replace an existing destination
    #[arg(long)]
    pub overwrite: bool,
}

#[derive(Args, Clone, Debug)]
pub struct GetArgs {
    /// Remote source file
    pub remote: String,
    /// Local destination (an existing directory keeps the remote name)
    pub local: PathBuf,
    /// Replace an existing destination
    #[arg(long)]
    pub overwrite: bool,
}
