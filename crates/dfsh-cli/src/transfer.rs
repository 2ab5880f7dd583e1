use crate::cli::{GetArgs, PutArgs};
use crate::util::{format_bytes, remote_path};
use dfsh_core::transfer::{download, upload};
use dfsh_core::FsSession;
use eyre::Result;

pub fn run_put(session: &FsSession, args: &PutArgs) -> Result<()> {
    let remote = remote_path(&args.remote)?;
    let bytes = upload(session.client(), &args.local, &remote, args.overwrite)?;
    println!(
        "Uploaded {} -> {} ({}).",
        args.local.display(),
        remote,
        format_bytes(bytes)
    );
    Ok(())
}

pub fn run_get(session: &FsSession, args: &GetArgs) -> Result<()> {
    let remote = remote_path(&args.remote)?;
    let bytes = download(session.client(), &remote, &args.local, args.overwrite)?;
    println!(
        "Downloaded {} -> {} ({}).",
        remote,
        args.local.display(),
        format_bytes(bytes)
    );
    Ok(())
}
