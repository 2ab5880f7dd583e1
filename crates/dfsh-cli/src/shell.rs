//! The interactive menu session.
//!
//! A line-oriented loop over an attached session: collect arguments, call
//! one operation, print a one-line outcome. Failure causes go to the
//! diagnostic log, never to the interactive output. Typing `back` at any
//! prompt cancels to the menu; prompts report that as a tagged outcome
//! rather than leaking the sentinel into the dispatch logic.

use std::io::{BufRead, Write};

use dfsh_core::{DfsPath, FsSession};
use eyre::Result;

/// What a prompt produced: an answer, or a cancellation back to the menu.
enum PromptOutcome<T> {
    Value(T),
    Cancelled,
}

use PromptOutcome::{Cancelled, Value};

pub fn run_shell(
    session: &FsSession,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<()> {
    loop {
        print_menu(output)?;
        let Some(line) = read_line(input)? else {
            break;
        };
        match line.trim().to_ascii_lowercase().as_str() {
            "1" | "upload" => handle_upload(session, input, output)?,
            "2" | "list" => handle_list(session, input, output)?,
            "3" | "download" => handle_download(session, input, output)?,
            "4" | "stats" => handle_stats(session, input, output)?,
            "5" | "delete" => handle_delete(session, input, output)?,
            "6" | "exit" => {
                writeln!(output, "Bye.")?;
                break;
            }
            "" => continue,
            other => writeln!(output, "Unknown operation '{other}', try again.")?,
        }
    }
    Ok(())
}

fn print_menu(output: &mut impl Write) -> Result<()> {
    writeln!(output)?;
    writeln!(output, "====== Remote Filesystem Menu ======")?;
    writeln!(output, "1. upload   - copy a local file into the filesystem")?;
    writeln!(output, "2. list     - render a directory tree")?;
    writeln!(output, "3. download - copy a remote file to this host")?;
    writeln!(output, "4. stats    - count files, directories and bytes")?;
    writeln!(output, "5. delete   - remove a file or directory")?;
    writeln!(output, "6. exit     - leave the shell")?;
    write!(output, "Select an operation (number or name): ")?;
    output.flush()?;
    Ok(())
}

fn handle_upload(
    session: &FsSession,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<()> {
    let Value(local) = prompt_required(input, output, "Local file path")? else {
        return cancelled(output);
    };
    let Value(remote) = prompt_remote(input, output, "Remote destination path")? else {
        return cancelled(output);
    };
    let Value(overwrite) = prompt_confirm(input, output, "Overwrite an existing destination? [y/N]")?
    else {
        return cancelled(output);
    };

    let success = session.upload(local.as_ref(), &remote, overwrite);
    writeln!(
        output,
        "{}",
        if success {
            "Upload succeeded."
        } else {
            "Upload failed; see the diagnostic log."
        }
    )?;
    Ok(())
}

fn handle_list(
    session: &FsSession,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<()> {
    let Value(path) = prompt_remote_with_default(input, output, "Remote directory to list", "/")?
    else {
        return cancelled(output);
    };

    let lines = session.list_tree(&path);
    for line in &lines {
        writeln!(output, "{line}")?;
    }
    writeln!(output, "Listing complete ({} line(s)).", lines.len())?;
    Ok(())
}

fn handle_download(
    session: &FsSession,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<()> {
    let Value(remote) = prompt_remote(input, output, "Remote file path")? else {
        return cancelled(output);
    };
    let Value(local) = prompt_required(input, output, "Local destination path")? else {
        return cancelled(output);
    };
    let Value(overwrite) = prompt_confirm(input, output, "Overwrite an existing local file? [y/N]")?
    else {
        return cancelled(output);
    };

    let success = session.download(&remote, local.as_ref(), overwrite);
    writeln!(
        output,
        "{}",
        if success {
            "Download succeeded."
        } else {
            "Download failed; see the diagnostic log."
        }
    )?;
    Ok(())
}

fn handle_stats(
    session: &FsSession,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<()> {
    let Value(path) = prompt_remote(input, output, "Remote directory to summarise")? else {
        return cancelled(output);
    };
    let stats = session.directory_stats(&path);
    writeln!(output, "Statistics: {stats}")?;
    Ok(())
}

fn handle_delete(
    session: &FsSession,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<()> {
    let Value(path) = prompt_remote(input, output, "Remote path to delete")? else {
        return cancelled(output);
    };
    let Value(recursive) =
        prompt_confirm(input, output, "Delete directories recursively? [y/N]")?
    else {
        return cancelled(output);
    };

    let success = session.delete(&path, recursive);
    writeln!(
        output,
        "{}",
        if success {
            "Delete succeeded."
        } else {
            "Delete failed; see the diagnostic log."
        }
    )?;
    Ok(())
}

fn cancelled(output: &mut impl Write) -> Result<()> {
    writeln!(output, "Back to menu.")?;
    Ok(())
}

/// Non-empty free-form answer. Re-prompts on empty input; EOF cancels.
fn prompt_required(
    input: &mut impl BufRead,
    output: &mut impl Write,
    message: &str,
) -> Result<PromptOutcome<String>> {
    loop {
        write!(output, "{message} (or 'back' to cancel): ")?;
        output.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(Cancelled);
        };
        let line = line.trim();
        if line.is_empty() {
            writeln!(output, "Input cannot be empty.")?;
            continue;
        }
        if line.eq_ignore_ascii_case("back") {
            return Ok(Cancelled);
        }
        return Ok(Value(line.to_string()));
    }
}

/// A validated remote path. Re-prompts until it parses.
fn prompt_remote(
    input: &mut impl BufRead,
    output: &mut impl Write,
    message: &str,
) -> Result<PromptOutcome<DfsPath>> {
    loop {
        match prompt_required(input, output, message)? {
            Cancelled => return Ok(Cancelled),
            Value(raw) => match DfsPath::parse(&raw) {
                Ok(path) => return Ok(Value(path)),
                Err(err) => writeln!(output, "{err}")?,
            },
        }
    }
}

/// Like `prompt_remote`, but empty input accepts `default`.
fn prompt_remote_with_default(
    input: &mut impl BufRead,
    output: &mut impl Write,
    message: &str,
    default: &str,
) -> Result<PromptOutcome<DfsPath>> {
    loop {
        write!(output, "{message} [{default}] (or 'back' to cancel): ")?;
        output.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(Cancelled);
        };
        let line = line.trim();
        if line.eq_ignore_ascii_case("back") {
            return Ok(Cancelled);
        }
        let raw = if line.is_empty() { default } else { line };
        match DfsPath::parse(raw) {
            Ok(path) => return Ok(Value(path)),
            Err(err) => writeln!(output, "{err}")?,
        }
    }
}

/// Yes/no question; empty input means no.
fn prompt_confirm(
    input: &mut impl BufRead,
    output: &mut impl Write,
    message: &str,
) -> Result<PromptOutcome<bool>> {
    write!(output, "{message} (or 'back' to cancel): ")?;
    output.flush()?;
    let Some(line) = read_line(input)? else {
        return Ok(Cancelled);
    };
    let line = line.trim().to_ascii_lowercase();
    if line == "back" {
        return Ok(Cancelled);
    }
    Ok(Value(line == "y" || line == "yes"))
}

/// One line of input without the trailing newline; `None` at end of input.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dfsh_core::connect;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn run_script(session: &FsSession, script: &str) -> String {
        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();
        run_shell(session, &mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn session_over(export: &std::path::Path) -> FsSession {
        connect(&export.display().to_string()).unwrap()
    }

    #[test]
    fn exit_by_number_and_by_name() {
        let tmp = tempdir().unwrap();
        let session = session_over(tmp.path());
        assert!(run_script(&session, "6\n").contains("Bye."));
        assert!(run_script(&session, "exit\n").contains("Bye."));
    }

    #[test]
    fn unknown_choice_reprompts() {
        let tmp = tempdir().unwrap();
        let session = session_over(tmp.path());
        let out = run_script(&session, "frobnicate\n6\n");
        assert!(out.contains("Unknown operation 'frobnicate'"));
        assert!(out.contains("Bye."));
    }

    #[test]
    fn list_renders_tree_and_completion_line() {
        let tmp = tempdir().unwrap();
        fs::create_dir(tmp.path().join("docs")).unwrap();
        fs::write(tmp.path().join("docs/readme.md"), b"hi").unwrap();
        let session = session_over(tmp.path());

        // list with default root, then exit
        let out = run_script(&session, "2\n\n6\n");
        assert!(out.contains("└── docs/"));
        assert!(out.contains("    └── readme.md"));
        assert!(out.contains("Listing complete (3 line(s))."));
    }

    #[test]
    fn stats_line_uses_report_format() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("a.bin"), vec![0u8; 10]).unwrap();
        let session = session_over(tmp.path());

        let out = run_script(&session, "4\n/\n6\n");
        assert!(out.contains("Statistics: files=1, directories=1, size=10 bytes"));
    }

    #[test]
    fn back_cancels_to_menu_from_any_prompt() {
        let tmp = tempdir().unwrap();
        let session = session_over(tmp.path());

        let out = run_script(&session, "1\nback\n5\n/x\nback\n6\n");
        assert_eq!(out.matches("Back to menu.").count(), 2);
        assert!(out.contains("Bye."));
    }

    #[test]
    fn upload_then_download_round_trip() {
        let tmp = tempdir().unwrap();
        let export = tmp.path().join("export");
        fs::create_dir(&export).unwrap();
        let source = tmp.path().join("note.txt");
        fs::write(&source, b"hello").unwrap();
        let fetched_dir = tmp.path().join("out");
        fs::create_dir(&fetched_dir).unwrap();
        let session = session_over(&export);

        let script = format!(
            "1\n{}\n/notes/note.txt\n\n3\n/notes/note.txt\n{}/\n\n6\n",
            source.display(),
            fetched_dir.display()
        );
        let out = run_script(&session, &script);
        assert!(out.contains("Upload succeeded."));
        assert!(out.contains("Download succeeded."));
        assert_eq!(fs::read(fetched_dir.join("note.txt")).unwrap(), b"hello");
    }

    #[test]
    fn failed_delete_reports_failure_line() {
        let tmp = tempdir().unwrap();
        let session = session_over(tmp.path());

        let out = run_script(&session, "5\n/ghost\n\n6\n");
        assert!(out.contains("Delete failed; see the diagnostic log."));
    }

    #[test]
    fn invalid_remote_path_reprompts() {
        let tmp = tempdir().unwrap();
        let session = session_over(tmp.path());

        let out = run_script(&session, "4\nrelative\n/\n6\n");
        assert!(out.contains("remote path must be absolute"));
        assert!(out.contains("Statistics:"));
    }

    #[test]
    fn empty_input_at_required_prompt_reprompts() {
        let tmp = tempdir().unwrap();
        let session = session_over(tmp.path());

        let out = run_script(&session, "1\n\nback\n6\n");
        assert!(out.contains("Input cannot be empty."));
        assert!(out.contains("Back to menu."));
    }
}
