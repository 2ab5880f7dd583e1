//! Drives the compiled `dfsh` binary through a scripted interactive session
//! against a temporary export directory.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::Duration;

use tempfile::tempdir;
use wait_timeout::ChildExt;

struct ChildGuard {
    child: Option<std::process::Child>,
}

impl ChildGuard {
    fn new(child: std::process::Child) -> Self {
        Self { child: Some(child) }
    }

    fn into_output_with_timeout(mut self, timeout: Duration) -> std::process::Output {
        let mut child = self.child.take().expect("child already taken");
        match child.wait_timeout(timeout).expect("wait for dfsh") {
            Some(_status) => child.wait_with_output().expect("collect dfsh output"),
            None => {
                let _ = child.kill();
                let output = child
                    .wait_with_output()
                    .expect("collect output after killing dfsh");
                panic!(
                    "dfsh timed out after {:?}\nstdout:\n{}\nstderr:\n{}",
                    timeout,
                    String::from_utf8_lossy(&output.stdout),
                    String::from_utf8_lossy(&output.stderr)
                );
            }
        }
    }
}

impl Drop for ChildGuard {
    fn drop(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

fn dfsh_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_dfsh"))
}

fn run_session(export: &std::path::Path, script: &str) -> std::process::Output {
    let mut child = Command::new(dfsh_bin())
        .arg("--fs")
        .arg(export)
        .arg("shell")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn dfsh");

    child
        .stdin
        .take()
        .expect("dfsh stdin")
        .write_all(script.as_bytes())
        .expect("write session script");

    ChildGuard::new(child).into_output_with_timeout(Duration::from_secs(30))
}

#[test]
fn scripted_session_lists_counts_and_exits() {
    let tmp = tempdir().unwrap();
    let export = tmp.path().join("export");
    fs::create_dir_all(export.join("a/b")).unwrap();
    fs::write(export.join("a/x.txt"), b"0123456789").unwrap();
    fs::write(export.join("a/b/y.txt"), b"01234").unwrap();

    // list /a, stats /a, exit
    let output = run_session(&export, "2\n/a\n4\n/a\n6\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("/a/"), "missing root line:\n{stdout}");
    assert!(stdout.contains("├── b/"), "missing subtree line:\n{stdout}");
    assert!(stdout.contains("│   └── y.txt"), "missing nested line:\n{stdout}");
    assert!(stdout.contains("└── x.txt"), "missing leaf line:\n{stdout}");
    assert!(
        stdout.contains("Statistics: files=2, directories=2, size=15 bytes"),
        "missing stats line:\n{stdout}"
    );
    assert!(stdout.contains("Bye."));
}

#[test]
fn scripted_session_uploads_and_deletes() {
    let tmp = tempdir().unwrap();
    let export = tmp.path().join("export");
    fs::create_dir(&export).unwrap();
    let source = tmp.path().join("payload.txt");
    fs::write(&source, b"payload").unwrap();

    let script = format!(
        "1\n{}\n/inbox/payload.txt\n\n5\n/inbox\ny\n6\n",
        source.display()
    );
    let output = run_session(&export, &script);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("Upload succeeded."), "{stdout}");
    assert!(stdout.contains("Delete succeeded."), "{stdout}");
    assert!(!export.join("inbox").exists());
}

#[test]
fn one_shot_du_reports_totals() {
    let tmp = tempdir().unwrap();
    let export = tmp.path().join("export");
    fs::create_dir(&export).unwrap();
    fs::write(export.join("f.bin"), vec![7u8; 2048]).unwrap();

    let output = Command::new(dfsh_bin())
        .arg("--fs")
        .arg(&export)
        .arg("du")
        .arg("/")
        .arg("--json")
        .output()
        .expect("run dfsh du");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let row: serde_json::Value = serde_json::from_str(stdout.trim()).expect("du json");
    assert_eq!(row["files"], 1);
    assert_eq!(row["dirs"], 1);
    assert_eq!(row["bytes"], 2048);
}

#[test]
fn unknown_scheme_fails_at_startup() {
    let output = Command::new(dfsh_bin())
        .arg("--fs")
        .arg("hdfs://namenode:9000")
        .arg("ls")
        .arg("/")
        .output()
        .expect("run dfsh ls");
    assert!(!output.status.success());
}
