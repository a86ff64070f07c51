use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use image::{Rgba, RgbaImage};
use pretty_assertions::assert_eq;
use tempfile::{tempdir, TempDir};

fn appicon(cwd: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_appicon"));
    cmd.current_dir(cwd).env_remove("APPICON_LOG");
    cmd
}

fn write_png(dir: &TempDir, name: &str, edge: u32) -> PathBuf {
    let path = dir.path().join(name);
    RgbaImage::from_pixel(edge, edge, Rgba([12, 34, 56, 255]))
        .save(&path)
        .unwrap();
    path
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_valid_source_exits_zero_with_json_report() {
    let dir = tempdir().unwrap();
    write_png(&dir, "icon.png", 1024);

    let output = appicon(dir.path())
        .args(["icon.png", "-o", "Out.appiconset", "--json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["generated"], 13);
    assert_eq!(report["total"], 13);
    assert_eq!(report["failures"], serde_json::json!([]));
    assert!(dir.path().join("Out.appiconset/Contents.json").exists());
    assert!(stderr(&output).contains("Finished"));
}

#[test]
fn test_too_small_source_exits_one() {
    let dir = tempdir().unwrap();
    write_png(&dir, "small.png", 512);

    let output = appicon(dir.path())
        .args(["small.png", "-o", "Out.appiconset"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let text = stderr(&output);
    assert!(text.contains("512x512"), "{}", text);
    assert!(text.contains("appicon::validate::too_small"), "{}", text);
    assert!(output.stdout.is_empty());
    assert!(!dir.path().join("Out.appiconset").exists());
}

#[test]
fn test_closed_stdin_at_prompt_exits_130() {
    let dir = tempdir().unwrap();

    let output = appicon(dir.path())
        .stdin(Stdio::null())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(130));
    assert!(stderr(&output).contains("Operation cancelled by user"));
}

#[test]
fn test_empty_answer_at_prompt_exits_one() {
    use std::io::Write;

    let dir = tempdir().unwrap();
    let mut child = appicon(dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"\n").unwrap();

    let output = child.wait_with_output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("No input file provided"));
}

#[cfg(unix)]
#[test]
fn test_interrupt_at_prompt_exits_130() {
    use std::io::Read;

    let dir = tempdir().unwrap();
    let mut child = appicon(dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // The handler is installed before the prompt is printed.
    let mut err = child.stderr.take().unwrap();
    let mut seen = Vec::new();
    let mut byte = [0u8; 1];
    while !seen.ends_with(b"Path: ") {
        let n = err.read(&mut byte).unwrap();
        assert!(n > 0, "prompt never appeared: {}", String::from_utf8_lossy(&seen));
        seen.push(byte[0]);
    }

    let killed = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(killed.success());

    let mut rest = String::new();
    err.read_to_string(&mut rest).unwrap();
    let status = child.wait().unwrap();

    assert_eq!(status.code(), Some(130));
    assert!(rest.contains("Operation cancelled by user"), "{}", rest);
}
