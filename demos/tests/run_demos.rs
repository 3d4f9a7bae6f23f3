use assert_cmd::prelude::*;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use std::process::Command;

fn is_numbered_rs(entry: &fs::DirEntry) -> bool {
    let path = entry.path();
    path.is_file()
        && path.extension() == Some(OsStr::new("rs"))
        && path
            .file_name()
            .and_then(OsStr::to_str)
            .is_some_and(|n| n.chars().next().is_some_and(|c| c.is_ascii_digit()))
}

#[test]
fn run_all_demos_with_mock() {
    let demos_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("examples");
    let entries = fs::read_dir(&demos_dir).expect("read demos dir");
    let mut found_any = false;
    for entry in entries.flatten().filter(is_numbered_rs) {
        let path = entry.path();
        let name = path
            .file_stem()
            .and_then(OsStr::to_str)
            .expect("demo name")
            .to_string();
        found_any = true;
        let mut cmd = Command::new(env!("CARGO"));
        cmd.current_dir(env!("CARGO_MANIFEST_DIR"))
            .args(["run", "--quiet", "--example", &name])
            .env("CAMBIO_DEMOS_USE_MOCK", "1");
        cmd.assert().success();
    }
    assert!(found_any, "no demos found to run");
}

#[test]
fn tracing_demo_prints_a_summary() {
    let output = Command::new(env!("CARGO"))
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .args(["run", "--quiet", "--example", "00_tracing"])
        .env("CAMBIO_DEMOS_USE_MOCK", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("run 00_tracing");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("loaded 18 days (3 entries dropped)"), "{stdout}");
    assert!(stdout.contains("1Y: "), "{stdout}");
    assert!(stdout.contains("SMA 5: "), "{stdout}");
}
