//! Integration test: the binary's non-interactive flags

use std::process::Command;

#[test]
fn binary_prints_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_patternkit"))
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(
        stdout.contains(env!("CARGO_PKG_VERSION")),
        "Expected output to contain version '{}', but got: {}",
        env!("CARGO_PKG_VERSION"),
        stdout
    );
}

#[test]
fn binary_lists_stories_without_a_terminal() {
    let output = Command::new(env!("CARGO_BIN_EXE_patternkit"))
        .arg("--list-stories")
        .output()
        .expect("Failed to execute binary");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert_eq!(stdout.lines().count(), 10, "got: {stdout}");
    for id in ["collection", "file-tree", "lightbox", "feed", "shell"] {
        assert!(
            stdout.lines().any(|line| line.starts_with(id)),
            "missing story '{id}' in: {stdout}"
        );
    }
}

#[test]
fn binary_rejects_unknown_view_mode() {
    let output = Command::new(env!("CARGO_BIN_EXE_patternkit"))
        .args(["--view-mode", "carousel"])
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("carousel"), "got: {stderr}");
}
