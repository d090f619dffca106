use assert_cmd::Command;
use predicates::prelude::*;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("explorer-launcher").unwrap();
    cmd.env_remove("XDG_CURRENT_DESKTOP");
    cmd
}

#[test]
fn dry_run_prints_fallback_command() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("doc.txt");
    std::fs::write(&file, "contents").unwrap();

    let output = cli()
        .args(["--dry-run", "--select", "--platform", "linux"])
        .arg(&file)
        .output()
        .unwrap();

    assert!(output.status.success());
    let preview: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(preview["program"], "xdg-open");
    assert_eq!(preview["args"][0], dir.path().to_string_lossy().as_ref());
    assert_eq!(preview["ignoreExitCode"], false);
}

#[test]
fn dry_run_honors_desktop_override() {
    let dir = tempfile::tempdir().unwrap();

    cli()
        .args(["--dry-run", "--platform", "linux", "--desktop", "kde"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"program\":\"dolphin\""));
}

#[test]
fn missing_path_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();

    cli()
        .arg("--dry-run")
        .arg(dir.path().join("missing"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to access the specified path"));
}

#[test]
fn unsupported_platform_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();

    cli()
        .args(["--platform", "haiku"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported platform: haiku"));
}
