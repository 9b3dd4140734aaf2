//! CLI binary integration tests.
//!
//! These tests exercise the compiled `keyring2pass` binary to verify that
//! command routing, help text, and usage errors work as expected. None of
//! them reach the keyring.

use std::process::Command;

fn keyring2pass_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_keyring2pass"))
}

#[test]
fn test_cli_version() {
    let output = keyring2pass_cmd()
        .arg("--version")
        .output()
        .expect("failed to run keyring2pass");
    assert!(output.status.success(), "--version should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains(env!("CARGO_PKG_VERSION")),
        "version output should contain the package version, got: {}",
        stdout
    );
}

#[test]
fn test_cli_help() {
    let output = keyring2pass_cmd()
        .arg("--help")
        .output()
        .expect("failed to run keyring2pass");
    assert!(output.status.success(), "--help should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("import"),
        "help output should mention 'import', got: {}",
        stdout
    );
    assert!(
        stdout.contains("list"),
        "help output should mention 'list', got: {}",
        stdout
    );
}

#[test]
fn test_cli_import_help() {
    let output = keyring2pass_cmd()
        .args(["import", "--help"])
        .output()
        .expect("failed to run keyring2pass import --help");
    assert!(output.status.success(), "import --help should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--prefix", "--overwrite", "--log", "--skiplog", "--do-not-ask"] {
        assert!(
            stdout.contains(flag),
            "import help should mention {}, got: {}",
            flag,
            stdout
        );
    }
}

#[test]
fn test_cli_unknown_command() {
    let output = keyring2pass_cmd()
        .arg("export")
        .output()
        .expect("failed to run keyring2pass");
    assert!(
        !output.status.success(),
        "unknown command should return non-zero exit code"
    );
}

#[test]
fn test_cli_invalid_config_fails_before_keyring() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = dir.path().join("config.json5");
    std::fs::write(&config, r#"{ pass_bin: "" }"#).unwrap();

    let output = keyring2pass_cmd()
        .args(["list", "--config"])
        .arg(&config)
        .output()
        .expect("failed to run keyring2pass list");
    assert!(!output.status.success(), "invalid config should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("pass_bin"),
        "error should name the bad field, got: {}",
        stderr
    );
}

#[test]
fn test_cli_missing_config_file_fails() {
    let output = keyring2pass_cmd()
        .args(["list", "--config", "/nonexistent/keyring2pass.json5"])
        .output()
        .expect("failed to run keyring2pass list");
    assert!(!output.status.success());
}
