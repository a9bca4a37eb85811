//! Tests for the `mangen` binary: stdout carries only the manifest,
//! diagnostics go to stderr, exit status reflects root validity.

use super::test_utils::{expected_manifest, generate_structure, sorted_lines, write_tree};
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn mangen(config_home: &Path) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_mangen"));
    command
        .env("XDG_CONFIG_HOME", config_home)
        .env_remove("MANGEN_LOG")
        .env_remove("MANGEN_LOG_FORMAT")
        .env_remove("MANGEN_LOG_MODULES")
        .env_remove("MANGEN_SCAN__EXCLUDE");
    command
}

fn stdout_lines(output: &Output) -> Vec<String> {
    sorted_lines(&String::from_utf8_lossy(&output.stdout))
}

#[test]
fn test_manifest_on_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("root");
    std::fs::create_dir(&root).unwrap();
    generate_structure(&root, 0, 2);

    let output = mangen(temp_dir.path()).arg(&root).output().unwrap();

    assert!(
        output.status.success(),
        "mangen should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(stdout_lines(&output), expected_manifest(&root, ""));
    assert!(output.stderr.is_empty());
}

#[test]
fn test_exclusion_flag() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("root");
    std::fs::create_dir(&root).unwrap();
    generate_structure(&root, 0, 2);

    for pattern in ["*.txt", "a*.txt", ".", "*"] {
        let output = mangen(temp_dir.path())
            .arg(&root)
            .arg("-e")
            .arg(pattern)
            .output()
            .unwrap();

        assert!(output.status.success(), "pattern {:?} failed", pattern);
        assert_eq!(
            stdout_lines(&output),
            expected_manifest(&root, pattern),
            "pattern {:?}",
            pattern
        );
    }
}

#[test]
fn test_default_root_warns_on_stderr() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("root");
    write_tree(&root, &[("a.txt", b"hello")]);

    let output = mangen(temp_dir.path()).current_dir(&root).output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec!["a.txt : 2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"]
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.starts_with("WARN: DIR_PATH was not provided"),
        "stderr={:?}",
        stderr
    );
}

#[test]
fn test_missing_root_fails() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing");

    let output = mangen(temp_dir.path()).arg(&missing).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("ERROR: Could not read directory"));
}

#[test]
fn test_file_root_fails() {
    let temp_dir = TempDir::new().unwrap();
    write_tree(temp_dir.path(), &[("plain.txt", b"x")]);

    let output = mangen(temp_dir.path())
        .arg(temp_dir.path().join("plain.txt"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_fnmatch_only_patterns_scan_normally() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("root");
    write_tree(
        &root,
        &[("[", b"bracket"), ("*.txt", b"star"), ("abc", b"abc"), ("keep.log", b"keep")],
    );

    for (pattern, excluded) in [("[", "["), ("\\*.txt", "*.txt"), ("a**", "abc")] {
        let output = mangen(temp_dir.path())
            .arg(&root)
            .args(["-e", pattern])
            .output()
            .unwrap();

        assert!(output.status.success(), "pattern {:?} failed", pattern);
        let lines = stdout_lines(&output);
        assert_eq!(lines.len(), 3, "pattern {:?}", pattern);
        assert!(
            lines.iter().all(|l| !l.starts_with(&format!("{} : ", excluded))),
            "pattern {:?} kept {:?}",
            pattern,
            excluded
        );
    }
}

#[cfg(unix)]
#[test]
fn test_unreadable_directory_reported_but_scan_succeeds() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("root");
    write_tree(&root, &[("ok.txt", b"ok"), ("locked/secret.txt", b"s")]);
    let locked = root.join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let output = mangen(temp_dir.path()).arg(&root).output().unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("ok.txt : "));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: Could not open directory"), "stderr={:?}", stderr);
}

#[test]
fn test_quiet_suppresses_diagnostics() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("root");
    write_tree(&root, &[("a.txt", b"hello")]);

    let output = mangen(temp_dir.path())
        .current_dir(&root)
        .arg("--quiet")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(output.stderr.is_empty());
    assert_eq!(stdout_lines(&output).len(), 1);
}

#[test]
fn test_log_file_receives_diagnostics() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("root");
    write_tree(&root, &[("a.txt", b"hello")]);
    let log_file = temp_dir.path().join("logs").join("mangen.log");

    let output = mangen(temp_dir.path())
        .current_dir(&root)
        .arg("--log-file")
        .arg(&log_file)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(output.stderr.is_empty());
    let logged = std::fs::read_to_string(&log_file).unwrap();
    assert!(logged.contains("WARN: DIR_PATH was not provided"));
}

#[test]
fn test_version_flag() {
    let temp_dir = TempDir::new().unwrap();
    let output = mangen(temp_dir.path()).arg("-v").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "MANGEN Version 1.0\n");
}

#[test]
fn test_config_file_sets_exclusion() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("root");
    write_tree(&root, &[("a.txt", b"hello"), ("b.log", b"world")]);
    let config = temp_dir.path().join("mangen.toml");
    std::fs::write(&config, "[scan]\nexclude = \"*.log\"\n").unwrap();

    let output = mangen(temp_dir.path())
        .arg(&root)
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), expected_manifest(&root, "*.log"));
}
