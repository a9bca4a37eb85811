//! Exclusion pattern behavior over real trees.

use super::test_utils::{expected_manifest, generate_structure, scan_lines, write_tree};
use tempfile::TempDir;

fn generated() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    generate_structure(temp_dir.path(), 0, 3);
    temp_dir
}

fn base_name(line: &str) -> &str {
    let path = line.split(" : ").next().unwrap();
    path.rsplit('/').next().unwrap()
}

#[test]
fn test_exclude_extension() {
    let temp_dir = generated();
    let lines = scan_lines(temp_dir.path(), "*.txt");

    assert_eq!(lines, expected_manifest(temp_dir.path(), "*.txt"));
    assert_eq!(lines.len(), 14);
    assert!(lines.iter().all(|l| !base_name(l).ends_with(".txt")));
}

#[test]
fn test_exclude_prefix_pattern_matching_nothing() {
    let temp_dir = generated();
    let lines = scan_lines(temp_dir.path(), "a*.txt");

    assert_eq!(lines, expected_manifest(temp_dir.path(), ""));
}

#[test]
fn test_single_period_pattern_excludes_nothing() {
    let temp_dir = generated();
    assert_eq!(
        scan_lines(temp_dir.path(), "."),
        expected_manifest(temp_dir.path(), "")
    );
}

#[test]
fn test_star_excludes_all_but_hidden_entries() {
    let temp_dir = generated();
    write_tree(
        temp_dir.path(),
        &[(".hidden", b"h"), (".cache/.data", b"d"), (".cache/visible", b"v")],
    );

    let lines = scan_lines(temp_dir.path(), "*");
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with(".cache/.data : "));
    assert!(lines[1].starts_with(".hidden : "));
}

#[test]
fn test_excluded_directory_prunes_subtree() {
    let temp_dir = generated();
    let lines = scan_lines(temp_dir.path(), "dir_0_*");

    // Only the three root-level files survive.
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|l| !l.contains('/')));
    assert_eq!(lines, expected_manifest(temp_dir.path(), "dir_0_*"));
}

#[test]
fn test_nested_directory_pruned_at_any_depth() {
    let temp_dir = generated();
    let lines = scan_lines(temp_dir.path(), "dir_1_0");

    assert!(lines.iter().all(|l| !l.contains("dir_1_0/")));
    assert!(lines.iter().any(|l| l.contains("dir_1_1/")));
    assert_eq!(lines, expected_manifest(temp_dir.path(), "dir_1_0"));
}

#[test]
fn test_pattern_matches_base_name_not_path() {
    let temp_dir = TempDir::new().unwrap();
    write_tree(temp_dir.path(), &[("sub/file.txt", b"x"), ("file.txt", b"y")]);

    // A path-shaped pattern never matches a bare name.
    assert_eq!(
        scan_lines(temp_dir.path(), "sub/file.txt"),
        expected_manifest(temp_dir.path(), "")
    );
}

#[test]
fn test_hidden_files_need_literal_dot() {
    let temp_dir = TempDir::new().unwrap();
    write_tree(
        temp_dir.path(),
        &[(".env.txt", b"secret"), ("notes.txt", b"notes"), ("keep.md", b"k")],
    );

    let lines = scan_lines(temp_dir.path(), "*.txt");
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with(".env.txt : "));
    assert!(lines[1].starts_with("keep.md : "));

    let lines = scan_lines(temp_dir.path(), ".*");
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| !l.starts_with('.')));
}
