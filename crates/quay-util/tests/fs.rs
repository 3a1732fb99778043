use quay_util::fs::{ensure_dir, expand_home, find_ancestor_with, write_atomic};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_find_ancestor_with_in_parent() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("Quay.toml"), "").unwrap();
    let nested = tmp.path().join("a").join("b");
    fs::create_dir_all(&nested).unwrap();

    let found = find_ancestor_with(&nested, "Quay.toml").unwrap();
    assert_eq!(found, tmp.path());
}

#[test]
fn test_find_ancestor_with_missing() {
    let tmp = TempDir::new().unwrap();
    assert!(find_ancestor_with(tmp.path(), "definitely-not-here.toml").is_none());
}

#[test]
fn test_ensure_dir_creates_nested() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("x").join("y");
    ensure_dir(&dir).unwrap();
    assert!(dir.is_dir());
    ensure_dir(&dir).unwrap();
}

#[test]
fn test_write_atomic_creates_parents_and_overwrites() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("io/example/widget/1.0/widget-1.0.jar");

    write_atomic(&path, b"first").unwrap();
    write_atomic(&path, b"second").unwrap();

    assert_eq!(fs::read(&path).unwrap(), b"second");
}

#[test]
fn test_expand_home_leaves_absolute_paths() {
    assert_eq!(
        expand_home("/opt/m2/repository"),
        std::path::PathBuf::from("/opt/m2/repository")
    );
}

#[test]
fn test_expand_home_tilde_prefix() {
    let expanded = expand_home("~/.m2/repository");
    assert!(expanded.ends_with(".m2/repository"));
    assert!(!expanded.starts_with("~"));
}
