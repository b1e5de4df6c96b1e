use domain::safety::{ConflictingEntry, DirectorySafetyChecker};
use domain::system::workspace::list_entries;
use std::fs;

#[test]
fn test_allowed_entries_are_safe_and_logs_removed() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    fs::create_dir(root.join(".git")).unwrap();
    fs::write(root.join("README.md"), "# hi").unwrap();
    fs::write(root.join("my-app.iml"), "").unwrap();
    fs::write(root.join("npm-debug.log"), "old").unwrap();
    fs::write(root.join("yarn-error.log.1"), "old").unwrap();

    let verdict = DirectorySafetyChecker::check(root).unwrap();
    assert!(verdict.safe);
    assert!(verdict.conflicting_entries.is_empty());

    assert_eq!(
        list_entries(root).unwrap(),
        vec![".git", "README.md", "my-app.iml"]
    );
}

#[test]
fn test_check_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("LICENSE"), "MIT").unwrap();
    fs::write(root.join("yarn-debug.log"), "old").unwrap();

    assert!(DirectorySafetyChecker::check(root).unwrap().safe);
    let after_first = list_entries(root).unwrap();

    assert!(DirectorySafetyChecker::check(root).unwrap().safe);
    assert_eq!(list_entries(root).unwrap(), after_first);
}

#[test]
fn test_unsafe_directory_is_left_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir(root.join("src")).unwrap();
    fs::write(root.join("package.json"), "{}").unwrap();
    fs::write(root.join("npm-debug.log"), "old").unwrap();

    let verdict = DirectorySafetyChecker::check(root).unwrap();
    assert!(!verdict.safe);
    assert_eq!(
        verdict.conflicting_entries,
        vec![
            ConflictingEntry {
                name: "package.json".into(),
                is_directory: false,
            },
            ConflictingEntry {
                name: "src".into(),
                is_directory: true,
            },
        ]
    );

    // the error log survives for inspection
    assert!(root.join("npm-debug.log").exists());
}
