use crate::system::workspace;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Entries that version control, editors and docs tooling leave behind.
const ALLOWED_ENTRIES: &[&str] = &[
    ".DS_Store",
    ".git",
    ".gitattributes",
    ".gitignore",
    ".gitlab-ci.yml",
    ".hg",
    ".hgcheck",
    ".hgignore",
    ".idea",
    ".npmignore",
    ".travis.yml",
    "docs",
    "LICENSE",
    "README.md",
    "mkdocs.yml",
    "Thumbs.db",
];

/// IntelliJ module files are created before the tool runs.
const MODULE_FILE_SUFFIX: &str = ".iml";

/// Logs from a previous failed run; tolerated and cleaned up.
const ERROR_LOG_PREFIXES: &[&str] = &["npm-debug.log", "yarn-error.log", "yarn-debug.log"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictingEntry {
    pub name: String,
    pub is_directory: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyVerdict {
    pub safe: bool,
    pub conflicting_entries: Vec<ConflictingEntry>,
}

/// Decides whether an existing directory can host a new project.
pub struct DirectorySafetyChecker;

impl DirectorySafetyChecker {
    /// Creates `root` when missing, then partitions its entries.
    ///
    /// Only a safe verdict has a side effect: leftover error logs are removed.
    pub fn check(root: &Path) -> io::Result<SafetyVerdict> {
        fs::create_dir_all(root)?;

        let names = workspace::list_entries(root)?;

        let conflicting_entries: Vec<ConflictingEntry> = names
            .iter()
            .filter(|name| !Self::is_tolerated(name))
            .map(|name| ConflictingEntry {
                name: name.clone(),
                is_directory: fs::symlink_metadata(root.join(name))
                    .map(|m| m.is_dir())
                    .unwrap_or(false),
            })
            .collect();

        if !conflicting_entries.is_empty() {
            return Ok(SafetyVerdict {
                safe: false,
                conflicting_entries,
            });
        }

        for name in names.iter().filter(|n| Self::is_error_log(n)) {
            tracing::debug!("Removing log from a previous run: {}", name);
            workspace::remove_entry(&root.join(name))?;
        }

        Ok(SafetyVerdict {
            safe: true,
            conflicting_entries: Vec::new(),
        })
    }

    pub fn is_tolerated(name: &str) -> bool {
        ALLOWED_ENTRIES.contains(&name)
            || name.ends_with(MODULE_FILE_SUFFIX)
            || Self::is_error_log(name)
    }

    pub fn is_error_log(name: &str) -> bool {
        ERROR_LOG_PREFIXES.iter().any(|p| name.starts_with(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert!(DirectorySafetyChecker::is_tolerated(".git"));
        assert!(DirectorySafetyChecker::is_tolerated("project.iml"));
        assert!(DirectorySafetyChecker::is_tolerated("npm-debug.log.12345"));
        assert!(DirectorySafetyChecker::is_tolerated("yarn-error.log"));
        assert!(!DirectorySafetyChecker::is_tolerated("src"));
        assert!(!DirectorySafetyChecker::is_tolerated("package.json"));
        // prefix match, not substring match
        assert!(!DirectorySafetyChecker::is_tolerated("old-npm-debug.log"));
    }

    #[test]
    fn test_missing_directory_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("fresh");

        let verdict = DirectorySafetyChecker::check(&root).unwrap();
        assert!(verdict.safe);
        assert!(root.is_dir());
    }
}
