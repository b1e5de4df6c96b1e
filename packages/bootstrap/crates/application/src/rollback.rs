use crate::context::RunContext;
use domain::entities::artifacts::GeneratedArtifactSet;
use domain::system::workspace;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// What a rollback left behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollbackReport {
    pub removed: Vec<String>,
    /// Entries still in the project root, sorted by name.
    pub remaining: Vec<String>,
    pub root_removed: bool,
}

impl RollbackReport {
    pub fn is_complete(&self) -> bool {
        self.remaining.is_empty()
    }
}

/// Best-effort cleanup of a failed bootstrap.
///
/// Never fails: anything that cannot be removed shows up in `remaining`.
pub struct Rollback;

impl Rollback {
    pub fn run(
        root: &Path,
        artifacts: &GeneratedArtifactSet,
        ctx: &mut RunContext,
    ) -> RollbackReport {
        let mut report = RollbackReport::default();

        let entries = match workspace::list_entries(root) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!("Nothing to roll back in {}: {}", root.display(), e);
                return report;
            }
        };

        for name in entries.iter().filter(|n| artifacts.contains(OsStr::new(n))) {
            tracing::info!("Deleting generated file {}", name);
            match workspace::remove_entry(&root.join(name)) {
                Ok(()) => report.removed.push(name.clone()),
                Err(e) => tracing::debug!("Could not delete {}: {}", name, e),
            }
        }

        report.remaining = match workspace::list_entries(root) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!("Could not re-read {}: {}", root.display(), e);
                return report;
            }
        };

        if report.remaining.is_empty() {
            let outcome = fs::remove_dir(root);
            Self::record_root_removal(&mut report, root, outcome, ctx);
        }

        report
    }

    /// A root that could not be deleted is itself left for manual removal.
    fn record_root_removal(
        report: &mut RollbackReport,
        root: &Path,
        outcome: io::Result<()>,
        ctx: &mut RunContext,
    ) {
        let parent = root
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("/"));

        match outcome {
            Ok(()) => {
                tracing::info!("Deleted {} from {}", dir_name(root), parent.display());
                report.root_removed = true;
                ctx.set_working_dir(parent);
            }
            Err(e) => {
                tracing::warn!("Could not delete {}: {}", root.display(), e);
                report.remaining.push(format!("{}/", dir_name(root)));
            }
        }
    }
}

fn dir_name(root: &Path) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}
