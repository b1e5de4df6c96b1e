use domain::errors::BootstrapWarning;
use std::io;
use std::path::{Path, PathBuf};

/// Per-run state threaded through every step instead of process globals.
///
/// The process working directory is never changed; components read
/// `working_dir` and pass it explicitly to spawned commands.
#[derive(Debug, Clone)]
pub struct RunContext {
    original_cwd: PathBuf,
    working_dir: PathBuf,
    warnings: Vec<BootstrapWarning>,
}

impl RunContext {
    pub fn new(original_cwd: impl Into<PathBuf>) -> Self {
        let original_cwd = original_cwd.into();
        Self {
            working_dir: original_cwd.clone(),
            original_cwd,
            warnings: Vec::new(),
        }
    }

    /// Captures the directory the process was started from.
    pub fn from_process() -> io::Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    /// Where the user invoked the tool; relative template paths resolve here.
    pub fn original_cwd(&self) -> &Path {
        &self.original_cwd
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    pub fn set_working_dir(&mut self, dir: impl Into<PathBuf>) {
        self.working_dir = dir.into();
        tracing::debug!("Working directory is now {}", self.working_dir.display());
    }

    pub fn warn(&mut self, warning: BootstrapWarning) {
        tracing::warn!("{}", warning);
        self.warnings.push(warning);
    }

    pub fn extend_warnings(&mut self, warnings: impl IntoIterator<Item = BootstrapWarning>) {
        self.warnings.extend(warnings);
    }

    pub fn warnings(&self) -> &[BootstrapWarning] {
        &self.warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_working_dir_starts_at_original() {
        let mut ctx = RunContext::new("/home/dev");
        assert_eq!(ctx.working_dir(), Path::new("/home/dev"));

        ctx.set_working_dir("/home/dev/my-app");
        assert_eq!(ctx.working_dir(), Path::new("/home/dev/my-app"));
        assert_eq!(ctx.original_cwd(), Path::new("/home/dev"));
    }

    #[test]
    fn test_warnings_accumulate() {
        let mut ctx = RunContext::new("/");
        ctx.warn(BootstrapWarning::Offline);
        ctx.extend_warnings(vec![BootstrapWarning::PnpNotOnNpm]);
        assert_eq!(
            ctx.warnings(),
            &[BootstrapWarning::Offline, BootstrapWarning::PnpNotOnNpm]
        );
    }
}
