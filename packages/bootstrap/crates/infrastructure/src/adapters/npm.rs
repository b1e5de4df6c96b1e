use super::run_command;
use domain::backend::{BackendKind, NPM_BINARY};
use domain::ports::package_manager::{InstallOptions, InstallOutcome, PackageError, PackageManager};
use std::fs;
use std::path::Path;
use std::process::Command;

/// Line in `npm config list` output naming the directory npm runs in.
const CWD_PREFIX: &str = "; cwd = ";

pub struct NpmAdapter;

impl NpmAdapter {
    pub fn new() -> Self {
        Self
    }

    /// `install --save-exact --loglevel error <packages> [--save-dev] [--verbose]`
    pub fn build_args(packages: &[String], options: &InstallOptions) -> Vec<String> {
        let mut args = vec!["install".to_string()];
        if options.exact {
            args.push("--save-exact".to_string());
        }
        args.push("--loglevel".to_string());
        args.push("error".to_string());
        args.extend(packages.iter().cloned());

        if options.dev {
            args.push("--save-dev".to_string());
        }
        if options.verbose {
            args.push("--verbose".to_string());
        }
        args
    }

    /// The working directory npm reports, if the config listing names one.
    pub fn reported_cwd(config_list: &str) -> Option<&str> {
        config_list
            .lines()
            .find_map(|line| line.strip_prefix(CWD_PREFIX))
            .map(str::trim_end)
    }

    /// npm reports the physical directory, so symlinks are resolved on both
    /// sides. Falls back to a plain comparison when either path cannot be.
    pub fn same_directory(reported: &Path, cwd: &Path) -> bool {
        match (fs::canonicalize(reported), fs::canonicalize(cwd)) {
            (Ok(a), Ok(b)) => a == b,
            _ => reported == cwd,
        }
    }
}

impl Default for NpmAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageManager for NpmAdapter {
    fn kind(&self) -> BackendKind {
        BackendKind::Npm
    }

    fn install(
        &self,
        packages: &[String],
        options: &InstallOptions,
    ) -> Result<InstallOutcome, PackageError> {
        if options.pnp {
            tracing::warn!("npm doesn't support Plug'n'Play, falling back to regular installs");
        }
        let args = Self::build_args(packages, options);
        run_command(NPM_BINARY, &args, &options.cwd)
    }

    /// A misconfigured shell can start npm in a different directory than the
    /// one it was spawned in; installing would then target the wrong project.
    fn preflight(&self, cwd: &Path) -> Result<(), PackageError> {
        let Ok(program) = which::which(NPM_BINARY) else {
            return Ok(());
        };
        let output = match Command::new(program)
            .args(["config", "list"])
            .current_dir(cwd)
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                tracing::debug!("Skipping npm cwd check: {}", e);
                return Ok(());
            }
        };

        let listing = String::from_utf8_lossy(&output.stdout);
        match Self::reported_cwd(&listing) {
            Some(reported) if !Self::same_directory(Path::new(reported), cwd) => Err(PackageError::WrongDirectory {
                cwd: cwd.to_path_buf(),
                reason: format!(
                    "a newly started npm process runs in {}. This is probably caused by a misconfigured system terminal shell.",
                    reported
                ),
            }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn packages() -> Vec<String> {
        vec!["react".to_string(), "redux".to_string()]
    }

    #[test]
    fn test_runtime_args() {
        let options = InstallOptions::runtime("/tmp/app");
        assert_eq!(
            NpmAdapter::build_args(&packages(), &options).join(" "),
            "install --save-exact --loglevel error react redux"
        );
    }

    #[test]
    fn test_dev_verbose_args() {
        let options = InstallOptions {
            dev: true,
            verbose: true,
            ..InstallOptions::runtime("/tmp/app")
        };
        assert_eq!(
            NpmAdapter::build_args(&packages(), &options).join(" "),
            "install --save-exact --loglevel error react redux --save-dev --verbose"
        );
    }

    #[test]
    fn test_reported_cwd() {
        let listing = "; cli configs\nuser-agent = \"npm/9\"\n; cwd = /home/dev/app\n; HOME = /home/dev\n";
        assert_eq!(NpmAdapter::reported_cwd(listing), Some("/home/dev/app"));
        assert_eq!(NpmAdapter::reported_cwd("; nothing here"), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_root_matches_physical_cwd() {
        let dir = tempfile::tempdir().unwrap();
        let real = dir.path().join("real");
        std::fs::create_dir_all(real.join("my-app")).unwrap();
        std::os::unix::fs::symlink(&real, dir.path().join("link")).unwrap();

        let root = dir.path().join("link").join("my-app");
        let physical = std::fs::canonicalize(&root).unwrap();
        let listing = format!("; cli configs\n; cwd = {}\n", physical.display());
        let reported = NpmAdapter::reported_cwd(&listing).unwrap();

        assert!(NpmAdapter::same_directory(Path::new(reported), &root));
    }

    #[test]
    fn test_different_directory_is_detected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("a")).unwrap();
        std::fs::create_dir_all(dir.path().join("b")).unwrap();

        assert!(!NpmAdapter::same_directory(&dir.path().join("a"), &dir.path().join("b")));
        // Paths that do not exist are compared as written
        assert!(NpmAdapter::same_directory(Path::new("/no/such/dir"), Path::new("/no/such/dir")));
        assert!(!NpmAdapter::same_directory(Path::new("/no/such/a"), Path::new("/no/such/b")));
    }
}
