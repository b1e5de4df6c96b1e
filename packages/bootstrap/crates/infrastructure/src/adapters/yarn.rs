use super::run_command;
use domain::backend::{BackendKind, YARN_BINARY};
use domain::ports::package_manager::{InstallOptions, InstallOutcome, PackageError, PackageManager};

pub struct YarnAdapter;

impl YarnAdapter {
    pub fn new() -> Self {
        Self
    }

    /// `add --exact [--offline] [--enable-pnp] <packages> [--dev] --cwd <root> [--verbose]`
    ///
    /// `--cwd` is passed explicitly so yarn never resolves the project from the
    /// shell's directory.
    pub fn build_args(packages: &[String], options: &InstallOptions) -> Vec<String> {
        let mut args = vec!["add".to_string()];
        if options.exact {
            args.push("--exact".to_string());
        }
        if options.offline {
            args.push("--offline".to_string());
        }
        if options.pnp {
            args.push("--enable-pnp".to_string());
        }
        args.extend(packages.iter().cloned());

        if options.dev {
            args.push("--dev".to_string());
        }
        args.push("--cwd".to_string());
        args.push(options.cwd.display().to_string());

        if options.verbose {
            args.push("--verbose".to_string());
        }
        args
    }
}

impl Default for YarnAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageManager for YarnAdapter {
    fn kind(&self) -> BackendKind {
        BackendKind::Yarn
    }

    fn install(
        &self,
        packages: &[String],
        options: &InstallOptions,
    ) -> Result<InstallOutcome, PackageError> {
        let args = Self::build_args(packages, options);
        run_command(YARN_BINARY, &args, &options.cwd)
    }
}
