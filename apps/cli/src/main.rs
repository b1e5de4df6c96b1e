mod commands;
mod core;
mod ui;

use clap::Parser;
use commands::create::CreateCommand;
use commands::info::InfoCommand;
use dotenv::dotenv;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::core::config::UserConfig;
use crate::core::error::CliError;

#[derive(Parser, Debug)]
#[command(name = "create-proem-app", version)]
#[command(about = "Creates a new proem application", long_about = None)]
struct Cli {
    /// Where to create the project; its name becomes the package name
    #[arg(value_name = "project-directory")]
    project_directory: Option<PathBuf>,

    /// Print additional logs
    #[arg(long)]
    verbose: bool,

    /// Also install development dependencies
    #[arg(long)]
    dev: bool,

    /// Print environment debug info
    #[arg(long)]
    info: bool,

    /// Install with npm even when yarn is available
    #[arg(long)]
    use_npm: bool,

    /// Enable Yarn Plug'n'Play
    #[arg(long)]
    use_pnp: bool,

    /// Install from the local Yarn cache only (ignored with npm)
    #[arg(long)]
    offline: bool,

    /// A template package, a `file:` path or an archive URL
    #[arg(long, value_name = "path-to-template")]
    template: Option<String>,
}

impl Cli {
    /// Command-line flags layered over the user's config defaults.
    fn into_create(self, config: &UserConfig) -> Result<CreateCommand, CliError> {
        let defaults = &config.defaults;
        let project_directory = self
            .project_directory
            .ok_or(CliError::MissingProjectDirectory)?;

        Ok(CreateCommand {
            project_directory,
            verbose: self.verbose || defaults.verbose,
            dev: self.dev || defaults.dev,
            use_npm: self.use_npm || defaults.use_npm,
            use_pnp: self.use_pnp || defaults.use_pnp,
            offline: self.offline || defaults.offline,
            template: self.template.or_else(|| defaults.template.clone()),
        })
    }
}

fn init_tracing(verbose: bool) {
    // cliclack already prints warnings; tracing stays quiet unless asked
    let fallback = if verbose { "debug" } else { "error" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli, config: anyhow::Result<UserConfig>) -> Result<ExitCode, CliError> {
    let config = config.map_err(|e| CliError::Config(format!("{:#}", e)))?;

    if cli.info {
        InfoCommand::execute()?;
        return Ok(ExitCode::SUCCESS);
    }

    cli.into_create(&config)?.execute().await
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    let cli = Cli::parse();
    let config = UserConfig::load();

    let verbose = cli.verbose || config.as_ref().map(|c| c.defaults.verbose).unwrap_or(false);
    init_tracing(verbose);

    match run(cli, config).await {
        Ok(code) => code,
        Err(e) => {
            e.render();
            e.exit_code()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Defaults;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("create-proem-app").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_flags_parse() {
        let cli = parse(&["my-app", "--use-npm", "--use-pnp", "--template", "file:../tpl"]);
        assert_eq!(cli.project_directory, Some(PathBuf::from("my-app")));
        assert!(cli.use_npm);
        assert!(cli.use_pnp);
        assert_eq!(cli.template.as_deref(), Some("file:../tpl"));
    }

    #[test]
    fn test_missing_directory() {
        let err = parse(&["--dev"])
            .into_create(&UserConfig::default())
            .unwrap_err();
        assert!(matches!(err, CliError::MissingProjectDirectory));
    }

    #[test]
    fn test_config_fills_unset_flags() {
        let config = UserConfig {
            defaults: Defaults {
                use_npm: true,
                template: Some("typescript".into()),
                ..Defaults::default()
            },
        };

        let cmd = parse(&["my-app", "--template", "minimal"])
            .into_create(&config)
            .unwrap();
        assert!(cmd.use_npm);
        assert!(!cmd.dev);
        assert_eq!(cmd.template.as_deref(), Some("minimal"));

        let cmd = parse(&["my-app"]).into_create(&config).unwrap();
        assert_eq!(cmd.template.as_deref(), Some("typescript"));
    }
}
