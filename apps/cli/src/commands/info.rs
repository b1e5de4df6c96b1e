use crate::ui::Theme;
use proem_bootstrap::domain::system::PlatformDetector;
use proem_bootstrap::domain::VersionProbe;
use proem_bootstrap::infrastructure::CommandVersionProbe;
use std::io;

const BINARIES: &[(&str, &str)] = &[("Node", "node"), ("npm", "npm"), ("Yarn", "yarnpkg")];

/// Prints environment debug info (`--info`).
pub struct InfoCommand;

impl InfoCommand {
    pub fn execute() -> io::Result<()> {
        Self::print(&CommandVersionProbe::new())
    }

    pub fn print(probe: &dyn VersionProbe) -> io::Result<()> {
        println!("{}", Theme::bold("\nEnvironment Info:"));
        println!(
            "\n  current version of {}: {}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        );

        let exe = std::env::current_exe()?;
        let location = exe.parent().unwrap_or(exe.as_path());
        println!("  running from {}", location.display());

        let platform = PlatformDetector::detect();
        println!("\n  System:");
        println!("    OS: {} {}", platform.os, platform.os_version);
        println!("    CPU: {}", platform.arch);
        if let Some(kernel) = &platform.kernel_version {
            println!("    Kernel: {}", kernel);
        }

        println!("  Binaries:");
        for (label, tool) in BINARIES {
            let version = probe
                .probe(tool)
                .unwrap_or_else(|| Theme::muted("Not Found"));
            println!("    {}: {}", label, version);
        }

        Ok(())
    }
}
