use domain::ports::version_probe::VersionProbe;
use std::process::Command;

/// Runs `<tool> --version` from `PATH`.
pub struct CommandVersionProbe;

impl CommandVersionProbe {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CommandVersionProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionProbe for CommandVersionProbe {
    fn probe(&self, tool: &str) -> Option<String> {
        let program = which::which(tool).ok()?;

        let output = Command::new(program).arg("--version").output().ok()?;
        if !output.status.success() {
            tracing::debug!("`{} --version` exited with {}", tool, output.status);
            return None;
        }

        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if version.is_empty() {
            None
        } else {
            Some(version)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tool_is_unavailable() {
        let probe = CommandVersionProbe::new();
        assert_eq!(probe.probe("definitely-not-a-real-tool-4f1c"), None);
    }
}
