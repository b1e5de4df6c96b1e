/// Asks a tool for its version, e.g. by running `<tool> --version`.
pub trait VersionProbe {
    /// Trimmed version output, or `None` when the tool is unavailable.
    fn probe(&self, tool: &str) -> Option<String>;
}
