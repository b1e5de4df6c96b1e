use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Everything a single bootstrap run was asked to do.
///
/// Built once from validated CLI input and never mutated afterwards; fields are
/// only reachable through getters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRequest {
    name: String,
    root_path: PathBuf,
    verbose: bool,
    dev_mode: bool,
    template_ref: Option<String>,
    use_npm: bool,
    use_pnp: bool,
    offline: bool,
}

impl ProjectRequest {
    /// `root_path` must be absolute; the project name is its final component.
    pub fn new(root_path: impl Into<PathBuf>) -> Self {
        let root_path = root_path.into();
        let name = root_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            name,
            root_path,
            verbose: false,
            dev_mode: false,
            template_ref: None,
            use_npm: false,
            use_pnp: false,
            offline: false,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_dev_mode(mut self, dev_mode: bool) -> Self {
        self.dev_mode = dev_mode;
        self
    }

    pub fn with_template(mut self, template_ref: Option<String>) -> Self {
        self.template_ref = template_ref.filter(|t| !t.is_empty());
        self
    }

    pub fn with_npm(mut self, use_npm: bool) -> Self {
        self.use_npm = use_npm;
        self
    }

    pub fn with_pnp(mut self, use_pnp: bool) -> Self {
        self.use_pnp = use_pnp;
        self
    }

    pub fn with_offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn dev_mode(&self) -> bool {
        self.dev_mode
    }

    pub fn template_ref(&self) -> Option<&str> {
        self.template_ref.as_deref()
    }

    pub fn use_npm(&self) -> bool {
        self.use_npm
    }

    pub fn use_pnp(&self) -> bool {
        self.use_pnp
    }

    pub fn offline(&self) -> bool {
        self.offline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_root_basename() {
        let request = ProjectRequest::new("/tmp/work/my-app");
        assert_eq!(request.name(), "my-app");
        assert_eq!(request.root_path(), Path::new("/tmp/work/my-app"));
    }

    #[test]
    fn test_empty_template_is_dropped() {
        let request = ProjectRequest::new("/tmp/my-app").with_template(Some(String::new()));
        assert_eq!(request.template_ref(), None);
    }
}
