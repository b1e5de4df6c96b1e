use super::parser::TemplateSpec;
use crate::system::workspace::normalize;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Base name of every first-party template package.
pub const DEFAULT_TEMPLATE: &str = "cpuia-template";

const LOCAL_FILE_PREFIX: &str = "file:";
const SCHEME_SEPARATOR: &str = "://";
const ARCHIVE_SUFFIXES: &[&str] = &[".tgz", ".tar.gz"];

/// A single argument a package manager's install command accepts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateIdentifier(String);

impl TemplateIdentifier {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Default for TemplateIdentifier {
    fn default() -> Self {
        Self(DEFAULT_TEMPLATE.to_string())
    }
}

impl fmt::Display for TemplateIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which resolution rule applied to a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Default,
    LocalPath,
    DirectFetch,
    AlreadyPrefixed,
    ScopeShorthand,
    Prefixed,
    Unparsed,
}

/// Turns a user-supplied template reference into an install target.
pub struct TemplateResolver;

impl TemplateResolver {
    pub fn resolve(reference: Option<&str>, original_cwd: &Path) -> TemplateIdentifier {
        Self::resolve_with_rule(reference, original_cwd).0
    }

    pub fn resolve_with_rule(
        reference: Option<&str>,
        original_cwd: &Path,
    ) -> (TemplateIdentifier, Resolution) {
        let reference = match reference {
            Some(r) if !r.is_empty() => r,
            _ => return (TemplateIdentifier::default(), Resolution::Default),
        };

        if let Some(path) = reference.strip_prefix(LOCAL_FILE_PREFIX) {
            let absolute = normalize(&original_cwd.join(path));
            return (
                TemplateIdentifier(format!("{}{}", LOCAL_FILE_PREFIX, absolute.display())),
                Resolution::LocalPath,
            );
        }

        if reference.contains(SCHEME_SEPARATOR) || is_archive(reference) {
            return (
                TemplateIdentifier(reference.to_string()),
                Resolution::DirectFetch,
            );
        }

        match TemplateSpec::parse(reference) {
            Some(spec) => Self::decide(&spec),
            None => (
                TemplateIdentifier(reference.to_string()),
                Resolution::Unparsed,
            ),
        }
    }

    /// Decision table over the parsed parts. Order matters: a name that already
    /// carries the base prefix must never be prefixed a second time.
    pub fn decide(spec: &TemplateSpec) -> (TemplateIdentifier, Resolution) {
        let base = DEFAULT_TEMPLATE;
        let name = spec.name();
        let prefixed = format!("{}-", base);

        if name == base || name.starts_with(&prefixed) {
            return (
                TemplateIdentifier(format!("{}{}{}", spec.scope(), name, spec.version())),
                Resolution::AlreadyPrefixed,
            );
        }

        if spec.version.is_some() && spec.scope.is_none() && spec.name.is_none() {
            return (
                TemplateIdentifier(format!("{}/{}", spec.version(), base)),
                Resolution::ScopeShorthand,
            );
        }

        if spec.name.is_none() {
            // `@scope/` or `@scope/@tag`: the scope's copy of the base template
            return (
                TemplateIdentifier(format!("{}{}{}", spec.scope(), base, spec.version())),
                Resolution::ScopeShorthand,
            );
        }

        (
            TemplateIdentifier(format!(
                "{}{}{}{}",
                spec.scope(),
                prefixed,
                name,
                spec.version()
            )),
            Resolution::Prefixed,
        )
    }
}

fn is_archive(reference: &str) -> bool {
    ARCHIVE_SUFFIXES
        .iter()
        .any(|suffix| reference.len() > suffix.len() && reference.ends_with(suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(reference: &str) -> String {
        TemplateResolver::resolve(Some(reference), Path::new("/home/dev/projects")).into_string()
    }

    #[test]
    fn test_default_ignores_cwd() {
        let a = TemplateResolver::resolve(None, Path::new("/a"));
        let b = TemplateResolver::resolve(Some(""), Path::new("/somewhere/else"));
        assert_eq!(a.as_str(), DEFAULT_TEMPLATE);
        assert_eq!(a, b);
    }

    #[test]
    fn test_local_file_is_absolute() {
        assert_eq!(
            resolve("file:../my-template"),
            "file:/home/dev/my-template"
        );
        assert_eq!(resolve("file:/opt/tpl"), "file:/opt/tpl");
        assert_eq!(resolve("file:./tpl"), "file:/home/dev/projects/tpl");
    }

    #[test]
    fn test_direct_fetch_passthrough() {
        let url = "https://example.com/cpuia-template-0.8.2.tgz";
        assert_eq!(resolve(url), url);
        assert_eq!(resolve("git+ssh://host/repo"), "git+ssh://host/repo");
        assert_eq!(resolve("my-template.tar.gz"), "my-template.tar.gz");
        // a bare suffix is not an archive
        assert_eq!(resolve(".tgz"), "cpuia-template-.tgz");
    }

    #[test]
    fn test_already_prefixed_passes_through() {
        assert_eq!(resolve("cpuia-template"), "cpuia-template");
        assert_eq!(resolve("cpuia-template-custom"), "cpuia-template-custom");
        assert_eq!(
            resolve("@acme/cpuia-template-custom@1.0.0"),
            "@acme/cpuia-template-custom@1.0.0"
        );
    }

    #[test]
    fn test_short_names_get_prefixed() {
        assert_eq!(resolve("custom"), "cpuia-template-custom");
        assert_eq!(resolve("@acme/custom"), "@acme/cpuia-template-custom");
        assert_eq!(resolve("custom@next"), "cpuia-template-custom@next");
        // a name merely containing the base is still prefixed
        assert_eq!(resolve("my-cpuia-template"), "cpuia-template-my-cpuia-template");
    }

    #[test]
    fn test_scope_only_shorthand() {
        assert_eq!(resolve("@acme"), "@acme/cpuia-template");
        assert_eq!(resolve("@acme/"), "@acme/cpuia-template");
        assert_eq!(resolve("@acme/@next"), "@acme/cpuia-template@next");
    }

    #[test]
    fn test_rule_reported() {
        let (_, rule) = TemplateResolver::resolve_with_rule(Some("custom"), Path::new("/"));
        assert_eq!(rule, Resolution::Prefixed);
        let (id, rule) = TemplateResolver::resolve_with_rule(Some("custom@"), Path::new("/"));
        assert_eq!(rule, Resolution::Unparsed);
        assert_eq!(id.as_str(), "custom@");
    }
}
