use std::fmt;

/// A template reference split into `(@scope/)?(name)?(@version)?`.
///
/// `scope` keeps its leading `@` and trailing `/`, `version` keeps its leading
/// `@`, so the parts concatenate back into the original reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateSpec {
    pub scope: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
}

impl TemplateSpec {
    /// Returns `None` when the reference does not fit the grammar
    /// (a dangling `@` with nothing after it).
    pub fn parse(reference: &str) -> Option<Self> {
        let mut rest = reference;
        let mut spec = TemplateSpec::default();

        if let Some(after_at) = rest.strip_prefix('@') {
            if let Some(slash) = after_at.find('/') {
                if slash > 0 {
                    let end = slash + 2;
                    spec.scope = Some(rest[..end].to_string());
                    rest = &rest[end..];
                }
            }
        }

        let name_end = rest.find('@').unwrap_or(rest.len());
        if name_end > 0 {
            spec.name = Some(rest[..name_end].to_string());
        }
        rest = &rest[name_end..];

        if !rest.is_empty() {
            if rest.len() < 2 {
                return None;
            }
            spec.version = Some(rest.to_string());
        }

        Some(spec)
    }

    pub fn scope(&self) -> &str {
        self.scope.as_deref().unwrap_or("")
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn version(&self) -> &str {
        self.version.as_deref().unwrap_or("")
    }
}

impl fmt::Display for TemplateSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.scope(), self.name(), self.version())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name() {
        let spec = TemplateSpec::parse("typescript").unwrap();
        assert_eq!(spec.scope, None);
        assert_eq!(spec.name.as_deref(), Some("typescript"));
        assert_eq!(spec.version, None);
    }

    #[test]
    fn test_scope_name_version() {
        let spec = TemplateSpec::parse("@acme/typescript@1.2.0").unwrap();
        assert_eq!(spec.scope.as_deref(), Some("@acme/"));
        assert_eq!(spec.name.as_deref(), Some("typescript"));
        assert_eq!(spec.version.as_deref(), Some("@1.2.0"));
        assert_eq!(spec.to_string(), "@acme/typescript@1.2.0");
    }

    #[test]
    fn test_version_only() {
        let spec = TemplateSpec::parse("@acme").unwrap();
        assert_eq!(spec.scope, None);
        assert_eq!(spec.name, None);
        assert_eq!(spec.version.as_deref(), Some("@acme"));
    }

    #[test]
    fn test_scope_without_name() {
        let spec = TemplateSpec::parse("@acme/@next").unwrap();
        assert_eq!(spec.scope.as_deref(), Some("@acme/"));
        assert_eq!(spec.name, None);
        assert_eq!(spec.version.as_deref(), Some("@next"));
    }

    #[test]
    fn test_dangling_at_is_rejected() {
        assert_eq!(TemplateSpec::parse("name@"), None);
    }
}
