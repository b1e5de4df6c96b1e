use crate::entities::catalog::DependencyCatalog;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

const MAX_NAME_LENGTH: usize = 214;

const BLACKLISTED_NAMES: &[&str] = &["node_modules", "favicon.ico"];

/// Node.js core modules; a package may not shadow them.
const CORE_MODULES: &[&str] = &[
    "assert",
    "async_hooks",
    "buffer",
    "child_process",
    "cluster",
    "console",
    "constants",
    "crypto",
    "dgram",
    "dns",
    "domain",
    "events",
    "fs",
    "http",
    "http2",
    "https",
    "inspector",
    "module",
    "net",
    "os",
    "path",
    "perf_hooks",
    "process",
    "punycode",
    "querystring",
    "readline",
    "repl",
    "stream",
    "string_decoder",
    "sys",
    "timers",
    "tls",
    "trace_events",
    "tty",
    "url",
    "util",
    "v8",
    "vm",
    "worker_threads",
    "zlib",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleLevel {
    /// Invalid for any package.
    Error,
    /// Tolerated for legacy packages, rejected for new ones.
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameViolation {
    pub level: RuleLevel,
    pub message: String,
}

impl fmt::Display for NameViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Every rule a candidate name broke, collected in one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameReport {
    pub violations: Vec<NameViolation>,
}

impl NameReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.violations.push(NameViolation {
            level: RuleLevel::Error,
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.violations.push(NameViolation {
            level: RuleLevel::Warning,
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.violations.iter().any(|v| v.level == RuleLevel::Error)
    }

    /// New packages must be free of errors *and* warnings.
    pub fn valid_for_new_packages(&self) -> bool {
        self.violations.is_empty()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidName {
    #[error("Cannot create a project named \"{name}\" because of npm naming restrictions")]
    NamingRules { name: String, report: NameReport },

    #[error("Cannot create a project named \"{name}\" because a dependency with the same name exists")]
    DependencyCollision {
        name: String,
        /// The full sorted list of names that are not allowed.
        reserved: Vec<String>,
    },
}

/// Decides whether a project name is usable as a package identifier.
pub struct NameValidator {
    reserved: Vec<String>,
}

impl NameValidator {
    pub fn new(catalog: &DependencyCatalog) -> Self {
        Self {
            reserved: catalog.reserved_names(),
        }
    }

    pub fn validate(&self, name: &str) -> Result<(), InvalidName> {
        let report = Self::check_rules(name);
        if !report.valid_for_new_packages() {
            return Err(InvalidName::NamingRules {
                name: name.to_string(),
                report,
            });
        }

        // `reserved` is sorted, exact (case-sensitive) lookup
        if self.reserved.binary_search_by(|r| r.as_str().cmp(name)).is_ok() {
            return Err(InvalidName::DependencyCollision {
                name: name.to_string(),
                reserved: self.reserved.clone(),
            });
        }

        Ok(())
    }

    /// Applies the npm package-name grammar and reports every violation.
    pub fn check_rules(name: &str) -> NameReport {
        let mut report = NameReport::new();

        if name.is_empty() {
            report.add_error("name length must be greater than zero");
        }
        if name.starts_with('.') {
            report.add_error("name cannot start with a period");
        }
        if name.starts_with('_') {
            report.add_error("name cannot start with an underscore");
        }
        if name.trim() != name {
            report.add_error("name cannot contain leading or trailing spaces");
        }

        let lower = name.to_lowercase();
        if BLACKLISTED_NAMES.contains(&lower.as_str()) {
            report.add_error(format!("{} is a blacklisted name", lower));
        }
        if CORE_MODULES.contains(&lower.as_str()) {
            report.add_warning(format!("{} is a core module name", lower));
        }
        if name.len() > MAX_NAME_LENGTH {
            report.add_warning(format!(
                "name can no longer contain more than {} characters",
                MAX_NAME_LENGTH
            ));
        }
        if lower != name {
            report.add_warning("name can no longer contain capital letters");
        }

        let last_segment = name.rsplit('/').next().unwrap_or(name);
        if last_segment.chars().any(|c| "~'!()*".contains(c)) {
            report.add_warning("name can no longer contain special characters (\"~'!()*\")");
        }

        if !is_url_friendly(name) && !is_url_friendly_scoped(name) {
            report.add_error("name can only contain URL-friendly characters");
        }

        report
    }
}

/// True when percent-encoding would leave `s` unchanged.
fn is_url_friendly(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_ascii_alphanumeric() || "-_.!~*'()".contains(c))
}

/// `@scope/name` where both halves are URL-friendly on their own.
fn is_url_friendly_scoped(name: &str) -> bool {
    let Some(rest) = name.strip_prefix('@') else {
        return false;
    };
    let Some((scope, package)) = rest.split_once('/') else {
        return false;
    };

    !scope.is_empty()
        && !package.is_empty()
        && !package.contains('/')
        && is_url_friendly(scope)
        && is_url_friendly(package)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> NameValidator {
        NameValidator::new(&DependencyCatalog::default())
    }

    #[test]
    fn test_accepts_plain_names() {
        let v = validator();
        assert!(v.validate("my-app").is_ok());
        assert!(v.validate("proem.site").is_ok());
        assert!(v.validate("@acme/my-app").is_ok());
    }

    #[test]
    fn test_react_collides_with_dependency() {
        let err = validator().validate("react").unwrap_err();
        match err {
            InvalidName::DependencyCollision { name, reserved } => {
                assert_eq!(name, "react");
                assert!(reserved.contains(&"react-dom".to_string()));
                let mut sorted = reserved.clone();
                sorted.sort();
                assert_eq!(reserved, sorted);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_collision_is_case_sensitive() {
        // Capital letters fail the naming rules first, never the collision check
        let err = validator().validate("React").unwrap_err();
        assert!(matches!(err, InvalidName::NamingRules { .. }));
    }

    #[test]
    fn test_reports_all_violations() {
        let report = NameValidator::check_rules(".My App");
        let messages: Vec<&str> = report.violations.iter().map(|v| v.message.as_str()).collect();

        assert!(messages.contains(&"name cannot start with a period"));
        assert!(messages.contains(&"name can no longer contain capital letters"));
        assert!(messages.contains(&"name can only contain URL-friendly characters"));
        assert!(report.has_errors());
    }

    #[test]
    fn test_warnings_still_reject_new_packages() {
        let report = NameValidator::check_rules("http");
        assert!(!report.has_errors());
        assert!(!report.valid_for_new_packages());

        let err = validator().validate("it's-mine").unwrap_err();
        assert!(matches!(err, InvalidName::NamingRules { .. }));
    }

    #[test]
    fn test_length_limit() {
        let long = "a".repeat(MAX_NAME_LENGTH + 1);
        assert!(validator().validate(&long).is_err());
        let ok = "a".repeat(MAX_NAME_LENGTH);
        assert!(validator().validate(&ok).is_ok());
    }

    #[test]
    fn test_empty_and_blacklisted() {
        assert!(NameValidator::check_rules("").has_errors());
        assert!(NameValidator::check_rules("node_modules").has_errors());
        assert!(NameValidator::check_rules("_private").has_errors());
        assert!(NameValidator::check_rules(" padded").has_errors());
    }
}
