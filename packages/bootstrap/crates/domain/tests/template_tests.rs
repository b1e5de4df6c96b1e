use domain::template::{Resolution, TemplateResolver, DEFAULT_TEMPLATE};
use std::path::Path;

const REFERENCES: &[&str] = &[
    "custom",
    "@acme/custom",
    "custom@1.2.3",
    "@acme/custom@next",
    "cpuia-template",
    "cpuia-template-typescript@0.8.2",
    "@acme",
    "@acme/@beta",
];

#[test]
fn test_resolution_is_stable() {
    let cwd = Path::new("/work");
    for reference in REFERENCES {
        let once = TemplateResolver::resolve(Some(reference), cwd);
        let twice = TemplateResolver::resolve(Some(once.as_str()), cwd);
        assert_eq!(once, twice, "{} resolved differently the second time", reference);
    }
}

#[test]
fn test_every_registry_name_carries_the_base() {
    for reference in REFERENCES {
        let (id, rule) = TemplateResolver::resolve_with_rule(Some(reference), Path::new("/"));
        assert_ne!(rule, Resolution::Unparsed);
        assert!(
            id.as_str().contains(DEFAULT_TEMPLATE),
            "{} resolved to {}",
            reference,
            id
        );
    }
}

#[test]
fn test_default_does_not_depend_on_cwd() {
    for cwd in ["/", "/tmp", "/home/dev/projects/deep/nested"] {
        assert_eq!(
            TemplateResolver::resolve(None, Path::new(cwd)).as_str(),
            DEFAULT_TEMPLATE
        );
    }
}
