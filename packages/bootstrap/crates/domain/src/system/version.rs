use semver::Version;

/// Extracts a semantic version from `--version` style output.
///
/// Handles `v1.2.3`, `tool 1.2.3`, two-part versions (`1.2` becomes `1.2.0`)
/// and nightly builds such as `1.22.0-20200101.1200`, which are cut at the
/// first `-` or `+` when the full string is not valid semver.
pub fn parse_tool_version(output: &str) -> Option<Version> {
    for line in output.lines() {
        for word in line.split_whitespace() {
            let clean = word.trim_start_matches('v').trim_matches(',');

            if let Ok(version) = Version::parse(clean) {
                return Some(version);
            }

            if let Some(idx) = clean.find(['-', '+']) {
                if idx > 0 {
                    if let Ok(version) = Version::parse(&clean[..idx]) {
                        return Some(version);
                    }
                }
            }

            if clean.matches('.').count() == 1 {
                if let Ok(version) = Version::parse(&format!("{}.0", clean)) {
                    return Some(version);
                }
            }
        }
    }

    None
}
