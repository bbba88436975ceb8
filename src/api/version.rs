// Version pinning for datasets that upstream stopped publishing.

/// Last version that still publishes the rune and mastery datasets.
pub const LEGACY_CUTOVER_VERSION: &str = "7.23.1";

/// Used when the realm bootstrap fails.
pub const FALLBACK_VERSION: &str = "9.10.1";
pub const FALLBACK_LANGUAGE: &str = "en_US";

/// Version and locale pair fixed for the lifetime of a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionState {
    pub version: String,
    pub language: String,
}

impl VersionState {
    pub fn new(version: impl Into<String>, language: impl Into<String>) -> Self {
        VersionState {
            version: version.into(),
            language: language.into(),
        }
    }

    pub fn fallback() -> Self {
        VersionState::new(FALLBACK_VERSION, FALLBACK_LANGUAGE)
    }
}

/// Whether `endpoint` addresses one of the discontinued datasets.
pub fn is_legacy_endpoint(endpoint: &str) -> bool {
    endpoint.contains("rune") || endpoint.contains("mastery")
}

/// Compares dot-separated numeric versions component-wise. The first differing
/// component decides; a non-numeric component reports "not greater".
pub fn version_greater_than(v1: &str, v2: &str) -> bool {
    for (a, b) in v1.split('.').zip(v2.split('.')) {
        let (a, b) = match (a.parse::<u64>(), b.parse::<u64>()) {
            (Ok(a), Ok(b)) => (a, b),
            _ => return false,
        };
        if a != b {
            return a > b;
        }
    }
    false
}

/// Picks the version string to address for `endpoint`.
pub fn resolve<'a>(requested: &'a str, endpoint: &str) -> &'a str {
    if is_legacy_endpoint(endpoint) && version_greater_than(requested, LEGACY_CUTOVER_VERSION) {
        LEGACY_CUTOVER_VERSION
    } else {
        requested
    }
}
