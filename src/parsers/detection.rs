//! Advisory document detection.
//!
//! Directories of advisory documents usually sit next to other YAML files
//! (package build configs, CI definitions). Before full parsing, each
//! candidate is checked for the two fields every advisory document carries.

use serde::Deserialize;

/// Minimal view of a document used only to decide what kind of file it is.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct DocumentCheck {
    #[serde(default)]
    schema_version: Option<String>,
    #[serde(default)]
    package: Option<PackageCheck>,
}

#[derive(Debug, Default, Deserialize)]
struct PackageCheck {
    #[serde(default)]
    name: Option<String>,
}

impl DocumentCheck {
    fn is_advisory_document(&self) -> bool {
        let has_name = self
            .package
            .as_ref()
            .and_then(|p| p.name.as_deref())
            .is_some_and(|n| !n.trim().is_empty());
        let has_version = self
            .schema_version
            .as_deref()
            .is_some_and(|v| !v.trim().is_empty());
        has_name && has_version
    }
}

/// Whether `content` looks like an advisory document.
///
/// Content that is not valid YAML, or lacks a non-empty `package.name` or
/// `schema-version`, is not an advisory document. This never errors.
#[must_use]
pub fn is_advisory_document(content: &str) -> bool {
    serde_yaml::from_str::<DocumentCheck>(content)
        .is_ok_and(|check| check.is_advisory_document())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_advisory_document() {
        let content = "schema-version: 2.0.1\npackage:\n  name: ko\nadvisories: []\n";
        assert!(is_advisory_document(content));
    }

    #[test]
    fn test_rejects_missing_package_name() {
        assert!(!is_advisory_document("schema-version: 2.0.1\npackage: {}\n"));
        assert!(!is_advisory_document("schema-version: 2.0.1\n"));
    }

    #[test]
    fn test_rejects_empty_schema_version() {
        assert!(!is_advisory_document("schema-version: ''\npackage:\n  name: ko\n"));
    }

    #[test]
    fn test_rejects_build_config() {
        let melange = "package:\n  name: ko\n  version: 0.15.1\n  epoch: 0\npipeline:\n  - uses: fetch\n";
        assert!(!is_advisory_document(melange));
    }

    #[test]
    fn test_rejects_invalid_yaml() {
        assert!(!is_advisory_document("package: [unterminated"));
        assert!(!is_advisory_document(""));
        assert!(!is_advisory_document("- just\n- a list\n"));
    }
}
