//! Advisory document parsing and validation.

use crate::error::{AdvisoryDiffError, ErrorContext, LoadErrorKind, Result};
use crate::model::Document;
use std::collections::HashSet;
use std::path::Path;

/// Maximum advisory document size (16 MB).
pub const MAX_DOCUMENT_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Parse and validate an advisory document from YAML content.
pub fn parse_document_str(content: &str) -> Result<Document> {
    if !super::is_advisory_document(content) {
        return Err(AdvisoryDiffError::not_advisory_document("<string>"));
    }
    let document: Document = serde_yaml::from_str(content)?;
    validate_document(&document)?;
    Ok(document)
}

/// Parse and validate an advisory document file.
pub fn parse_document(path: &Path) -> Result<Document> {
    check_document_size(path)?;
    let content = std::fs::read_to_string(path).map_err(|e| AdvisoryDiffError::io(path, e))?;
    parse_document_str(&content).with_context(|| format!("parsing {}", path.display()))
}

/// Reject files larger than [`MAX_DOCUMENT_FILE_SIZE`] before reading them.
pub(super) fn check_document_size(path: &Path) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| AdvisoryDiffError::io(path, e))?;
    if metadata.len() > MAX_DOCUMENT_FILE_SIZE {
        return Err(AdvisoryDiffError::validation(format!(
            "{} is {} MB, exceeding the {} MB limit",
            path.display(),
            metadata.len() / (1024 * 1024),
            MAX_DOCUMENT_FILE_SIZE / (1024 * 1024),
        )));
    }
    Ok(())
}

/// Check the invariants the diff engine relies on.
///
/// Advisory identifiers must be non-empty and unique within the document.
pub fn validate_document(document: &Document) -> Result<()> {
    let mut seen = HashSet::with_capacity(document.advisories.len());
    for advisory in &document.advisories {
        if advisory.id.trim().is_empty() {
            return Err(AdvisoryDiffError::missing_field(
                "id",
                format!("advisory in package {}", document.name()),
            ));
        }
        if !seen.insert(advisory.id.as_str()) {
            return Err(AdvisoryDiffError::load(
                "validating document",
                LoadErrorKind::DuplicateAdvisory {
                    package: document.name().to_string(),
                    id: advisory.id.clone(),
                },
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EventType, Timestamp};

    const KO: &str = r"
schema-version: 2.0.1
package:
  name: ko
advisories:
  - id: CVE-2023-24535
    aliases:
      - GHSA-2222-2222-2222
    events:
      - timestamp: 1970-01-01T00:00:00Z
        type: true-positive-determination
      - timestamp: 1970-01-02T00:00:00Z
        type: fixed
        data:
          fixed-version: 0.15.1-r0
";

    #[test]
    fn test_parse_document() {
        let doc = parse_document_str(KO).expect("valid document");
        assert_eq!(doc.name(), "ko");
        assert_eq!(doc.schema_version, "2.0.1");

        let advisory = doc.advisory("CVE-2023-24535").expect("advisory present");
        assert!(advisory.aliases.contains("GHSA-2222-2222-2222"));
        assert_eq!(advisory.events.len(), 2);
        assert_eq!(advisory.events[0].timestamp, Timestamp::epoch());
        assert_eq!(
            advisory.events[0].event_type,
            EventType::TruePositiveDetermination
        );
        assert_eq!(advisory.events[1].timestamp, Timestamp::epoch().plus_days(1));
        let data = advisory.events[1].data.as_ref().expect("fixed data");
        assert_eq!(data.fixed_version.as_deref(), Some("0.15.1-r0"));
    }

    #[test]
    fn test_parse_document_without_advisories() {
        let doc = parse_document_str("schema-version: 2.0.1\npackage:\n  name: ko\n")
            .expect("valid document");
        assert_eq!(doc.advisory_count(), 0);
    }

    #[test]
    fn test_rejects_non_advisory_content() {
        let err = parse_document_str("package:\n  name: ko\n  version: 1.0.0\n").unwrap_err();
        assert!(matches!(err, AdvisoryDiffError::Parse { .. }));
    }

    #[test]
    fn test_rejects_unknown_event_type() {
        let content = "schema-version: 2.0.1\npackage:\n  name: ko\nadvisories:\n  - id: CVE-1\n    events:\n      - timestamp: 1970-01-01T00:00:00Z\n        type: exploded\n";
        assert!(parse_document_str(content).is_err());
    }

    #[test]
    fn test_rejects_duplicate_advisory_ids() {
        let content = "schema-version: 2.0.1\npackage:\n  name: ko\nadvisories:\n  - id: CVE-1\n  - id: CVE-1\n";
        let err = parse_document_str(content).unwrap_err();
        assert!(matches!(
            err,
            AdvisoryDiffError::Load {
                source: LoadErrorKind::DuplicateAdvisory { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_empty_advisory_id() {
        let content = "schema-version: 2.0.1\npackage:\n  name: ko\nadvisories:\n  - id: ''\n";
        assert!(parse_document_str(content).is_err());
    }
}
