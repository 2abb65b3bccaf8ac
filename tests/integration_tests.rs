//! Integration tests for advisory-diff
//!
//! These tests load real advisory directories from disk and verify the
//! diff engine's output for each kind of change.

use advisory_diff::{
    Advisory, DiffEngine, DiffResult, Document, DocumentDiffResult, Event, EventType, Index,
    IndexDiffResult, Timestamp, index_diff,
    parsers::{load_index, load_packages},
};
use std::path::{Path, PathBuf};

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

/// Fixed "current" time used by the fixtures: 2023-11-11T00:00:00Z.
const NOW: i64 = 1_699_660_800;

fn case_dir(case: &str, side: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join("diff").join(case).join(side)
}

fn load_case(case: &str) -> (Index, Index) {
    let a = load_index(&case_dir(case, "a")).expect("Failed to load old side");
    let b = load_index(&case_dir(case, "b")).expect("Failed to load new side");
    (a.index, b.index)
}

fn diff_case(case: &str) -> IndexDiffResult {
    let (a, b) = load_case(case);
    DiffEngine::new().diff(&a, &b)
}

fn tp(timestamp: Timestamp) -> Event {
    Event::new(timestamp, EventType::TruePositiveDetermination)
}

fn ko() -> Document {
    Document::new("ko").with_schema_version("2.0.1")
}

// ============================================================================
// Fixture Cases
// ============================================================================

mod fixture_cases {
    use super::*;

    #[test]
    fn test_same() {
        let result = diff_case("same");
        assert_eq!(result, IndexDiffResult::default());
        assert!(result.is_empty());
    }

    #[test]
    fn test_added_document() {
        let expected = IndexDiffResult {
            added: vec![ko().with_advisory(
                Advisory::new("CVE-2023-24535").with_event(tp(Timestamp::from_unix(NOW))),
            )],
            ..IndexDiffResult::default()
        };
        assert_eq!(diff_case("added-document"), expected);
    }

    #[test]
    fn test_removed_document() {
        let expected = IndexDiffResult {
            removed: vec![ko().with_advisory(
                Advisory::new("CVE-2023-24535").with_event(tp(Timestamp::epoch())),
            )],
            ..IndexDiffResult::default()
        };
        assert_eq!(diff_case("removed-document"), expected);
    }

    #[test]
    fn test_added_advisory() {
        let expected = IndexDiffResult {
            modified: vec![DocumentDiffResult {
                added: vec![
                    Advisory::new("CVE-2023-11111").with_event(tp(Timestamp::from_unix(NOW))),
                ],
                ..DocumentDiffResult::new("ko")
            }],
            ..IndexDiffResult::default()
        };
        assert_eq!(diff_case("added-advisory"), expected);
    }

    #[test]
    fn test_removed_advisory() {
        let expected = IndexDiffResult {
            modified: vec![DocumentDiffResult {
                removed: vec![Advisory::new("CVE-2023-11111").with_event(tp(Timestamp::epoch()))],
                ..DocumentDiffResult::new("ko")
            }],
            ..IndexDiffResult::default()
        };
        assert_eq!(diff_case("removed-advisory"), expected);
    }

    #[test]
    fn test_modified_advisory_outside_of_events() {
        let expected = IndexDiffResult {
            modified: vec![DocumentDiffResult {
                modified: vec![DiffResult {
                    id: "CVE-2023-24535".to_string(),
                    added: Advisory::new("CVE-2023-24535").with_event(tp(Timestamp::epoch())),
                    removed: Advisory::new("CVE-2023-24535")
                        .with_alias("GHSA-2222-2222-2222")
                        .with_event(tp(Timestamp::epoch())),
                    added_events: vec![],
                    removed_events: vec![],
                }],
                ..DocumentDiffResult::new("ko")
            }],
            ..IndexDiffResult::default()
        };

        let result = diff_case("modified-advisory-outside-of-events");
        assert_eq!(result, expected);
        assert!(result.modified[0].modified[0].aliases_changed());
        assert!(!result.modified[0].modified[0].has_event_changes());
    }

    #[test]
    fn test_added_event() {
        let expected = IndexDiffResult {
            modified: vec![DocumentDiffResult {
                modified: vec![DiffResult {
                    id: "CVE-2023-11111".to_string(),
                    added: Advisory::new("CVE-2023-11111")
                        .with_event(tp(Timestamp::epoch()))
                        .with_event(tp(Timestamp::from_unix(NOW))),
                    removed: Advisory::new("CVE-2023-11111").with_event(tp(Timestamp::epoch())),
                    added_events: vec![tp(Timestamp::from_unix(NOW))],
                    removed_events: vec![],
                }],
                ..DocumentDiffResult::new("ko")
            }],
            ..IndexDiffResult::default()
        };
        assert_eq!(diff_case("added-event"), expected);
    }

    #[test]
    fn test_removed_event() {
        let false_positive = Event::new(
            Timestamp::epoch().plus_days(1),
            EventType::FalsePositiveDetermination,
        );
        let expected = IndexDiffResult {
            modified: vec![DocumentDiffResult {
                modified: vec![DiffResult {
                    id: "CVE-2023-11111".to_string(),
                    added: Advisory::new("CVE-2023-11111").with_event(tp(Timestamp::epoch())),
                    removed: Advisory::new("CVE-2023-11111")
                        .with_event(tp(Timestamp::epoch()))
                        .with_event(false_positive.clone()),
                    added_events: vec![],
                    removed_events: vec![false_positive],
                }],
                ..DocumentDiffResult::new("ko")
            }],
            ..IndexDiffResult::default()
        };
        assert_eq!(diff_case("removed-event"), expected);
    }
}

// ============================================================================
// Diff Properties
// ============================================================================

mod diff_properties {
    use super::*;

    const CASES: [&str; 8] = [
        "same",
        "added-document",
        "removed-document",
        "added-advisory",
        "removed-advisory",
        "modified-advisory-outside-of-events",
        "added-event",
        "removed-event",
    ];

    #[test]
    fn test_self_diff_is_empty() {
        for case in CASES {
            let (a, b) = load_case(case);
            assert!(index_diff(&a, &a).is_empty(), "{case}/a against itself");
            assert!(index_diff(&b, &b).is_empty(), "{case}/b against itself");
        }
    }

    #[test]
    fn test_swapping_sides_swaps_additions_and_removals() {
        for case in CASES {
            let (a, b) = load_case(case);
            let forward = index_diff(&a, &b);
            let backward = index_diff(&b, &a);

            assert_eq!(forward.added, backward.removed, "{case}: documents");
            assert_eq!(forward.removed, backward.added, "{case}: documents");
            assert_eq!(forward.modified.len(), backward.modified.len(), "{case}");

            for (fwd, bwd) in forward.modified.iter().zip(&backward.modified) {
                assert_eq!(fwd.name, bwd.name);
                assert_eq!(fwd.added, bwd.removed, "{case}: advisories");
                assert_eq!(fwd.removed, bwd.added, "{case}: advisories");
                assert_eq!(fwd.modified.len(), bwd.modified.len(), "{case}");
                for (f, b) in fwd.modified.iter().zip(&bwd.modified) {
                    assert_eq!(f.id, b.id);
                    assert_eq!(f.added, b.removed, "{case}: snapshots");
                    assert_eq!(f.removed, b.added, "{case}: snapshots");
                    assert_eq!(f.added_events, b.removed_events, "{case}: events");
                    assert_eq!(f.removed_events, b.added_events, "{case}: events");
                }
            }
        }
    }

    #[test]
    fn test_advisory_order_is_irrelevant() {
        let (a, b) = load_case("removed-advisory");
        let doc = a.get("ko").expect("ko present").clone();

        let mut reversed = doc.clone();
        reversed.advisories.reverse();
        assert_ne!(doc.advisories, reversed.advisories);

        let shuffled = Index::from_documents([reversed]);
        assert!(index_diff(&a, &shuffled).is_empty());
        assert_eq!(index_diff(&a, &b), index_diff(&shuffled, &b));
    }

    #[test]
    fn test_summary_counts_for_fixture_cases() {
        let summary = diff_case("added-event").summary();
        assert_eq!(summary.documents_modified, 1);
        assert_eq!(summary.advisories_modified, 1);
        assert_eq!(summary.events_added, 1);
        assert_eq!(summary.events_removed, 0);

        let summary = diff_case("added-document").summary();
        assert_eq!(summary.documents_added, 1);
        assert_eq!(summary.documents_modified, 0);
    }
}

// ============================================================================
// Loader Tests
// ============================================================================

mod loader_tests {
    use super::*;

    #[test]
    fn test_empty_directory_loads_empty_index() {
        let loaded = load_index(&case_dir("added-document", "a")).expect("load");
        assert!(loaded.index.is_empty());
        assert_eq!(loaded.skipped, 0);
    }

    #[test]
    fn test_loader_records_source_file() {
        let loaded = load_index(&case_dir("same", "a")).expect("load");
        let source = loaded.source("ko").expect("source recorded");
        assert_eq!(source.filename, Path::new("ko.advisories.yaml"));
        assert!(source.nolint.is_empty());
    }

    #[test]
    fn test_load_selected_packages() {
        let loaded = load_packages(&case_dir("added-event", "b"), &["ko".to_string()])
            .expect("load ko");
        assert_eq!(loaded.index.len(), 1);
        assert_eq!(loaded.index.advisory_count(), 1);

        let missing = load_packages(&case_dir("added-event", "b"), &["zlib".to_string()]);
        assert!(missing.is_err());
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        assert!(load_index(&case_dir("does-not-exist", "a")).is_err());
    }
}
