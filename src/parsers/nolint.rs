//! `#nolint:` directive scanning.
//!
//! A document may suppress lint rules for its package with a line such as
//! `#nolint:valid-pipeline-fetch-digest,check-when-version-changes`. Only the
//! first directive in a file is honored.

const NOLINT_PREFIX: &str = "#nolint:";

/// Lint rules suppressed by the first `#nolint:` line in `content`.
///
/// Returns an empty list if the file has no directive.
#[must_use]
pub fn find_nolint(content: &str) -> Vec<String> {
    content
        .lines()
        .find_map(|line| line.strip_prefix(NOLINT_PREFIX))
        .map(|rules| {
            rules
                .split(',')
                .map(str::trim)
                .filter(|rule| !rule.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
