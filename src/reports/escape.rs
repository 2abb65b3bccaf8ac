//! Escaping for user-controlled text embedded in Markdown.
//!
//! Advisory documents are edited by hand, so notes and identifiers may
//! contain characters that break table layout or inject formatting.

/// Escape a string for safe inclusion in Markdown table cells.
///
/// # Examples
///
/// ```
/// use advisory_diff::reports::escape::escape_markdown_table;
///
/// assert_eq!(escape_markdown_table("a | b"), "a \\| b");
/// assert_eq!(escape_markdown_table("line1\nline2"), "line1 line2");
/// ```
#[must_use]
pub fn escape_markdown_table(s: &str) -> String {
    escape_with(s, &['|', '`', '[', ']'])
}

/// Escape a string for safe inclusion in Markdown inline content.
///
/// # Examples
///
/// ```
/// use advisory_diff::reports::escape::escape_markdown_inline;
///
/// assert_eq!(escape_markdown_inline("**bold**"), "\\*\\*bold\\*\\*");
/// assert_eq!(escape_markdown_inline("GHSA-xxxx_yyyy"), "GHSA-xxxx\\_yyyy");
/// ```
#[must_use]
pub fn escape_markdown_inline(s: &str) -> String {
    escape_with(
        s,
        &['*', '_', '`', '[', ']', '#', '!', '~', '|', '<', '>'],
    )
}

fn escape_with(s: &str, special: &[char]) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => result.push(' '),
            '\r' => {}
            c if special.contains(&c) => {
                result.push('\\');
                result.push(c);
            }
            c => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_escaping() {
        assert_eq!(escape_markdown_table("`code`"), "\\`code\\`");
        assert_eq!(escape_markdown_table("[x]"), "\\[x\\]");
        assert_eq!(escape_markdown_table("a\r\nb"), "a b");
    }

    #[test]
    fn test_inline_escaping() {
        assert_eq!(escape_markdown_inline("# heading"), "\\# heading");
        assert_eq!(escape_markdown_inline("<tag>"), "\\<tag\\>");
        assert_eq!(escape_markdown_inline("CVE-2023-1234"), "CVE-2023-1234");
    }
}
