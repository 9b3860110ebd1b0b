//! Text normalization and tag constants for the chat export format.

use once_cell::sync::Lazy;
use regex::Regex;

/// Block-level tags that can take part in the document walk
pub const STRUCTURAL_TAGS: &[&str] = &["p", "h1", "h2", "h3", "h4", "ul", "ol", "table"];

/// Attribute the export puts on every real content block
pub const STRUCTURAL_ATTRIBUTE: &str = "data-path-to-node";

/// List container tags
pub const LIST_TAGS: &[&str] = &["ul", "ol"];

/// Table cell tags
pub const CELL_TAGS: &[&str] = &["td", "th"];

/// Tags that mark a paragraph as a bold sub-title
pub const BOLD_TAGS: &[&str] = &["b", "strong"];

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Collapse every whitespace run into one space and trim both ends.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Heading level for `h1`..`h6`
pub fn heading_level(tag: &str) -> Option<usize> {
    let digits = tag.strip_prefix('h').or_else(|| tag.strip_prefix('H'))?;
    match digits.parse::<usize>() {
        Ok(level @ 1..=6) => Some(level),
        _ => None,
    }
}

/// Check if a tag is a list container
pub fn is_list_tag(tag: &str) -> bool {
    LIST_TAGS.contains(&tag.to_ascii_lowercase().as_str())
}

/// Check if a tag is a table cell
pub fn is_cell_tag(tag: &str) -> bool {
    CELL_TAGS.contains(&tag.to_ascii_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_runs() {
        assert_eq!(normalize_whitespace("  a \n\t b   c  "), "a b c");
        assert_eq!(normalize_whitespace("line\r\nbreak"), "line break");
    }

    #[test]
    fn test_normalize_empty_and_blank() {
        assert_eq!(normalize_whitespace(""), "");
        assert_eq!(normalize_whitespace(" \n\t "), "");
    }

    #[test]
    fn test_normalize_unicode_whitespace() {
        assert_eq!(normalize_whitespace("a\u{00a0}\u{3000}b"), "a b");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for input in ["", " x ", "a  b\n\nc", "\u{00a0}中文 \t 文字\n"] {
            let once = normalize_whitespace(input);
            assert_eq!(normalize_whitespace(&once), once);
            assert!(!once.contains("  "));
            assert_eq!(once.trim(), once);
        }
    }

    #[test]
    fn test_heading_level() {
        assert_eq!(heading_level("h1"), Some(1));
        assert_eq!(heading_level("h4"), Some(4));
        assert_eq!(heading_level("H2"), Some(2));
        assert_eq!(heading_level("h7"), None);
        assert_eq!(heading_level("hr"), None);
        assert_eq!(heading_level("p"), None);
    }

    #[test]
    fn test_tag_groups() {
        assert!(is_list_tag("ul"));
        assert!(is_list_tag("OL"));
        assert!(!is_list_tag("li"));
        assert!(is_cell_tag("td"));
        assert!(is_cell_tag("th"));
        assert!(!is_cell_tag("tr"));
    }
}
