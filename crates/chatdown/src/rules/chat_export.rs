//! Default rules for the chat web UI's HTML export.

use super::Filter;
use crate::utilities::STRUCTURAL_TAGS;

/// Structural blocks: one of the block tags, carrying `attribute`
pub fn structural_filter(attribute: &str) -> Filter {
    Filter::all(vec![
        Filter::tags(STRUCTURAL_TAGS),
        Filter::attribute(attribute),
    ])
}

/// Widgets stripped from every block before its text is read, keyed by name
pub fn noise_rules() -> Vec<(&'static str, Filter)> {
    vec![
        ("footnote", Filter::tag("source-footnote")),
        (
            "citations",
            Filter::tags(&["sources-carousel", "sources-carousel-inline"]),
        ),
        ("response-decoration", Filter::tag("response-element")),
        ("icon", Filter::tag("mat-icon")),
        ("button", Filter::tag("button")),
        ("superscript", Filter::tag("sup")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;

    #[test]
    fn test_noise_rules_cover_chat_widgets() {
        let rules = noise_rules();
        let widgets = [
            "source-footnote",
            "sources-carousel",
            "sources-carousel-inline",
            "response-element",
            "mat-icon",
            "button",
            "sup",
        ];
        for tag in widgets {
            let node = Node::element(tag);
            assert!(rules.iter().any(|(_, f)| f.matches(&node)), "{tag} is not filtered");
        }
    }

    #[test]
    fn test_structural_filter_needs_attribute() {
        let filter = structural_filter("data-path-to-node");
        let with_path = |tag: &str| Node::element_with_attrs(tag, vec![("data-path-to-node", "0")]);
        for &tag in STRUCTURAL_TAGS {
            assert!(filter.matches(&with_path(tag)));
            assert!(!filter.matches(&Node::element(tag)));
        }
        assert!(!filter.matches(&with_path("h5")));
        assert!(!filter.matches(&with_path("li")));
        assert!(!filter.matches(&Node::text("p")));
    }
}
