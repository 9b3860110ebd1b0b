//! HTML parsing support.
//!
//! Parses an exported page with `scraper` (html5ever) and converts it into
//! the owned [`Node`] tree the extractor walks.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;
use crate::{ChatdownError, Result};

/// Deepest element nesting accepted from a document
pub const MAX_NESTING_DEPTH: usize = 512;

/// Parse an HTML document into a Node tree rooted at a document node.
///
/// Malformed markup is repaired the way a browser would. Documents nesting
/// elements deeper than [`MAX_NESTING_DEPTH`] are rejected with
/// [`ChatdownError::InvalidInput`].
///
/// # Example
///
/// ```rust
/// use chatdown::parse_html;
///
/// let document = parse_html("<p data-path-to-node=\"0\">Hello</p>").unwrap();
/// let p = document.find(|n| n.is_tag("p")).unwrap();
/// assert_eq!(p.attr("data-path-to-node"), Some("0"));
/// ```
pub fn parse_html(html: &str) -> Result<Node> {
    let parsed = Html::parse_document(html);
    let mut document = Node::document();
    document.add_child(scraper_to_node(parsed.root_element())?);
    Ok(document)
}

/// Element node carrying the tag and attributes of `element`, no children
fn shallow_copy(element: ElementRef) -> Node {
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();
    Node::element_with_attrs(element.value().name(), attrs)
}

/// Convert a scraper ElementRef to our Node structure.
///
/// Walks with an explicit stack of open elements so deep markup cannot
/// exhaust the call stack.
fn scraper_to_node(root: ElementRef) -> Result<Node> {
    let mut open = vec![(shallow_copy(root), root.children())];
    let mut converted = None;

    while let Some((node, children)) = open.last_mut() {
        match children.next() {
            Some(child) => match child.value() {
                ScraperNode::Text(text) => node.add_child(Node::text(&text.text)),
                ScraperNode::Element(_) => {
                    if let Some(child_element) = ElementRef::wrap(child) {
                        if open.len() >= MAX_NESTING_DEPTH {
                            return Err(ChatdownError::InvalidInput(format!(
                                "elements nest deeper than {} levels",
                                MAX_NESTING_DEPTH
                            )));
                        }
                        open.push((shallow_copy(child_element), child_element.children()));
                    }
                }
                // Comments, doctypes and processing instructions carry no content
                _ => {}
            },
            None => {
                if let Some((finished, _)) = open.pop() {
                    match open.last_mut() {
                        Some((parent, _)) => parent.add_child(finished),
                        None => converted = Some(finished),
                    }
                }
            }
        }
    }

    converted
        .ok_or_else(|| ChatdownError::InvalidInput("document has no root element".to_string()))
}
