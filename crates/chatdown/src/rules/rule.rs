//! Filter type used to classify nodes.

use crate::node::Node;

/// Boxed predicate over a node
pub type PredicateFn = Box<dyn Fn(&Node) -> bool + Send + Sync>;

/// A filter decides whether an element belongs to a class of nodes
pub enum Filter {
    /// Match a single tag name
    TagName(String),
    /// Match any of multiple tag names
    TagNames(Vec<String>),
    /// Match elements carrying an attribute, whatever its value
    Attribute(String),
    /// Match when every inner filter matches
    AllOf(Vec<Filter>),
    /// Match using a predicate function
    Predicate(PredicateFn),
}

impl Filter {
    /// Create a filter for a single tag
    pub fn tag(name: &str) -> Self {
        Filter::TagName(name.to_ascii_lowercase())
    }

    /// Create a filter for multiple tags
    pub fn tags(names: &[&str]) -> Self {
        Filter::TagNames(names.iter().map(|s| s.to_ascii_lowercase()).collect())
    }

    /// Create a filter for an attribute being present
    pub fn attribute(name: &str) -> Self {
        Filter::Attribute(name.to_string())
    }

    /// Combine filters so all of them must match
    pub fn all(filters: Vec<Filter>) -> Self {
        Filter::AllOf(filters)
    }

    /// Create a filter with a predicate
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&Node) -> bool + Send + Sync + 'static,
    {
        Filter::Predicate(Box::new(f))
    }

    /// Check if this filter matches a node. Text nodes never match.
    pub fn matches(&self, node: &Node) -> bool {
        if !node.is_element() {
            return false;
        }
        match self {
            Filter::TagName(t) => node.is_tag(t),
            Filter::TagNames(tags) => tags.iter().any(|t| node.is_tag(t)),
            Filter::Attribute(name) => node.has_attr(name),
            Filter::AllOf(filters) => filters.iter().all(|f| f.matches(node)),
            Filter::Predicate(f) => f(node),
        }
    }
}
