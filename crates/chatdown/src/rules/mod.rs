//! Node classification: which blocks are content and which widgets are noise.

mod chat_export;
mod rule;

pub use chat_export::{noise_rules, structural_filter};
pub use rule::{Filter, PredicateFn};

use indexmap::IndexMap;

use crate::node::Node;
use crate::service::ExtractOptions;

/// Collection of filters used during extraction
pub struct Rules {
    /// Decides which blocks take part in the document walk
    structural: Filter,
    /// Noise filters, checked in insertion order
    noise: IndexMap<String, Filter>,
}

impl Rules {
    /// Create the default rules for the chat export format
    pub fn new(options: &ExtractOptions) -> Self {
        Self {
            structural: structural_filter(&options.structural_attribute),
            noise: noise_rules()
                .into_iter()
                .map(|(key, filter)| (key.to_string(), filter))
                .collect(),
        }
    }

    /// Replace the structural filter
    pub fn set_structural(&mut self, filter: Filter) {
        self.structural = filter;
    }

    /// Add a noise filter; an existing filter with the same key is replaced
    pub fn add_noise(&mut self, key: &str, filter: Filter) {
        self.noise.insert(key.to_string(), filter);
    }

    /// Remove a noise filter by key
    pub fn remove_noise(&mut self, key: &str) -> Option<Filter> {
        self.noise.shift_remove(key)
    }

    /// Keys of the active noise filters
    pub fn noise_keys(&self) -> impl Iterator<Item = &str> {
        self.noise.keys().map(String::as_str)
    }

    /// Check if a node is a structural content block
    pub fn is_structural(&self, node: &Node) -> bool {
        self.structural.matches(node)
    }

    /// Check if a node is a noise widget
    pub fn is_noise(&self, node: &Node) -> bool {
        self.noise.values().any(|filter| filter.matches(node))
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new(&ExtractOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_noise_keys() {
        let rules = Rules::default();
        let keys: Vec<&str> = rules.noise_keys().collect();
        assert_eq!(
            keys,
            vec!["footnote", "citations", "response-decoration", "icon", "button", "superscript"]
        );
    }

    #[test]
    fn test_structural_uses_configured_attribute() {
        let options = ExtractOptions {
            structural_attribute: "data-block".to_string(),
            ..Default::default()
        };
        let rules = Rules::new(&options);
        assert!(rules.is_structural(&Node::element_with_attrs("p", vec![("data-block", "1")])));
        assert!(!rules.is_structural(&Node::element_with_attrs(
            "p",
            vec![("data-path-to-node", "1")]
        )));
    }

    #[test]
    fn test_add_and_remove_noise() {
        let mut rules = Rules::default();
        let kbd = Node::element("kbd");
        assert!(!rules.is_noise(&kbd));

        rules.add_noise("keys", Filter::tag("kbd"));
        assert!(rules.is_noise(&kbd));

        assert!(rules.remove_noise("superscript").is_some());
        assert!(!rules.is_noise(&Node::element("sup")));
        assert!(rules.remove_noise("superscript").is_none());
    }

    #[test]
    fn test_set_structural() {
        let mut rules = Rules::default();
        rules.set_structural(Filter::tag("section"));
        assert!(rules.is_structural(&Node::element("section")));
        assert!(!rules.is_structural(&Node::element_with_attrs(
            "p",
            vec![("data-path-to-node", "1")]
        )));
    }
}
