//! Owned DOM tree used by the extractor.
//!
//! The parser output is converted into this structure once. Every later step
//! works on plain owned nodes, so the noise filter can clone a subtree and
//! prune it freely without touching the parsed document.

/// Kind of a node in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Root of a parsed document
    Document,
    /// Element node
    Element,
    /// Text node
    Text,
}

/// A node of the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Node type
    pub node_type: NodeType,

    /// Lowercase tag name for elements, `#text` / `#document` otherwise
    pub name: String,

    /// Text content for text nodes
    pub value: Option<String>,

    /// Attributes in source order
    pub attributes: Vec<(String, String)>,

    /// Child nodes in document order
    pub children: Vec<Node>,
}

impl Node {
    /// Create an empty document root
    pub fn document() -> Self {
        Self {
            node_type: NodeType::Document,
            name: "#document".to_string(),
            value: None,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Self {
            node_type: NodeType::Element,
            name: tag_name.to_ascii_lowercase(),
            value: None,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let mut node = Self::element(tag_name);
        node.attributes = attrs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        node
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self {
            node_type: NodeType::Text,
            name: "#text".to_string(),
            value: Some(content.to_string()),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append a child and return the node, for building trees inline
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Add a child node
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Tag name (lowercase) of an element
    pub fn tag_name(&self) -> &str {
        &self.name
    }

    /// Check whether this is an element with the given tag
    pub fn is_tag(&self, tag: &str) -> bool {
        self.is_element() && self.name.eq_ignore_ascii_case(tag)
    }

    /// Get an attribute value by name (ASCII case-insensitive)
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Check if an attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Get all child nodes
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    /// Get only element children
    pub fn element_children(&self) -> impl Iterator<Item = &Node> {
        self.children().filter(|n| n.is_element())
    }

    /// Every descendant in document (pre-)order, excluding `self`.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }

    /// First descendant matching `predicate`
    pub fn find<P>(&self, predicate: P) -> Option<&Node>
    where
        P: Fn(&Node) -> bool,
    {
        self.descendants().find(|n| predicate(*n))
    }

    /// All descendants matching `predicate`, in document order
    pub fn find_all<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = &'a Node> + 'a
    where
        P: Fn(&Node) -> bool + 'a,
    {
        self.descendants().filter(move |n| predicate(*n))
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        if self.is_text() {
            return self.value.clone().unwrap_or_default();
        }
        self.descendants()
            .filter_map(|n| n.value.as_deref())
            .collect()
    }

    /// Remove every descendant subtree whose root matches `predicate`.
    pub fn remove_descendants(&mut self, predicate: &dyn Fn(&Node) -> bool) {
        let mut pending: Vec<&mut Node> = vec![self];
        while let Some(node) = pending.pop() {
            node.children.retain(|child| !predicate(child));
            pending.extend(node.children.iter_mut());
        }
    }

    /// A copy of this node with matching descendants removed.
    pub fn without(&self, predicate: &dyn Fn(&Node) -> bool) -> Node {
        let mut copy = self.clone();
        copy.remove_descendants(predicate);
        copy
    }
}

/// Pre-order iterator returned by [`Node::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
