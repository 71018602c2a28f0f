//! Owned markup tree.
//!
//! Both the strict XML parser and the lenient HTML parser of `copytext`
//! produce this structure, so text extraction, word counting and sanitizing
//! work the same way regardless of where the tree came from.

/// Kinds of node in a parsed markup tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Element with a tag name, attributes and children
    Element,
    /// Character data
    Text,
    /// `<!-- ... -->`
    Comment,
    /// Synthetic root holding the top-level nodes of a parsed fragment
    Fragment,
}

/// A node of a parsed markup document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Node type
    pub node_type: NodeType,

    /// Tag name for elements as written in the source, `#text`, `#comment`
    /// or `#fragment` otherwise
    pub node_name: String,

    /// Content of text and comment nodes
    pub node_value: Option<String>,

    /// Attributes in source order, only used by elements
    pub attributes: Vec<(String, String)>,

    /// Child nodes, only used by elements and fragments
    pub children: Vec<Node>,
}

impl Node {
    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Self {
            node_type: NodeType::Element,
            node_name: tag_name.to_string(),
            node_value: None,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs<N, V>(tag_name: &str, attrs: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        let mut node = Self::element(tag_name);
        node.attributes = attrs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        node
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self {
            node_type: NodeType::Text,
            node_name: "#text".to_string(),
            node_value: Some(content.to_string()),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a new comment node
    pub fn comment(content: &str) -> Self {
        Self {
            node_type: NodeType::Comment,
            node_name: "#comment".to_string(),
            node_value: Some(content.to_string()),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create an empty fragment root
    pub fn fragment() -> Self {
        Self {
            node_type: NodeType::Fragment,
            node_name: "#fragment".to_string(),
            node_value: None,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Check if this is a comment node
    pub fn is_comment(&self) -> bool {
        self.node_type == NodeType::Comment
    }

    /// Tag name as it appeared in the source (HTML parsers lowercase it)
    pub fn tag_name(&self) -> &str {
        &self.node_name
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

    /// Set an attribute, replacing an existing value of the same name
    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self
            .attributes
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
        {
            Some((_, v)) => *v = value.to_string(),
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
    }

    /// Keep only the attributes for which `f(name, value)` returns true
    pub fn retain_attrs<F>(&mut self, mut f: F)
    where
        F: FnMut(&str, &str) -> bool,
    {
        self.attributes.retain(|(k, v)| f(k, v));
    }

    /// Get all child nodes
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    /// Get only element children
    pub fn element_children(&self) -> impl Iterator<Item = &Node> {
        self.children().filter(|n| n.is_element())
    }

    /// Add a child node
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Iterate over this node and all of its descendants in document order
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Concatenation of all text nodes below this node, in document order.
    ///
    /// Comments do not contribute.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self.node_type {
            NodeType::Text => {
                if let Some(value) = &self.node_value {
                    out.push_str(value);
                }
            }
            NodeType::Comment => {}
            NodeType::Element | NodeType::Fragment => {
                for child in &self.children {
                    child.collect_text(out);
                }
            }
        }
    }
}

/// Depth-first, pre-order iterator returned by [`Node::descendants`]
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_create_element() {
        let node = Node::element("hl2");
        assert!(node.is_element());
        assert_eq!(node.tag_name(), "hl2");
        assert!(node.children().next().is_none());
    }

    #[test]
    fn test_create_text() {
        let node = Node::text("Hello World");
        assert!(node.is_text());
        assert_eq!(node.text_content(), "Hello World");
    }

    #[test]
    fn test_node_kinds_are_exclusive() {
        let nodes = [Node::element("p"), Node::text("a"), Node::comment("b"), Node::fragment()];
        let kinds: Vec<(bool, bool, bool)> = nodes
            .iter()
            .map(|n| (n.is_element(), n.is_text(), n.is_comment()))
            .collect();
        assert_eq!(
            kinds,
            vec![
                (true, false, false),
                (false, true, false),
                (false, false, true),
                (false, false, false),
            ]
        );
    }

    #[test]
    fn test_attributes() {
        let mut node = Node::element_with_attrs(
            "a",
            [("href", "https://example.com"), ("title", "Example")],
        );
        assert_eq!(node.attr("href"), Some("https://example.com"));
        assert_eq!(node.attr("TITLE"), Some("Example"));
        assert_eq!(node.attr("class"), None);

        node.set_attr("rel", "nofollow");
        node.set_attr("title", "Other");
        assert_eq!(node.attributes.len(), 3);
        assert_eq!(node.attr("title"), Some("Other"));

        node.retain_attrs(|name, _| name != "title");
        assert!(!node.has_attr("title"));
    }

    #[test]
    fn test_children() {
        let mut parent = Node::element("div");
        parent.add_child(Node::text("Hello"));
        parent.add_child(Node::element("span"));
        parent.add_child(Node::comment("note"));

        assert_eq!(parent.children().count(), 3);
        assert_eq!(parent.element_children().count(), 1);
    }

    #[test]
    fn test_text_content_skips_comments() {
        let mut div = Node::element("div");
        div.add_child(Node::text("Hello "));
        div.add_child(Node::comment("hidden"));
        let mut span = Node::element("span");
        span.add_child(Node::text("World"));
        div.add_child(span);

        assert_eq!(div.text_content(), "Hello World");
    }

    #[test]
    fn test_descendants_in_document_order() {
        let mut root = Node::fragment();
        let mut p = Node::element("p");
        p.add_child(Node::text("a"));
        root.add_child(p);
        root.add_child(Node::element("hr"));

        let names: Vec<&str> = root.descendants().map(|n| n.tag_name()).collect();
        assert_eq!(names, vec!["#fragment", "p", "#text", "hr"]);
    }
}
