//! HTML serialization of a [`Node`] tree

use crate::node::{Node, NodeType};
use crate::utilities::{escape_html_attr, escape_html_text, is_raw_text, is_void};

impl Node {
    /// Serialize this node, including its own tags, as HTML
    pub fn outer_html(&self) -> String {
        let mut out = String::new();
        write_node(self, false, &mut out);
        out
    }

    /// Serialize the children of this node as HTML
    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        let raw = self.is_element() && is_raw_text(self.tag_name());
        for child in &self.children {
            write_node(child, raw, &mut out);
        }
        out
    }
}

/// Serialize a list of sibling nodes as HTML
pub fn serialize(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(node, false, &mut out);
    }
    out
}

fn write_node(node: &Node, raw_text: bool, out: &mut String) {
    match node.node_type {
        NodeType::Text => {
            let value = node.node_value.as_deref().unwrap_or_default();
            if raw_text {
                out.push_str(value);
            } else {
                out.push_str(&escape_html_text(value));
            }
        }
        NodeType::Comment => {
            out.push_str("<!--");
            out.push_str(node.node_value.as_deref().unwrap_or_default());
            out.push_str("-->");
        }
        NodeType::Fragment => {
            for child in &node.children {
                write_node(child, false, out);
            }
        }
        NodeType::Element => {
            let tag = node.tag_name();
            out.push('<');
            out.push_str(tag);
            for (name, value) in &node.attributes {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                out.push_str(&escape_html_attr(value));
                out.push('"');
            }
            out.push('>');

            // Void elements have no end tag
            if is_void(tag) {
                return;
            }

            let raw = is_raw_text(tag);
            for child in &node.children {
                write_node(child, raw, out);
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_outer_html() {
        let mut a = Node::element_with_attrs("a", [("href", "https://example.com")]);
        a.add_child(Node::text("Link"));

        assert_eq!(a.outer_html(), "<a href=\"https://example.com\">Link</a>");
    }

    #[test]
    fn test_void_element_html() {
        let br = Node::element("br");
        assert_eq!(br.outer_html(), "<br>");

        let img = Node::element_with_attrs("img", [("src", "test.png"), ("alt", "")]);
        assert_eq!(img.outer_html(), "<img src=\"test.png\" alt=\"\">");
    }

    #[test]
    fn test_escaping() {
        let mut p = Node::element_with_attrs("p", [("title", "\"quoted\" & more")]);
        p.add_child(Node::text("1 < 2 & 3 > 2"));
        assert_eq!(
            p.outer_html(),
            "<p title=\"&quot;quoted&quot; &amp; more\">1 &lt; 2 &amp; 3 &gt; 2</p>"
        );
    }

    #[test]
    fn test_raw_text_is_not_escaped() {
        let mut style = Node::element("style");
        style.add_child(Node::text("p > a { color: red }"));
        assert_eq!(style.outer_html(), "<style>p > a { color: red }</style>");
        assert_eq!(style.inner_html(), "p > a { color: red }");
    }

    #[test]
    fn test_noscript_is_raw_text() {
        let mut noscript = Node::element("noscript");
        noscript.add_child(Node::text("&lt;b&gt;"));
        assert_eq!(noscript.outer_html(), "<noscript>&lt;b&gt;</noscript>");
    }

    #[test]
    fn test_fragment_and_comment() {
        let mut root = Node::fragment();
        root.add_child(Node::comment(" note "));
        let mut p = Node::element("p");
        p.add_child(Node::text("ok"));
        root.add_child(p);

        assert_eq!(root.inner_html(), "<!-- note --><p>ok</p>");
        assert_eq!(root.outer_html(), root.inner_html());
        assert_eq!(serialize(&root.children), root.inner_html());
    }
}
