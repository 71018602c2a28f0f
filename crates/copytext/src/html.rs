//! HTML parsing support.
//!
//! Parses HTML strings with html5ever (through scraper) and converts the
//! result to the [`Node`] tree used by the rest of the crate. Parsing is
//! lenient: any input yields a tree.

use copytext_core::Node;
use scraper::{ElementRef, Html, Node as ScraperNode};

/// Parse an HTML fragment into a [`Node`] tree rooted at a fragment node.
///
/// # Example
///
/// ```rust
/// use copytext::parse_html;
///
/// let root = parse_html("<h1>Hello <em>World</em></h1>");
/// assert_eq!(root.text_content(), "Hello World");
/// ```
pub fn parse_html(html: &str) -> Node {
    let document = Html::parse_fragment(html);

    let mut root = Node::fragment();
    // The fragment parser wraps everything in a synthetic <html> element
    append_children(&mut root, document.root_element());
    root
}

/// Parse a whole HTML document into a [`Node`] tree.
///
/// Unlike [`parse_html`], `head` content is kept in a `head` element, so the
/// returned fragment holds a single `html` element with `head` and `body`
/// (or `frameset`) children.
pub fn parse_html_document(html: &str) -> Node {
    let document = Html::parse_document(html);

    let mut root = Node::fragment();
    root.add_child(scraper_to_node(document.root_element()));
    root
}

/// Convert a scraper ElementRef to our Node structure
fn scraper_to_node(element: ElementRef) -> Node {
    let value = element.value();
    let mut node = Node::element_with_attrs(value.name(), value.attrs());
    append_children(&mut node, element);
    node
}

fn append_children(node: &mut Node, element: ElementRef) {
    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&text.text));
            }
            ScraperNode::Comment(comment) => {
                node.add_child(Node::comment(&comment.comment));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_node(child_element));
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use copytext_core::NodeType;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_simple_html() {
        let root = parse_html("<p>Hello World</p>");
        assert_eq!(root.node_type, NodeType::Fragment);

        let p = root.children().next().unwrap();
        assert_eq!(p.tag_name(), "p");
        assert_eq!(p.text_content(), "Hello World");
    }

    #[test]
    fn test_parse_keeps_attributes_and_comments() {
        let root = parse_html(r#"<a href="/x">link</a><!-- note -->"#);
        let nodes: Vec<&Node> = root.children().collect();

        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].attr("href"), Some("/x"));
        assert!(nodes[1].is_comment());
        assert_eq!(nodes[1].node_value.as_deref(), Some(" note "));
    }

    #[test]
    fn test_parse_is_lenient() {
        let root = parse_html("<p>unclosed <b>bold");
        assert_eq!(root.text_content(), "unclosed bold");
        assert_eq!(root.inner_html(), "<p>unclosed <b>bold</b></p>");
    }

    #[test]
    fn test_parse_document_keeps_head() {
        let root = parse_html_document("<title>T</title><p>x</p>");
        let html = root.children().next().unwrap();
        let names: Vec<&str> = html.element_children().map(|n| n.tag_name()).collect();

        assert_eq!(html.tag_name(), "html");
        assert_eq!(names, vec!["head", "body"]);
        assert_eq!(html.inner_html(), "<head><title>T</title></head><body><p>x</p></body>");
    }

    #[test]
    fn test_attributes_keep_source_order() {
        let root = parse_html(r#"<a title="t" href="/x" class="c">x</a>"#);
        let a = root.children().next().unwrap();
        let names: Vec<&str> = a.attributes.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, vec!["title", "href", "class"]);
    }

    #[test]
    fn test_entities_are_decoded() {
        let root = parse_html("<p>a&nbsp;&amp;&nbsp;b</p>");
        assert_eq!(root.text_content(), "a\u{a0}&\u{a0}b");
    }
}
