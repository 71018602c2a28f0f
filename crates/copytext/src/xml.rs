//! Strict XML parsing.
//!
//! Unlike the HTML parser, malformed input is an error here. The input is
//! read as a fragment: several top-level elements and top-level text are
//! accepted, as if the whole string were wrapped in a single element.

use copytext_core::Node;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::{MarkupError, Result};

/// Parse an XML fragment into a [`Node`] tree rooted at a fragment node.
///
/// Predefined and numeric character references are resolved, CDATA becomes
/// text, and processing instructions, declarations and doctypes are skipped.
pub fn parse_xml(xml: &str) -> Result<Node> {
    let mut reader = Reader::from_str(xml);
    let mut stack = vec![Node::fragment()];

    loop {
        match reader.read_event()? {
            Event::Start(start) => stack.push(element_from(&start)?),
            Event::Empty(start) => {
                let element = element_from(&start)?;
                append(&mut stack, element);
            }
            Event::End(end) => {
                let name = String::from_utf8_lossy(end.name().as_ref()).into_owned();
                if stack.len() < 2 {
                    return Err(MarkupError::UnexpectedEndTag(name));
                }
                if let Some(element) = stack.pop() {
                    append(&mut stack, element);
                }
            }
            Event::Text(text) => {
                let text = text.unescape()?;
                append(&mut stack, Node::text(&text));
            }
            Event::CData(data) => {
                append(&mut stack, Node::text(&String::from_utf8_lossy(&data)));
            }
            Event::Comment(comment) => {
                append(&mut stack, Node::comment(&String::from_utf8_lossy(&comment)));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if stack.len() > 1 {
        let open = stack.last().map(|n| n.tag_name().to_string()).unwrap_or_default();
        return Err(MarkupError::UnclosedElement(open));
    }

    Ok(stack.pop().unwrap_or_else(Node::fragment))
}

fn element_from(start: &BytesStart) -> Result<Node> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut element = Node::element(&name);

    for attr in start.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?;
        element.attributes.push((key, value.into_owned()));
    }

    Ok(element)
}

fn append(stack: &mut [Node], node: Node) {
    if let Some(parent) = stack.last_mut() {
        parent.add_child(node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_parse_fragment() {
        let root = parse_xml("<hl2>word</hl2><p>another</p>").unwrap();
        let names: Vec<&str> = root.children().map(|n| n.tag_name()).collect();
        assert_eq!(names, vec!["hl2", "p"]);
        assert_eq!(root.text_content(), "wordanother");
    }

    #[test]
    fn test_parse_attributes_and_entities() {
        let root = parse_xml(r#"<a href="x?a=1&amp;b=2">Tom &amp; Jerry &#233;</a>"#).unwrap();
        let a = root.children().next().unwrap();
        assert_eq!(a.attr("href"), Some("x?a=1&b=2"));
        assert_eq!(a.text_content(), "Tom & Jerry é");
    }

    #[test]
    fn test_parse_cdata_comment_and_empty() {
        let root = parse_xml("<p>a<![CDATA[<b>]]><!-- c --><br/>z</p>").unwrap();
        let p = root.children().next().unwrap();
        assert_eq!(p.children().count(), 5);
        assert_eq!(p.text_content(), "a<b>z");
    }

    #[test]
    fn test_top_level_text() {
        let root = parse_xml("plain text").unwrap();
        assert_eq!(root.text_content(), "plain text");
    }

    #[test]
    fn test_empty_input() {
        let root = parse_xml("").unwrap();
        assert_eq!(root.children().count(), 0);
    }

    #[rstest]
    #[case::unclosed_tag("<not valid xml")]
    #[case::unclosed_element("<p>text")]
    #[case::mismatched("<p><b>text</p></b>")]
    #[case::stray_end("text</p>")]
    #[case::html_entity("<p>a&nbsp;b</p>")]
    #[case::bare_ampersand("<p>Tom & Jerry</p>")]
    #[case::unquoted_attribute("<p class=x>text</p>")]
    fn test_malformed_input_is_error(#[case] xml: &str) {
        assert!(parse_xml(xml).is_err());
    }

    #[test]
    fn test_unclosed_element_reports_name() {
        let err = parse_xml("<p><em>text</em>").unwrap_err();
        assert!(matches!(err, MarkupError::UnclosedElement(ref name) if name == "p"));
    }
}
