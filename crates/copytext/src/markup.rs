//! Markup to plain text conversion.

use std::fmt;
use std::str::FromStr;

use copytext_core::utilities::is_block;
use copytext_core::Node;
use tracing::debug;

use crate::{MarkupError, Result};

/// Grammar used to parse markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentType {
    /// Well-formed XML; malformed input fails to parse
    #[default]
    Xml,
    /// Lenient HTML; any input parses
    Html,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Xml => "xml",
            ContentType::Html => "html",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = MarkupError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("xml") {
            Ok(ContentType::Xml)
        } else if s.eq_ignore_ascii_case("html") {
            Ok(ContentType::Html)
        } else {
            Err(MarkupError::UnknownContentType(s.to_string()))
        }
    }
}

/// Options for [`markup_to_text`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextOptions {
    /// Parser grammar
    pub content_type: ContentType,

    /// Add a line feed after each block-level element and after `br`
    pub line_feed_on_block: bool,

    /// Add a space after every element, so that words in adjacent elements
    /// are not glued together (e.g. `<hl2>word</hl2><p>another</p>`)
    pub space_on_elements: bool,
}

impl TextOptions {
    /// Options for the given content type, without boundary markers
    pub fn new(content_type: ContentType) -> Self {
        Self {
            content_type,
            ..Default::default()
        }
    }

    pub fn line_feed_on_block(mut self, enabled: bool) -> Self {
        self.line_feed_on_block = enabled;
        self
    }

    pub fn space_on_elements(mut self, enabled: bool) -> Self {
        self.space_on_elements = enabled;
        self
    }

    fn has_markers(&self) -> bool {
        self.line_feed_on_block || self.space_on_elements
    }
}

/// Parse markup into a tree with the given grammar.
pub fn parse_markup(markup: &str, content_type: ContentType) -> Result<Node> {
    match content_type {
        ContentType::Xml => crate::xml::parse_xml(markup),
        #[cfg(feature = "html")]
        ContentType::Html => Ok(crate::html::parse_html(markup)),
        #[cfg(not(feature = "html"))]
        ContentType::Html => Err(MarkupError::Unsupported(content_type)),
    }
}

/// Get the plain text version of HTML or other XML markup.
///
/// If the markup can't be parsed it is returned unchanged.
///
/// # Example
///
/// ```rust
/// use copytext::{markup_to_text, ContentType, TextOptions};
///
/// let options = TextOptions::new(ContentType::Xml).space_on_elements(true);
/// assert_eq!(markup_to_text("<hl2>word</hl2><p>another</p>", &options), "word another ");
///
/// // Malformed XML falls back to the input
/// assert_eq!(markup_to_text("<not valid xml", &TextOptions::default()), "<not valid xml");
/// ```
pub fn markup_to_text(markup: &str, options: &TextOptions) -> String {
    match parse_markup(markup, options.content_type) {
        Ok(mut root) => {
            if options.has_markers() {
                insert_markers(&mut root, options);
            }
            root.text_content()
        }
        Err(err) => {
            debug!(
                content_type = %options.content_type,
                error = %err,
                "markup could not be parsed, using it as plain text"
            );
            markup.to_owned()
        }
    }
}

/// Insert marker text right after every element below `node` that needs one
fn insert_markers(node: &mut Node, options: &TextOptions) {
    let children = std::mem::take(&mut node.children);
    let mut marked = Vec::with_capacity(children.len());

    for mut child in children {
        if !child.is_element() {
            marked.push(child);
            continue;
        }

        insert_markers(&mut child, options);

        let mut tail = String::new();
        let tag = child.tag_name();
        if options.line_feed_on_block && (is_block(tag) || tag.eq_ignore_ascii_case("br")) {
            tail.push('\n');
        }
        if options.space_on_elements {
            tail.push(' ');
        }

        marked.push(child);
        if !tail.is_empty() {
            marked.push(Node::text(&tail));
        }
    }

    node.children = marked;
}
