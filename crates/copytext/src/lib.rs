//! # copytext
//!
//! Plain text, word counts, reading time and sanitizing for editorial markup.
//!
//! Markup is parsed either as strict XML (NITF and other non-HTML formats)
//! or as lenient HTML, into the [`Node`] tree of `copytext-core`. The tree
//! is then flattened to text for counting, or cleaned and serialized back to
//! HTML.
//!
//! ## Example
//!
//! ```rust
//! use copytext::{char_count, word_count_from_markup, ContentType};
//!
//! // Words in adjacent non-HTML elements are kept apart
//! assert_eq!(word_count_from_markup("<hl2>word</hl2><p>another</p>", true), 2);
//!
//! assert_eq!(char_count("<p>abc</p>", ContentType::Xml), 3);
//! ```
//!
//! ## Example (HTML)
//!
//! ```rust
//! use copytext::{sanitize_html, TextStats};
//!
//! let html = sanitize_html("<p onclick=\"x()\">Hello <b>World</b></p><script>x()</script>");
//! assert_eq!(html, "<p>Hello <b>World</b></p>");
//!
//! let stats = TextStats::from_markup(&html, false);
//! assert_eq!(stats.words, 2);
//! assert_eq!(stats.reading_time_minutes, 0);
//! ```

#[cfg(feature = "html")]
pub mod clean;
mod count;
#[cfg(feature = "html")]
pub mod html;
mod markup;
pub mod xml;

#[cfg(feature = "html")]
pub use clean::{sanitize_html, Cleaner, CleanerOptions, TagAction};
pub use copytext_core::{reading_time_minutes, word_count, words, Node, NodeType};
pub use count::{char_count, word_count_from_markup, TextStats};
#[cfg(feature = "html")]
pub use html::parse_html;
pub use markup::{markup_to_text, parse_markup, ContentType, TextOptions};
pub use xml::parse_xml;

/// Error type for markup parsing
#[derive(Debug, thiserror::Error)]
pub enum MarkupError {
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Invalid attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("Unclosed element: <{0}>")]
    UnclosedElement(String),

    #[error("Unexpected end tag: </{0}>")]
    UnexpectedEndTag(String),

    #[error("Unknown content type: {0}")]
    UnknownContentType(String),

    #[error("Unsupported content type: {0}")]
    Unsupported(ContentType),
}

pub type Result<T> = std::result::Result<T, MarkupError>;
