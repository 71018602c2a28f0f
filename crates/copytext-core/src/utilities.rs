//! Element classification and escaping helpers.

/// Block-level elements, after which a line break is meaningful in plain text
pub const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "canvas", "dd", "div", "dl",
    "dt", "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2",
    "h3", "h4", "h5", "h6", "header", "hgroup", "hr", "li", "main", "nav",
    "noscript", "ol", "output", "p", "pre", "section", "table", "tfoot", "ul",
    "video",
];

/// Void (self-closing) HTML elements
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input",
    "keygen", "link", "meta", "param", "source", "track", "wbr",
];

/// Elements whose text is serialized without escaping.
///
/// `noscript` is raw text because html5ever parses with scripting enabled.
pub const RAW_TEXT_ELEMENTS: &[&str] = &[
    "script", "style", "xmp", "iframe", "noembed", "noframes", "noscript",
    "plaintext",
];

fn contains_ignore_case(list: &[&str], tag: &str) -> bool {
    list.iter().any(|t| t.eq_ignore_ascii_case(tag))
}

/// Check if a tag is a block-level element
pub fn is_block(tag: &str) -> bool {
    contains_ignore_case(BLOCK_ELEMENTS, tag)
}

/// Check if a tag is a void element
pub fn is_void(tag: &str) -> bool {
    contains_ignore_case(VOID_ELEMENTS, tag)
}

/// Check if a tag holds raw text
pub fn is_raw_text(tag: &str) -> bool {
    contains_ignore_case(RAW_TEXT_ELEMENTS, tag)
}

/// Escape text content for HTML output
pub fn escape_html_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape an HTML attribute value
pub fn escape_html_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_block() {
        assert!(is_block("div"));
        assert!(is_block("p"));
        assert!(is_block("DIV"));
        assert!(!is_block("span"));
        assert!(!is_block("hl2"));
    }

    #[test]
    fn test_is_void() {
        assert!(is_void("br"));
        assert!(is_void("img"));
        assert!(is_void("HR"));
        assert!(!is_void("div"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape_html_text("a < b && c"), "a &lt; b &amp;&amp; c");
        assert_eq!(escape_html_attr(r#"say "hi""#), "say &quot;hi&quot;");
    }
}
