//! Tag and attribute lists of the default cleaning policy.

/// Elements killed by [`sanitize_html`](super::sanitize_html)
pub const DEFAULT_KILL_TAGS: &[&str] = &["script", "style", "head"];

pub const PAGE_STRUCTURE_TAGS: &[&str] = &["html", "title"];

pub const EMBEDDED_TAGS: &[&str] = &["embed", "object", "applet", "param"];

pub const FRAME_TAGS: &[&str] = &["frame", "frameset", "iframe"];

pub const FORM_CONTROL_TAGS: &[&str] = &["input", "button", "select", "textarea"];

pub const ANNOYING_TAGS: &[&str] = &["blink", "marquee"];

/// Attributes that may hold a URL
pub const LINK_ATTRS: &[&str] = &[
    "href", "src", "action", "formaction", "background", "cite", "codebase",
    "data", "dynsrc", "longdesc", "lowsrc", "poster", "xlink:href",
];

/// URL schemes that run script
pub const SCRIPT_SCHEMES: &[&str] = &["javascript", "jscript", "livescript", "vbscript", "mocha"];

/// Attributes kept when `safe_attrs_only` is set
pub const SAFE_ATTRS: &[&str] = &[
    "abbr", "accept", "accept-charset", "accesskey", "action", "align", "alt",
    "axis", "border", "cellpadding", "cellspacing", "char", "charoff",
    "charset", "checked", "cite", "class", "clear", "color", "cols",
    "colspan", "compact", "coords", "datetime", "dir", "disabled", "enctype",
    "for", "frame", "headers", "height", "href", "hreflang", "hspace", "id",
    "ismap", "label", "lang", "longdesc", "maxlength", "media", "method",
    "multiple", "name", "nohref", "noshade", "nowrap", "prompt", "readonly",
    "rel", "rev", "rows", "rowspan", "rules", "scope", "selected", "shape",
    "size", "span", "src", "start", "summary", "tabindex", "target", "title",
    "type", "usemap", "valign", "value", "vspace", "width",
];

pub(crate) fn contains(list: &[&str], name: &str) -> bool {
    list.iter().any(|t| t.eq_ignore_ascii_case(name))
}

/// Check whether a URL uses a scripting scheme.
///
/// Whitespace and control characters are ignored, as browsers do.
pub fn is_script_url(url: &str) -> bool {
    let cleaned: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect();

    match cleaned.split_once(':') {
        Some((scheme, _)) => contains(SCRIPT_SCHEMES, scheme),
        None => false,
    }
}
