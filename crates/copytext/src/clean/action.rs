//! Per-tag cleaning actions and cleaner options.

use super::defaults::{DEFAULT_KILL_TAGS, PAGE_STRUCTURE_TAGS};

/// What the cleaner does with an element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagAction {
    /// Keep the element (attributes are still cleaned)
    Keep,
    /// Drop the element but keep its children in its place
    Unwrap,
    /// Drop the element together with everything inside it
    Kill,
}

/// Options for [`Cleaner`](super::Cleaner)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanerOptions {
    /// Elements removed with their whole content
    pub kill_tags: Vec<String>,

    /// Elements removed while their content is kept
    pub remove_tags: Vec<String>,

    /// Remove comments
    pub comments: bool,

    /// Remove javascript links (`javascript:`, `vbscript:`, ...)
    pub javascript: bool,

    /// Remove embedded objects (`embed`, `object`, `applet`, `param`)
    pub embedded: bool,

    /// Remove frames and iframes
    pub frames: bool,

    /// Remove form controls and unwrap `form`
    pub forms: bool,

    /// Remove `link` elements
    pub links: bool,

    /// Remove `meta` elements
    pub meta: bool,

    /// Unwrap `blink` and `marquee`
    pub annoying_tags: bool,

    /// Only keep attributes from the safe list (this drops event handlers
    /// and inline styles)
    pub safe_attrs_only: bool,

    /// Add `rel="nofollow"` to every link
    pub add_nofollow: bool,
}

impl Default for CleanerOptions {
    fn default() -> Self {
        Self {
            kill_tags: DEFAULT_KILL_TAGS.iter().map(|t| t.to_string()).collect(),
            remove_tags: PAGE_STRUCTURE_TAGS.iter().map(|t| t.to_string()).collect(),
            comments: true,
            javascript: true,
            embedded: true,
            frames: true,
            forms: true,
            links: true,
            meta: true,
            annoying_tags: true,
            safe_attrs_only: true,
            add_nofollow: false,
        }
    }
}
