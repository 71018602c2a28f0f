//! HTML cleaning.
//!
//! A [`Cleaner`] walks a parsed tree and removes what its policy forbids:
//! killed elements disappear with their content, unwrapped elements leave
//! their children behind, and unsafe attributes are dropped.

mod action;
mod defaults;

pub use action::{CleanerOptions, TagAction};
pub use defaults::{is_script_url, DEFAULT_KILL_TAGS, SAFE_ATTRS};

use copytext_core::{Node, NodeType};
use indexmap::IndexMap;
use tracing::trace;

use crate::html::parse_html_document;
use defaults::{
    contains, ANNOYING_TAGS, EMBEDDED_TAGS, FORM_CONTROL_TAGS, FRAME_TAGS, LINK_ATTRS,
};

/// Removes unwanted elements and attributes from HTML trees
#[derive(Debug, Clone, Default)]
pub struct Cleaner {
    options: CleanerOptions,
    /// Per-tag actions added by the user (checked first)
    custom_actions: IndexMap<String, TagAction>,
}

impl Cleaner {
    /// Create a new Cleaner with the default policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a Cleaner with custom options
    pub fn with_options(options: CleanerOptions) -> Self {
        Self {
            options,
            custom_actions: IndexMap::new(),
        }
    }

    /// Override the action for one tag
    pub fn tag(&mut self, name: &str, action: TagAction) -> &mut Self {
        self.custom_actions.insert(name.to_ascii_lowercase(), action);
        self
    }

    /// Get the current options
    pub fn options(&self) -> &CleanerOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut CleanerOptions {
        &mut self.options
    }

    /// Decide what happens to elements named `tag`
    pub fn action_for(&self, tag: &str) -> TagAction {
        let tag = tag.to_ascii_lowercase();
        if let Some(action) = self.custom_actions.get(&tag) {
            return *action;
        }

        let options = &self.options;
        let kill = options.kill_tags.iter().any(|t| t.eq_ignore_ascii_case(&tag))
            || (options.embedded && contains(EMBEDDED_TAGS, &tag))
            || (options.frames && contains(FRAME_TAGS, &tag))
            || (options.forms && contains(FORM_CONTROL_TAGS, &tag))
            || (options.links && tag == "link")
            || (options.meta && tag == "meta");
        if kill {
            return TagAction::Kill;
        }

        let unwrap = options.remove_tags.iter().any(|t| t.eq_ignore_ascii_case(&tag))
            || (options.forms && tag == "form")
            || (options.annoying_tags && contains(ANNOYING_TAGS, &tag));
        if unwrap {
            return TagAction::Unwrap;
        }

        TagAction::Keep
    }

    /// Clean a tree in place
    pub fn clean(&self, root: &mut Node) {
        if root.is_element() {
            self.clean_attributes(root);
        }
        self.clean_children(&mut root.children);
    }

    /// Parse `html` as a document, clean it and serialize the body content.
    ///
    /// The parser moves title, base, meta and leading scripts or styles into
    /// `head`, which the default policy kills. Only the content of `body` is
    /// returned.
    pub fn clean_html(&self, html: &str) -> String {
        let mut root = parse_html_document(html);
        self.clean(&mut root);

        let body = root
            .descendants()
            .find(|n| n.is_element() && n.tag_name().eq_ignore_ascii_case("body"));
        match body {
            Some(body) => body.inner_html(),
            None => root.inner_html(),
        }
    }

    fn clean_children(&self, children: &mut Vec<Node>) {
        let old = std::mem::take(children);

        for mut child in old {
            match child.node_type {
                NodeType::Comment if self.options.comments => {
                    trace!("removing comment");
                }
                NodeType::Element => match self.action_for(child.tag_name()) {
                    TagAction::Kill => {
                        trace!(tag = child.tag_name(), "killing element");
                    }
                    TagAction::Unwrap => {
                        trace!(tag = child.tag_name(), "unwrapping element");
                        self.clean_children(&mut child.children);
                        children.append(&mut child.children);
                    }
                    TagAction::Keep => {
                        self.clean_attributes(&mut child);
                        self.clean_children(&mut child.children);
                        children.push(child);
                    }
                },
                _ => children.push(child),
            }
        }
    }

    fn clean_attributes(&self, element: &mut Node) {
        let options = &self.options;

        element.retain_attrs(|name, value| {
            if options.safe_attrs_only && !contains(SAFE_ATTRS, name) {
                return false;
            }
            if options.javascript {
                if name.get(..2).is_some_and(|p| p.eq_ignore_ascii_case("on")) {
                    return false;
                }
                if contains(LINK_ATTRS, name) && is_script_url(value) {
                    return false;
                }
            }
            true
        });

        if options.add_nofollow
            && element.tag_name().eq_ignore_ascii_case("a")
            && element.has_attr("href")
        {
            element.set_attr("rel", "nofollow");
        }
    }
}

/// Sanitize untrusted HTML.
///
/// Scripts, styles and the document head are removed with their content,
/// links are left without `nofollow`. This only guards against that policy;
/// it is not a complete XSS filter.
///
/// # Example
///
/// ```rust
/// use copytext::sanitize_html;
///
/// assert_eq!(sanitize_html("<script>evil()</script><p>ok</p>"), "<p>ok</p>");
/// assert_eq!(sanitize_html(""), "");
/// ```
pub fn sanitize_html(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    let safe_html = Cleaner::new().clean_html(html);

    // Output of the pre-tree sanitizer for some degenerate inputs
    if safe_html == ", -" {
        return String::new();
    }

    safe_html
}
