//! copytext-core - markup tree, word counting and reading time
//!
//! This crate provides the parser-independent pieces of `copytext`: the
//! owned [`Node`] tree that parsers build, its HTML serialization, the word
//! counting heuristic, and the reading time estimate.
//!
//! # Architecture
//!
//! ```text
//! XML String  ──strict──▶  ┌──────────┐ ──text_content──▶ word_count / chars
//!                          │ Node tree│
//! HTML String ──lenient──▶ └──────────┘ ──outer_html────▶ HTML String
//! ```
//!
//! # Example
//!
//! ```rust
//! use copytext_core::{reading_time_minutes, word_count, Node};
//!
//! let mut p = Node::element("p");
//! p.add_child(Node::text("Hello World"));
//!
//! assert_eq!(p.outer_html(), "<p>Hello World</p>");
//! assert_eq!(word_count(&p.text_content()), 2);
//! assert_eq!(reading_time_minutes(500), 2);
//! ```

mod node;
mod reading;
mod serialize;
pub mod utilities;
mod words;

pub use node::{Descendants, Node, NodeType};
pub use reading::{reading_time_minutes, WORDS_PER_MINUTE};
pub use serialize::serialize;
pub use words::{word_count, words, WORD_PATTERN};
