//! Word, character and reading time counts for markup.

use copytext_core::{reading_time_minutes, word_count};

use crate::markup::{markup_to_text, ContentType, TextOptions};

/// Get the word count of the text inside `markup`.
///
/// Set `no_html` when the markup is not (X)HTML, e.g. NITF: a space is then
/// added after each element so that `<hl2>word</hl2><p>another</p>` counts
/// as two words.
pub fn word_count_from_markup(markup: &str, no_html: bool) -> usize {
    let options = if no_html {
        TextOptions::new(ContentType::Xml).space_on_elements(true)
    } else {
        TextOptions::new(ContentType::Html).line_feed_on_block(true)
    };
    word_count(&markup_to_text(markup, &options))
}

/// Get the number of characters (not bytes) of the text inside `html`.
pub fn char_count(html: &str, content_type: ContentType) -> usize {
    markup_to_text(html, &TextOptions::new(content_type))
        .chars()
        .count()
}

/// Counts for one markup document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStats {
    pub words: usize,
    pub characters: usize,
    pub reading_time_minutes: u64,
}

impl TextStats {
    /// Count words, characters and reading time of `markup`.
    ///
    /// `no_html` selects XML parsing as in [`word_count_from_markup`];
    /// otherwise characters are counted on the HTML text.
    pub fn from_markup(markup: &str, no_html: bool) -> Self {
        let words = word_count_from_markup(markup, no_html);
        let content_type = if no_html {
            ContentType::Xml
        } else {
            ContentType::Html
        };

        Self {
            words,
            characters: char_count(markup, content_type),
            reading_time_minutes: reading_time_minutes(words as u64),
        }
    }
}
