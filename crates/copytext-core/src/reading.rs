//! Reading time estimation

/// Average reading speed used for the estimate
pub const WORDS_PER_MINUTE: u64 = 250;

/// Estimated number of minutes needed to read `word_count` words.
///
/// Rounds to the nearest minute: a remainder of 30 seconds or more counts
/// as a full minute.
pub fn reading_time_minutes(word_count: u64) -> u64 {
    let minutes = word_count / WORDS_PER_MINUTE;
    let remaining_seconds = word_count % WORDS_PER_MINUTE * 60 / WORDS_PER_MINUTE;
    if remaining_seconds >= 30 {
        minutes + 1
    } else {
        minutes
    }
}
