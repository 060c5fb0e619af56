//! Small text measurements shared across the generation pipeline.
//!
//! All truncation is in Unicode scalar values, never bytes; source content
//! is user-supplied and routinely contains emoji.

/// Words per minute used for read-time estimates.
const WORDS_PER_MINUTE: usize = 200;

/// Returns at most the first `max` chars of `s`.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Whitespace-separated word count. Empty or blank text counts zero words.
pub fn count_words(s: &str) -> usize {
    s.split_whitespace().count()
}

/// Read-time label at 200 wpm, rounded up. Anything under a minute reads
/// "< 1 min".
pub fn read_time(word_count: usize) -> String {
    if word_count < WORDS_PER_MINUTE {
        "< 1 min".to_string()
    } else {
        format!("{} min", word_count.div_ceil(WORDS_PER_MINUTE))
    }
}

/// First sentence of `s`: everything before the first `.`, `!`, or `?`,
/// trimmed. Falls back to the whole (trimmed) text when no terminator exists.
pub fn first_sentence(s: &str) -> &str {
    match s.find(['.', '!', '?']) {
        Some(idx) => s[..idx].trim(),
        None => s.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo wörld", 5), "héllo");
        assert_eq!(truncate_chars("🧵🧵🧵", 2), "🧵🧵");
        assert_eq!(truncate_chars("short", 100), "short");
    }

    #[test]
    fn test_count_words() {
        assert_eq!(count_words("Hello world. This is a test."), 6);
        assert_eq!(count_words("   spaced    out   "), 2);
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   "), 0);
    }

    #[test]
    fn test_read_time_under_a_minute() {
        assert_eq!(read_time(0), "< 1 min");
        assert_eq!(read_time(28), "< 1 min");
        assert_eq!(read_time(199), "< 1 min");
    }

    #[test]
    fn test_read_time_rounds_up() {
        assert_eq!(read_time(200), "1 min");
        assert_eq!(read_time(201), "2 min");
        assert_eq!(read_time(1000), "5 min");
    }

    #[test]
    fn test_first_sentence() {
        assert_eq!(first_sentence("Hello world. More text."), "Hello world");
        assert_eq!(first_sentence("Really? Yes."), "Really");
        assert_eq!(first_sentence("No terminator here"), "No terminator here");
        assert_eq!(first_sentence(""), "");
    }
}
