//! Character, word, line, and sentence counting.

/// Counts for a block of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counts {
    pub characters: usize,
    pub words: usize,
    pub lines: usize,
    pub sentences: usize,
}

/// Count characters, words, lines, and sentences.
///
/// - Characters are Unicode scalar values, whitespace included.
/// - Words are maximal runs of non-whitespace.
/// - Lines are newline-separated (a trailing newline does not add a line).
/// - Sentences are non-empty runs separated by `.`, `!`, or `?`.
pub fn count(text: &str) -> Counts {
    let characters = text.chars().count();
    let words = text.split_whitespace().count();
    let lines = if text.is_empty() {
        0
    } else {
        text.trim_end_matches('\n').split('\n').count()
    };
    let sentences = text
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count();
    Counts {
        characters,
        words,
        lines,
        sentences,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_all_zero() {
        assert_eq!(count(""), Counts::default());
    }

    #[test]
    fn single_word() {
        let c = count("hello");
        assert_eq!(c.characters, 5);
        assert_eq!(c.words, 1);
        assert_eq!(c.lines, 1);
        assert_eq!(c.sentences, 1);
    }

    #[test]
    fn words_split_on_any_whitespace() {
        assert_eq!(count("one  two\tthree\nfour").words, 4);
    }

    #[test]
    fn trailing_newline_does_not_add_a_line() {
        assert_eq!(count("a\nb\n").lines, 2);
        assert_eq!(count("a\nb").lines, 2);
    }

    #[test]
    fn sentences_ignore_empty_segments() {
        assert_eq!(count("One. Two! Three?").sentences, 3);
        assert_eq!(count("Wait... what?").sentences, 2);
    }

    #[test]
    fn characters_count_unicode_scalars_not_bytes() {
        assert_eq!(count("héllo").characters, 5);
    }
}
