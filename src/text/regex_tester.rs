//! Regex testing: match listing and replacement.
//!
//! A thin, error-propagating layer over the `regex` crate. Invalid patterns
//! surface as [`regex::Error`] — never a panic.

use regex::Regex;

/// A single match with its byte span and capture groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchInfo {
    /// Byte offset of the match start.
    pub start: usize,
    /// Byte offset one past the match end.
    pub end: usize,
    /// The matched text.
    pub text: String,
    /// Capture groups 1.., `None` for groups that did not participate.
    pub groups: Vec<Option<String>>,
}

/// Find every non-overlapping match of `pattern` in `input`.
pub fn find_matches(pattern: &str, input: &str) -> Result<Vec<MatchInfo>, regex::Error> {
    let re = Regex::new(pattern)?;
    let matches = re
        .captures_iter(input)
        .map(|caps| {
            let whole = caps.get(0).unwrap();
            MatchInfo {
                start: whole.start(),
                end: whole.end(),
                text: whole.as_str().to_string(),
                groups: (1..caps.len())
                    .map(|i| caps.get(i).map(|m| m.as_str().to_string()))
                    .collect(),
            }
        })
        .collect();
    Ok(matches)
}

/// Replace every match of `pattern` in `input` with `replacement`.
///
/// The replacement string supports `$1`/`${name}` group references.
pub fn replace_all(pattern: &str, input: &str, replacement: &str) -> Result<String, regex::Error> {
    let re = Regex::new(pattern)?;
    Ok(re.replace_all(input, replacement).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_all_matches_with_offsets() {
        let matches = find_matches(r"\d+", "a 12 b 345").unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].text, "12");
        assert_eq!((matches[0].start, matches[0].end), (2, 4));
        assert_eq!(matches[1].text, "345");
    }

    #[test]
    fn captures_are_reported_per_match() {
        let matches = find_matches(r"(\w+)@(\w+)", "a@b c@d").unwrap();
        assert_eq!(matches[0].groups, vec![Some("a".into()), Some("b".into())]);
        assert_eq!(matches[1].groups, vec![Some("c".into()), Some("d".into())]);
    }

    #[test]
    fn optional_group_that_did_not_participate_is_none() {
        let matches = find_matches(r"a(b)?", "a").unwrap();
        assert_eq!(matches[0].groups, vec![None]);
    }

    #[test]
    fn no_matches_is_empty_not_error() {
        assert!(find_matches(r"z+", "abc").unwrap().is_empty());
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        assert!(find_matches(r"(unclosed", "x").is_err());
        assert!(replace_all(r"[z-a]", "x", "y").is_err());
    }

    #[test]
    fn replace_supports_group_references() {
        let out = replace_all(r"(\w+)=(\w+)", "a=1 b=2", "$2:$1").unwrap();
        assert_eq!(out, "1:a 2:b");
    }
}
