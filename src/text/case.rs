//! Case conversion.
//!
//! Two families of conversions share one word-splitting core:
//!
//! - **Prose cases** (upper, lower, sentence, title) operate on the text as
//!   written, preserving whitespace and punctuation.
//! - **Programmer cases** (camel, pascal, snake, kebab) re-tokenize the input
//!   into words — splitting on separators and on lower→upper case boundaries —
//!   and reassemble with the target convention.

use clap::ValueEnum;

/// Target case for a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CaseStyle {
    Upper,
    Lower,
    Sentence,
    Title,
    Camel,
    Pascal,
    Snake,
    Kebab,
}

/// Convert `input` to the requested case.
pub fn convert(input: &str, style: CaseStyle) -> String {
    match style {
        CaseStyle::Upper => input.to_uppercase(),
        CaseStyle::Lower => input.to_lowercase(),
        CaseStyle::Sentence => sentence_case(input),
        CaseStyle::Title => title_case(input),
        CaseStyle::Camel => join_camel(&split_words(input), false),
        CaseStyle::Pascal => join_camel(&split_words(input), true),
        CaseStyle::Snake => split_words(input).join("_"),
        CaseStyle::Kebab => split_words(input).join("-"),
    }
}

/// Lowercase everything, then capitalize the first letter and any letter
/// following sentence-ending punctuation (`.`, `!`, `?`).
fn sentence_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut capitalize_next = true;
    for c in input.chars() {
        if c.is_alphabetic() {
            if capitalize_next {
                out.extend(c.to_uppercase());
                capitalize_next = false;
            } else {
                out.extend(c.to_lowercase());
            }
        } else {
            if matches!(c, '.' | '!' | '?') {
                capitalize_next = true;
            }
            out.push(c);
        }
    }
    out
}

/// Lowercase everything, then capitalize the first letter of each
/// space-separated word. Runs of spaces are preserved.
fn title_case(input: &str) -> String {
    input
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split input into lowercase words.
///
/// Word boundaries are non-alphanumeric characters, lower→upper transitions
/// (`fooBar` → `foo`, `bar`), and acronym ends (`HTTPServer` → `http`,
/// `server`).
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let chars: Vec<char> = input.chars().collect();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            // Break on aB and on the final capital of an acronym (HTTPServer)
            if prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_is_lower) {
                words.push(std::mem::take(&mut current));
            }
        }
        current.extend(c.to_lowercase());
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn join_camel(words: &[String], capitalize_first: bool) -> String {
    words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if i == 0 && !capitalize_first {
                word.clone()
            } else {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            }
        })
        .collect()
}
