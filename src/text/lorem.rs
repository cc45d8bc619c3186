//! Lorem ipsum generation.
//!
//! Sentences are assembled from the canonical word pool: 6-12 words each,
//! first word capitalized, 3-5 sentences per paragraph. Passing a seed makes
//! the output reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const WORDS: &[&str] = &[
    "lorem",
    "ipsum",
    "dolor",
    "sit",
    "amet",
    "consectetur",
    "adipiscing",
    "elit",
    "sed",
    "do",
    "eiusmod",
    "tempor",
    "incididunt",
    "ut",
    "labore",
    "et",
    "dolore",
    "magna",
    "aliqua",
    "enim",
    "ad",
    "minim",
    "veniam",
    "quis",
    "nostrud",
    "exercitation",
    "ullamco",
    "laboris",
    "nisi",
    "aliquip",
    "ex",
    "ea",
    "commodo",
    "consequat",
    "duis",
    "aute",
    "irure",
    "voluptate",
];

/// Generate `paragraphs` paragraphs, separated by blank lines.
pub fn generate(paragraphs: u32, seed: Option<u64>) -> String {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut out = Vec::with_capacity(paragraphs as usize);
    for _ in 0..paragraphs {
        let sentence_count = rng.random_range(3..=5);
        let sentences: Vec<String> = (0..sentence_count).map(|_| sentence(&mut rng)).collect();
        out.push(sentences.join(" "));
    }
    out.join("\n\n")
}

fn sentence(rng: &mut StdRng) -> String {
    let word_count = rng.random_range(6..=12);
    let mut words: Vec<&str> = (0..word_count)
        .map(|_| WORDS[rng.random_range(0..WORDS.len())])
        .collect();
    // The classic opener shows up often enough to be recognizable
    if rng.random_range(0..8) == 0 {
        words[0] = "lorem";
        if words.len() > 1 {
            words[1] = "ipsum";
        }
    }
    let mut s = words.join(" ");
    if let Some(first) = s.get(..1) {
        let upper = first.to_uppercase();
        s.replace_range(..1, &upper);
    }
    s.push('.');
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_requested_paragraph_count() {
        let text = generate(4, Some(42));
        assert_eq!(text.split("\n\n").count(), 4);
    }

    #[test]
    fn same_seed_same_output() {
        assert_eq!(generate(3, Some(7)), generate(3, Some(7)));
    }

    #[test]
    fn different_seeds_differ() {
        assert_ne!(generate(3, Some(1)), generate(3, Some(2)));
    }

    #[test]
    fn sentences_are_capitalized_and_terminated() {
        let text = generate(1, Some(99));
        for sentence in text.split(". ") {
            let first = sentence.chars().next().unwrap();
            assert!(first.is_uppercase(), "sentence starts lowercase: {sentence}");
        }
        assert!(text.ends_with('.'));
    }

    #[test]
    fn paragraphs_hold_three_to_five_sentences() {
        let text = generate(6, Some(5));
        for para in text.split("\n\n") {
            let sentences = para.matches(". ").count() + 1;
            assert!((3..=5).contains(&sentences), "got {sentences}: {para}");
        }
    }
}
