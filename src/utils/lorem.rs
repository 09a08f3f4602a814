//! Placeholder text generation for synthetic records.

use rand::Rng;
use rand::seq::IndexedRandom;

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in", "reprehenderit",
    "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur", "excepteur", "sint",
    "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui", "officia", "deserunt",
    "mollit", "anim", "id", "est", "laborum",
];

/// Word count range for a single sentence.
const SENTENCE_WORDS: std::ops::RangeInclusive<usize> = 4..=8;

/// Returns one random word.
pub fn word<R: Rng>(rng: &mut R) -> &'static str {
    WORDS.choose(rng).copied().unwrap_or("lorem")
}

/// Generates a capitalised sentence ending with a period.
pub fn sentence<R: Rng>(rng: &mut R) -> String {
    let count = rng.random_range(SENTENCE_WORDS);
    let words: Vec<&str> = (0..count).map(|_| word(&mut *rng)).collect();
    capitalize(&format!("{}.", words.join(" ")))
}

/// Generates paragraph text made of whole sentences, at most `max_chars` long.
///
/// A first sentence longer than `max_chars` is cut at a word boundary.
pub fn text<R: Rng>(rng: &mut R, max_chars: usize) -> String {
    let mut out = sentence(rng);
    if out.len() > max_chars {
        return truncate_words(&out, max_chars);
    }

    loop {
        let next = sentence(rng);
        if out.len() + 1 + next.len() > max_chars {
            break;
        }
        out.push(' ');
        out.push_str(&next);
    }

    out
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn truncate_words(s: &str, max_chars: usize) -> String {
    let mut out = String::new();
    for w in s.split(' ') {
        let extra = if out.is_empty() { w.len() } else { w.len() + 1 };
        if out.len() + extra > max_chars {
            break;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(w);
    }
    out
}
