//! Naive extractive summarizer.
//!
//! Picks the highest scoring sentences by word frequency and returns them in
//! their original order. No external calls, no state.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Sentences kept by `GET /summary`
pub const SUMMARY_MAX_SENTENCES: usize = 3;

/// Words skipped when counting frequencies. Matched against lowercased
/// tokens, so the capitalised "I" never matches anything.
const STOPWORDS: &[&str] = &[
    "the", "and", "is", "in", "it", "to", "a", "of", "for", "on", "that", "this", "with", "as",
    "are", "was", "be", "I", "you",
];

// A sentence ends at . ! or ? followed by whitespace
static SENTENCE_BREAK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]\s+").unwrap());
static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

/// Summarize `text` down to at most `max_sentences` sentences.
pub fn summarize(text: &str, max_sentences: usize) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let sentences = split_sentences(trimmed);
    if sentences.len() <= max_sentences {
        return sentences.join(" ");
    }

    let freq = word_frequencies(text);
    let scores: Vec<usize> = sentences.iter().map(|s| score_sentence(s, &freq)).collect();

    // sort_by is stable: equal scores keep their input order
    let mut ranked: Vec<usize> = (0..sentences.len()).collect();
    ranked.sort_by(|&a, &b| scores[b].cmp(&scores[a]));

    let best: Vec<&str> = ranked
        .iter()
        .take(max_sentences)
        .map(|&i| sentences[i])
        .collect();

    // Membership is by text, so a duplicate of a chosen sentence is kept too
    sentences
        .iter()
        .filter(|s| best.contains(*s))
        .take(max_sentences)
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split on sentence boundaries, keeping the punctuation and dropping the
/// whitespace run that follows it.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for m in SENTENCE_BREAK_RE.find_iter(text) {
        // the terminator is a single ASCII byte
        sentences.push(&text[start..m.start() + 1]);
        start = m.end();
    }
    sentences.push(&text[start..]);
    sentences
}

fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD_RE
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

fn word_frequencies(text: &str) -> HashMap<String, usize> {
    let mut freq = HashMap::new();
    for word in tokenize(text) {
        if STOPWORDS.contains(&word.as_str()) {
            continue;
        }
        *freq.entry(word).or_insert(0) += 1;
    }
    freq
}

fn score_sentence(sentence: &str, freq: &HashMap<String, usize>) -> usize {
    tokenize(sentence)
        .iter()
        .map(|w| freq.get(w).copied().unwrap_or(0))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(summarize("", 3), "");
        assert_eq!(summarize("   \n\t", 3), "");
    }

    #[test]
    fn test_short_text_returned_unchanged() {
        assert_eq!(summarize("One. Two. Three.", 3), "One. Two. Three.");
        assert_eq!(summarize("  Just one sentence  ", 3), "Just one sentence");
    }

    #[test]
    fn test_split_sentences() {
        assert_eq!(
            split_sentences("Hi!   How are you?\nFine."),
            vec!["Hi!", "How are you?", "Fine."]
        );
        // no whitespace after the dot, no break
        assert_eq!(split_sentences("Pi is 3.14 today."), vec!["Pi is 3.14 today."]);
        // abbreviations are split naively
        assert_eq!(split_sentences("See e.g. this"), vec!["See e.g.", "this"]);
    }

    #[test]
    fn test_short_text_whitespace_is_normalised() {
        assert_eq!(summarize("Hi!   How are you?\nFine.", 3), "Hi! How are you? Fine.");
    }

    #[test]
    fn test_highest_scoring_sentences_in_original_order() {
        let text = "Rust is fast. Cats sleep. Rust is safe and rust is fun. Dogs bark.";
        // rust=3, fast/cats/sleep/safe/fun/dogs/bark=1
        assert_eq!(summarize(text, 2), "Rust is fast. Rust is safe and rust is fun.");
    }

    #[test]
    fn test_ties_keep_input_order() {
        assert_eq!(summarize("Alpha. Beta. Gamma. Delta.", 2), "Alpha. Beta.");
    }

    #[test]
    fn test_capital_i_is_not_a_stopword() {
        // "i" counts 3 times, so the "I ..." sentences outrank "Cats nap."
        let text = "I run. I jump. I swim. Cats nap.";
        assert_eq!(summarize(text, 1), "I run.");
    }

    #[test]
    fn test_lowercase_stopwords_are_ignored() {
        let text = "You you you. Cats nap. Dogs run. Owls hoot.";
        assert_eq!(summarize(text, 1), "Cats nap.");
    }

    #[test]
    fn test_duplicate_sentence_kept_by_text_membership() {
        // scores: 4, 6, 4, 10, 1 -> chosen by rank: "Birds..", "Dogs..", first "Cats purr."
        // the second "Cats purr." matches by text and crowds out "Birds.."
        let text = "Cats purr. Dogs bark loudly dogs. Cats purr. Birds sing sing sing. Fish.";
        assert_eq!(
            summarize(text, 3),
            "Cats purr. Dogs bark loudly dogs. Cats purr."
        );
    }

    #[test]
    fn test_zero_max_sentences() {
        assert_eq!(summarize("A sentence.", 0), "");
    }

    #[test]
    fn test_result_is_ordered_subset() {
        let text = "The build failed on Monday. Nobody noticed the build until Tuesday. \
                    Lunch was pizza. The fix for the build landed Wednesday! \
                    Was the weather nice? Everyone celebrated the fix.";
        let input = split_sentences(text);
        let summary = summarize(text, 3);
        let output = split_sentences(&summary);

        assert!(output.len() <= 3);
        let mut last = None;
        for sentence in output {
            let pos = input.iter().position(|s| *s == sentence).unwrap();
            if let Some(prev) = last {
                assert!(pos > prev);
            }
            last = Some(pos);
        }
    }

    #[test]
    fn test_idempotent() {
        let text = "Apples are red. Bananas are yellow. Apples grow on trees. Grapes are small.";
        assert_eq!(summarize(text, 2), summarize(text, 2));
    }
}
