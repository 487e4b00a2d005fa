// Text Segmentation Service
// Splits raw text into sentences and word tokens

use regex::Regex;

/// Split text into sentences.
///
/// A sentence is a maximal run of non-terminal characters followed by one or
/// more terminal punctuation marks (., !, ?), with the punctuation kept
/// attached. Matches that are empty after trimming are discarded; text with
/// no terminal punctuation yields no sentences.
pub fn segment_sentences(text: &str) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }

    let re = Regex::new(r"[^.!?]+[.!?]+").unwrap();
    re.find_iter(text)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Extract word tokens: maximal runs of word characters (letters, digits,
/// underscore). Punctuation and whitespace are separators, not tokens.
/// Case-sensitive, no stemming or normalization.
pub fn tokenize(text: &str) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }

    let re = Regex::new(r"\w+").unwrap();
    re.find_iter(text).map(|m| m.as_str().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_basic() {
        let sentences = segment_sentences("A. B! C?");
        assert_eq!(sentences, vec!["A.", "B!", "C?"]);
    }

    #[test]
    fn test_segment_keeps_punctuation_runs() {
        let sentences = segment_sentences("Really?! Yes... maybe.");
        assert_eq!(sentences, vec!["Really?!", "Yes...", "maybe."]);
    }

    #[test]
    fn test_segment_no_terminal_punctuation() {
        assert!(segment_sentences("no punctuation here").is_empty());
        assert!(segment_sentences("").is_empty());
    }

    #[test]
    fn test_segment_trailing_fragment_dropped() {
        let sentences = segment_sentences("Done. trailing fragment");
        assert_eq!(sentences, vec!["Done."]);
    }

    #[test]
    fn test_tokenize_words() {
        let tokens = tokenize("the the the");
        assert_eq!(tokens, vec!["the", "the", "the"]);
    }

    #[test]
    fn test_tokenize_separators_and_case() {
        let tokens = tokenize("Hello, world_2! HELLO?");
        assert_eq!(tokens, vec!["Hello", "world_2", "HELLO"]);
    }

    #[test]
    fn test_tokenize_punctuation_only() {
        assert!(tokenize("... !!! ???").is_empty());
    }
}
