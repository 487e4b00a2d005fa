// Lexical Statistics Service
// Sentence-length variance, vocabulary richness and repetition rate

use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LexicalError {
    #[error("no word tokens could be extracted from the input")]
    DegenerateInput,
}

/// Whitespace-delimited word count per sentence.
///
/// Deliberately distinct from `segmenter::tokenize`: sentence length counts
/// whitespace-delimited words with punctuation still attached, matching how
/// the length-variance signal is calibrated.
pub fn sentence_lengths(sentences: &[String]) -> Vec<usize> {
    sentences
        .iter()
        .map(|s| s.split_whitespace().count())
        .collect()
}

/// Population variance of sentence lengths (divisor N, not N-1).
pub fn length_variance(lengths: &[usize]) -> f64 {
    if lengths.is_empty() {
        return 0.0;
    }
    let n = lengths.len() as f64;
    let mean = lengths.iter().sum::<usize>() as f64 / n;
    lengths
        .iter()
        .map(|&len| (len as f64 - mean).powi(2))
        .sum::<f64>()
        / n
}

/// Type-token ratio: distinct token values over total token count.
pub fn vocabulary_richness(tokens: &[String]) -> Result<f64, LexicalError> {
    if tokens.is_empty() {
        return Err(LexicalError::DegenerateInput);
    }
    let unique: std::collections::HashSet<&str> =
        tokens.iter().map(|t| t.as_str()).collect();
    Ok(unique.len() as f64 / tokens.len() as f64)
}

/// Fraction of distinct token *types* that occur more than once, relative to
/// the total token count W.
///
/// Note this is a type-level ratio, not an occurrence-level one: three
/// repetitions of one word count as a single repeated type. Kept exactly as
/// the original detector computes it; `test_repetition_rate_type_based` pins
/// the behavior.
pub fn repetition_rate(tokens: &[String]) -> Result<f64, LexicalError> {
    if tokens.is_empty() {
        return Err(LexicalError::DegenerateInput);
    }
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    let repeated_types = counts.values().filter(|&&c| c > 1).count();
    Ok(repeated_types as f64 / tokens.len() as f64)
}
