// Score Combination
// Maps the four lexical/semantic signals to a bounded AI-likelihood percentage

/// Mean pairwise similarity above this reads as suspiciously uniform meaning.
pub const SIMILARITY_THRESHOLD: f64 = 0.90;
pub const SIMILARITY_WEIGHT: f64 = 100.0;

/// Sentence-length variance below this reads as unnaturally even pacing.
pub const VARIANCE_THRESHOLD: f64 = 20.0;
pub const VARIANCE_WEIGHT: f64 = 2.5;

/// Type-token ratio below this reads as a narrow vocabulary.
pub const RICHNESS_THRESHOLD: f64 = 0.30;
pub const RICHNESS_WEIGHT: f64 = 100.0;

/// Repetition rate above this reads as recycled word choice.
pub const REPETITION_THRESHOLD: f64 = 0.05;
pub const REPETITION_WEIGHT: f64 = 200.0;

/// The four scalar signals feeding the combiner.
///
/// `mean_similarity` is `None` when the input had fewer than two sentences
/// (no pairs exist); that term then contributes zero by policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalSummary {
    pub mean_similarity: Option<f64>,
    pub length_variance: f64,
    pub vocabulary_richness: f64,
    pub repetition_rate: f64,
}

/// Combine the signals into a score in [0, 100].
///
/// Each term is an independent thresholded linear contribution, active only
/// beyond its threshold; contributions are summed and the total clamped.
/// No interaction terms.
pub fn combine(signals: &SignalSummary) -> f64 {
    let mut score = 0.0;

    if let Some(similarity) = signals.mean_similarity {
        if similarity > SIMILARITY_THRESHOLD {
            score += (similarity - SIMILARITY_THRESHOLD) * SIMILARITY_WEIGHT;
        }
    }
    if signals.length_variance < VARIANCE_THRESHOLD {
        score += (VARIANCE_THRESHOLD - signals.length_variance) * VARIANCE_WEIGHT;
    }
    if signals.vocabulary_richness < RICHNESS_THRESHOLD {
        score += (RICHNESS_THRESHOLD - signals.vocabulary_richness) * RICHNESS_WEIGHT;
    }
    if signals.repetition_rate > REPETITION_THRESHOLD {
        score += (signals.repetition_rate - REPETITION_THRESHOLD) * REPETITION_WEIGHT;
    }

    score.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calm() -> SignalSummary {
        // All four signals on the human side of their thresholds.
        SignalSummary {
            mean_similarity: Some(0.80),
            length_variance: 30.0,
            vocabulary_richness: 0.50,
            repetition_rate: 0.02,
        }
    }

    #[test]
    fn test_all_calm_scores_zero() {
        assert_eq!(combine(&calm()), 0.0);
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        // Signals exactly at threshold contribute nothing.
        let signals = SignalSummary {
            mean_similarity: Some(SIMILARITY_THRESHOLD),
            length_variance: VARIANCE_THRESHOLD,
            vocabulary_richness: RICHNESS_THRESHOLD,
            repetition_rate: REPETITION_THRESHOLD,
        };
        assert_eq!(combine(&signals), 0.0);
    }

    #[test]
    fn test_similarity_term() {
        let mut signals = calm();
        signals.mean_similarity = Some(0.95);
        let score = combine(&signals);
        assert!((score - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_variance_term() {
        let mut signals = calm();
        signals.length_variance = 10.0;
        assert!((combine(&signals) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_richness_term() {
        let mut signals = calm();
        signals.vocabulary_richness = 0.20;
        assert!((combine(&signals) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_repetition_term() {
        let mut signals = calm();
        signals.repetition_rate = 0.15;
        assert!((combine(&signals) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_terms_are_additive() {
        let signals = SignalSummary {
            mean_similarity: Some(0.95),
            length_variance: 10.0,
            vocabulary_richness: 0.20,
            repetition_rate: 0.15,
        };
        assert!((combine(&signals) - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_clamped_to_hundred() {
        let signals = SignalSummary {
            mean_similarity: Some(1.0),
            length_variance: 0.0,
            vocabulary_richness: 0.0,
            repetition_rate: 1.0,
        };
        assert_eq!(combine(&signals), 100.0);
    }

    #[test]
    fn test_missing_similarity_contributes_zero() {
        let mut with = calm();
        with.mean_similarity = Some(0.99);
        let mut without = with;
        without.mean_similarity = None;
        assert_eq!(combine(&without), 0.0);
        assert!(combine(&with) > combine(&without));
    }

    #[test]
    fn test_monotonic_in_each_signal() {
        let base = SignalSummary {
            mean_similarity: Some(0.92),
            length_variance: 15.0,
            vocabulary_richness: 0.25,
            repetition_rate: 0.10,
        };
        let score = combine(&base);

        let mut higher_sim = base;
        higher_sim.mean_similarity = Some(0.96);
        assert!(combine(&higher_sim) >= score);

        let mut higher_var = base;
        higher_var.length_variance = 18.0;
        assert!(combine(&higher_var) <= score);

        let mut richer = base;
        richer.vocabulary_richness = 0.28;
        assert!(combine(&richer) <= score);

        let mut more_repetitive = base;
        more_repetitive.repetition_rate = 0.20;
        assert!(combine(&more_repetitive) >= score);
    }

    #[test]
    fn test_score_bounds() {
        for sim in [None, Some(-1.0), Some(0.5), Some(0.95), Some(1.0)] {
            for var in [0.0, 5.0, 19.9, 20.0, 500.0] {
                for rich in [0.01, 0.3, 1.0] {
                    for rep in [0.0, 0.05, 0.5, 1.0] {
                        let score = combine(&SignalSummary {
                            mean_similarity: sim,
                            length_variance: var,
                            vocabulary_richness: rich,
                            repetition_rate: rep,
                        });
                        assert!((0.0..=100.0).contains(&score));
                    }
                }
            }
        }
    }
}
