// Semantic Similarity Service
// Pairwise cosine similarity statistics over sentence embeddings

use crate::services::embedding::EmbeddingMatrix;

/// Cosine similarity of two equal-length vectors: dot(a,b) / (|a|*|b|),
/// which equals 1 - cosine distance. Zero-norm input yields 0.
fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (&x, &y) in a.iter().zip(b.iter()) {
        dot += x as f64 * y as f64;
        norm_a += x as f64 * x as f64;
        norm_b += y as f64 * y as f64;
    }
    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 {
        return 0.0;
    }
    dot / denom
}

/// Similarity for every unordered sentence pair (i < j). The result holds
/// N*(N-1)/2 scores; ordering is unspecified and must not be relied on.
pub fn pairwise_similarities(embeddings: &EmbeddingMatrix) -> Vec<f64> {
    let n = embeddings.rows();
    let mut similarities = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            similarities.push(cosine_similarity(embeddings.row(i), embeddings.row(j)));
        }
    }
    similarities
}

/// Arithmetic mean of the pairwise scores, or `None` when there are no pairs
/// (fewer than two sentences). The caller treats `None` as a
/// non-contributing similarity term rather than an error.
pub fn mean_similarity(scores: &[f64]) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    Some(scores.iter().sum::<f64>() / scores.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: Vec<Vec<f32>>) -> EmbeddingMatrix {
        EmbeddingMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_identical_vectors() {
        let m = matrix(vec![vec![0.6, 0.8], vec![0.6, 0.8]]);
        let sims = pairwise_similarities(&m);
        assert_eq!(sims.len(), 1);
        assert!((sims[0] - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_orthogonal_vectors() {
        let m = matrix(vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
        let sims = pairwise_similarities(&m);
        assert!(sims[0].abs() < 1e-10);
    }

    #[test]
    fn test_magnitude_invariance() {
        let m = matrix(vec![vec![1.0, 2.0, 3.0], vec![2.0, 4.0, 6.0]]);
        let sims = pairwise_similarities(&m);
        assert!((sims[0] - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_pair_count() {
        let m = matrix(vec![vec![1.0], vec![2.0], vec![3.0], vec![4.0]]);
        assert_eq!(pairwise_similarities(&m).len(), 6);
    }

    #[test]
    fn test_zero_norm_row() {
        let m = matrix(vec![vec![0.0, 0.0], vec![1.0, 0.0]]);
        let sims = pairwise_similarities(&m);
        assert_eq!(sims[0], 0.0);
    }

    #[test]
    fn test_mean_similarity() {
        let mean = mean_similarity(&[0.2, 0.4, 0.6]).unwrap();
        assert!((mean - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_mean_similarity_no_pairs() {
        assert_eq!(mean_similarity(&[]), None);

        let single = matrix(vec![vec![1.0, 2.0]]);
        assert!(pairwise_similarities(&single).is_empty());
    }
}
