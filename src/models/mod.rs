// Inkprobe Data Models
// Wire-format request/response types for the analysis API

use serde::{Deserialize, Serialize};

// ============ Analyze Request ============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeTextRequest {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeArticleQuery {
    pub url: String,
}

// ============ Signal Breakdown ============

/// Per-signal values behind a score, surfaced so callers can see which
/// signals drove the verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalBreakdown {
    /// Mean pairwise cosine similarity; absent when the input had fewer
    /// than two sentences.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_similarity: Option<f64>,
    pub length_variance: f64,
    pub vocabulary_richness: f64,
    pub repetition_rate: f64,
}

// ============ Analysis Report ============

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// AI-likelihood score in [0, 100].
    pub percentage: f64,
    /// Human-readable rendering: "<two decimals>% written in AI".
    pub display: String,
    pub signals: SignalBreakdown,
    pub sentence_count: usize,
    pub word_count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleAnalysisResponse {
    pub ai_written_percentage: String,
    pub report: AnalysisReport,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serializes_camel_case() {
        let report = AnalysisReport {
            percentage: 12.5,
            display: "12.50% written in AI".to_string(),
            signals: SignalBreakdown {
                mean_similarity: None,
                length_variance: 4.0,
                vocabulary_richness: 0.8,
                repetition_rate: 0.1,
            },
            sentence_count: 3,
            word_count: 42,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["sentenceCount"], 3);
        assert_eq!(json["signals"]["lengthVariance"], 4.0);
        // Absent similarity is omitted, not serialized as null.
        assert!(json["signals"].get("meanSimilarity").is_none());
    }
}
