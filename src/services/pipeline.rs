// Analysis Pipeline
// Orchestrates segmentation, embedding, the three statistic groups, and
// score combination into a single analyze() call

use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tokio::task;
use tracing::info;

use crate::models::{AnalysisReport, SignalBreakdown};
use crate::services::embedding::{EmbeddingError, EmbeddingProvider};
use crate::services::lexical::{
    self, length_variance, repetition_rate, sentence_lengths, vocabulary_richness,
};
use crate::services::scoring::{combine, SignalSummary};
use crate::services::segmenter::{segment_sentences, tokenize};
use crate::services::similarity::{mean_similarity, pairwise_similarities};

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("no sentences could be segmented from the input text")]
    InsufficientContent,
    #[error(transparent)]
    Lexical(#[from] lexical::LexicalError),
    #[error(transparent)]
    Embedding(#[from] EmbeddingError),
    #[error("analysis task failed: {0}")]
    Task(#[from] task::JoinError),
}

/// One analysis per call; no state is shared across calls. The only
/// suspension point is the embedding request, awaited exactly once; dropping
/// the returned future cancels it and no partial score is produced.
pub struct AnalysisPipeline {
    provider: Arc<dyn EmbeddingProvider>,
}

impl AnalysisPipeline {
    pub fn new(provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self { provider }
    }

    pub async fn analyze(&self, text: &str) -> Result<AnalysisReport, AnalysisError> {
        let start = Instant::now();

        let sentences = segment_sentences(text);
        if sentences.is_empty() {
            return Err(AnalysisError::InsufficientContent);
        }
        let tokens = tokenize(text);
        if tokens.is_empty() {
            // Punctuation-only input: richness is undefined, so fail before
            // spending an embedding call.
            return Err(lexical::LexicalError::DegenerateInput.into());
        }

        self.provider.ensure_ready().await?;
        let embeddings = self.provider.embed(&sentences).await?;
        if embeddings.rows() != sentences.len() {
            return Err(EmbeddingError::RowCountMismatch {
                expected: sentences.len(),
                actual: embeddings.rows(),
            }
            .into());
        }

        // The three statistic groups are pure and independent; fan out on
        // blocking tasks and join before combining.
        let sentence_count = sentences.len();
        let word_count = tokens.len();

        let similarity_task = task::spawn_blocking(move || {
            let scores = pairwise_similarities(&embeddings);
            mean_similarity(&scores)
        });
        let variance_task =
            task::spawn_blocking(move || length_variance(&sentence_lengths(&sentences)));
        let lexical_task = task::spawn_blocking(move || {
            let richness = vocabulary_richness(&tokens)?;
            let repetition = repetition_rate(&tokens)?;
            Ok::<_, lexical::LexicalError>((richness, repetition))
        });

        let (similarity, variance, lexical_stats) =
            tokio::try_join!(similarity_task, variance_task, lexical_task)?;
        let (richness, repetition) = lexical_stats?;

        let signals = SignalSummary {
            mean_similarity: similarity,
            length_variance: variance,
            vocabulary_richness: richness,
            repetition_rate: repetition,
        };
        let percentage = combine(&signals);
        let display = format!("{:.2}% written in AI", percentage);

        info!(
            sentences = sentence_count,
            words = word_count,
            mean_similarity = similarity.unwrap_or(-1.0),
            length_variance = variance,
            vocabulary_richness = richness,
            repetition_rate = repetition,
            percentage,
            elapsed_ms = start.elapsed().as_millis() as i64,
            "pipeline.analysis_complete"
        );

        Ok(AnalysisReport {
            percentage,
            display,
            signals: SignalBreakdown {
                mean_similarity: similarity,
                length_variance: variance,
                vocabulary_richness: richness,
                repetition_rate: repetition,
            },
            sentence_count,
            word_count,
        })
    }
}
