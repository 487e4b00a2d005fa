// Inkprobe Core Services

pub mod article;
pub mod embedding;
pub mod lexical;
pub mod pipeline;
pub mod scoring;
pub mod segmenter;
pub mod similarity;

pub use article::{ArticleFetcher, FetchError};
pub use embedding::{EmbeddingError, EmbeddingMatrix, EmbeddingProvider, RemoteEmbeddingClient};
pub use lexical::{
    length_variance, repetition_rate, sentence_lengths, vocabulary_richness, LexicalError,
};
pub use pipeline::{AnalysisError, AnalysisPipeline};
pub use scoring::{combine, SignalSummary};
pub use segmenter::{segment_sentences, tokenize};
pub use similarity::{mean_similarity, pairwise_similarities};
