// Embedding Provider Service
// Sentence-embedding collaborator: trait seam, validated matrix type, and a
// remote client for OpenAI-compatible /embeddings endpoints

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::{info, warn};

use crate::config::EmbeddingConfig;

#[derive(Error, Debug)]
pub enum EmbeddingError {
    #[error("embedding model unavailable: {0}")]
    ModelUnavailable(String),
    #[error("embedding request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("embedding API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("malformed embedding response: {0}")]
    MalformedResponse(String),
    #[error("embedding count mismatch: expected {expected} rows, got {actual}")]
    RowCountMismatch { expected: usize, actual: usize },
}

/// Fixed-shape sentence embedding matrix: one row per sentence, row-major.
///
/// Constructed only through `from_rows`, which rejects ragged input, so a
/// value of this type always has `rows * dims` elements.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingMatrix {
    rows: usize,
    dims: usize,
    data: Vec<f32>,
}

impl EmbeddingMatrix {
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self, EmbeddingError> {
        let dims = rows.first().map(|r| r.len()).unwrap_or(0);
        if rows.iter().any(|r| r.len() != dims) {
            return Err(EmbeddingError::MalformedResponse(
                "ragged embedding rows".to_string(),
            ));
        }
        let count = rows.len();
        let mut data = Vec::with_capacity(count * dims);
        for row in rows {
            data.extend_from_slice(&row);
        }
        Ok(Self {
            rows: count,
            dims,
            data,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn dims(&self) -> usize {
        self.dims
    }

    pub fn row(&self, i: usize) -> &[f32] {
        &self.data[i * self.dims..(i + 1) * self.dims]
    }
}

/// Maps an ordered sequence of sentences to an embedding matrix.
///
/// `ensure_ready` is the explicit initialize-once lifecycle: implementations
/// must be safe to call it concurrently and repeatedly, and `embed` must not
/// be relied on to self-initialize.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    async fn ensure_ready(&self) -> Result<(), EmbeddingError>;

    async fn embed(&self, sentences: &[String]) -> Result<EmbeddingMatrix, EmbeddingError>;
}

#[derive(Debug, Clone, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingRow>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingRow {
    index: usize,
    embedding: Vec<f32>,
}

/// Client for a remote embedding model behind an OpenAI-compatible
/// `/embeddings` endpoint.
pub struct RemoteEmbeddingClient {
    client: Client,
    url: String,
    model: String,
    api_key: Option<String>,
    ready: OnceCell<()>,
}

impl RemoteEmbeddingClient {
    pub fn new(config: &EmbeddingConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_default();

        Self {
            client,
            url: config.base_url.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            ready: OnceCell::new(),
        }
    }

    async fn request_embeddings(
        &self,
        sentences: &[String],
    ) -> Result<EmbeddingMatrix, EmbeddingError> {
        let request = EmbeddingRequest {
            model: &self.model,
            input: sentences,
        };

        let start = Instant::now();

        let mut builder = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.header("Authorization", format!("Bearer {}", key));
        }

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EmbeddingError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let data: EmbeddingResponse = response
            .json()
            .await
            .map_err(|e| EmbeddingError::MalformedResponse(e.to_string()))?;

        // The API is allowed to return rows out of order; restore input order
        // before building the matrix.
        let mut rows = data.data;
        rows.sort_by_key(|r| r.index);
        let matrix = EmbeddingMatrix::from_rows(rows.into_iter().map(|r| r.embedding).collect())?;

        if matrix.rows() != sentences.len() {
            return Err(EmbeddingError::RowCountMismatch {
                expected: sentences.len(),
                actual: matrix.rows(),
            });
        }

        info!(
            sentences = sentences.len(),
            dims = matrix.dims(),
            latency_ms = start.elapsed().as_millis() as i64,
            "embedding.request_complete"
        );

        Ok(matrix)
    }
}

#[async_trait]
impl EmbeddingProvider for RemoteEmbeddingClient {
    /// Warms the remote model with a single probe sentence, exactly once per
    /// client. Failures are surfaced as `ModelUnavailable` and are retried on
    /// the next call since the cell stays empty after an error.
    async fn ensure_ready(&self) -> Result<(), EmbeddingError> {
        self.ready
            .get_or_try_init(|| async {
                let probe = vec!["warmup.".to_string()];
                match self.request_embeddings(&probe).await {
                    Ok(matrix) => {
                        info!(dims = matrix.dims(), "embedding.model_ready");
                        Ok(())
                    }
                    Err(e) => {
                        warn!(error = %e, "embedding.warmup_failed");
                        Err(EmbeddingError::ModelUnavailable(e.to_string()))
                    }
                }
            })
            .await
            .map(|_| ())
    }

    async fn embed(&self, sentences: &[String]) -> Result<EmbeddingMatrix, EmbeddingError> {
        self.request_embeddings(sentences).await
    }
}
