// Configuration
// Layered settings: environment variables override config.json in the user
// config directory; built-in defaults cover the rest

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

const DEFAULT_EMBEDDING_URL: &str = "http://127.0.0.1:8080/v1/embeddings";
const DEFAULT_EMBEDDING_MODEL: &str = "all-MiniLM-L6-v2";
const DEFAULT_TIMEOUT_SECS: u64 = 80;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(default)]
    pub embedding: EmbeddingConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddingConfig {
    #[serde(default = "default_embedding_url")]
    pub base_url: String,
    #[serde(default = "default_embedding_model")]
    pub model: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            base_url: default_embedding_url(),
            model: default_embedding_model(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_embedding_url() -> String { DEFAULT_EMBEDDING_URL.to_string() }
fn default_embedding_model() -> String { DEFAULT_EMBEDDING_MODEL.to_string() }
fn default_timeout_secs() -> u64 { DEFAULT_TIMEOUT_SECS }
fn default_host() -> String { DEFAULT_HOST.to_string() }
fn default_port() -> u16 { DEFAULT_PORT }

impl AppConfig {
    /// Load config.json from the user config dir (if present), then apply
    /// environment overrides on top.
    pub fn load() -> Self {
        let mut config = default_config_file()
            .and_then(|path| read_config_file(&path))
            .unwrap_or_default();
        config.apply_env_overrides();
        config
    }

    fn apply_env_overrides(&mut self) {
        if let Some(url) = non_empty_env("INKPROBE_EMBEDDING_URL") {
            self.embedding.base_url = url;
        }
        if let Some(model) = non_empty_env("INKPROBE_EMBEDDING_MODEL") {
            self.embedding.model = model;
        }
        if let Some(key) =
            non_empty_env("INKPROBE_API_KEY").or_else(|| non_empty_env("EMBEDDING_API_KEY"))
        {
            self.embedding.api_key = Some(key);
        }
        if let Some(secs) = non_empty_env("INKPROBE_EMBEDDING_TIMEOUT_SECS")
            .and_then(|s| s.parse().ok())
        {
            self.embedding.timeout_secs = secs;
        }
        if let Some(host) = non_empty_env("INKPROBE_HOST") {
            self.server.host = host;
        }
        if let Some(port) = non_empty_env("INKPROBE_PORT").and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(val) => {
            let v = val.trim();
            if v.is_empty() {
                None
            } else {
                Some(v.to_string())
            }
        }
        Err(_) => None,
    }
}

fn default_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("inkprobe").join("config.json"))
}

fn read_config_file(path: &PathBuf) -> Option<AppConfig> {
    let contents = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&contents) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "config.parse_failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.embedding.timeout_secs, 80);
        assert!(config.embedding.api_key.is_none());
    }

    #[test]
    fn test_partial_config_file_fills_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"embedding": {"model": "bge-small-en"}}"#).unwrap();
        assert_eq!(config.embedding.model, "bge-small-en");
        assert_eq!(config.embedding.base_url, DEFAULT_EMBEDDING_URL);
        assert_eq!(config.server.host, "0.0.0.0");
    }
}
