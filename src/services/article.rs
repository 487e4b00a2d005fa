// Article Fetching Service
// Retrieves an article URL and extracts the plain text of its <article> body

use regex::Regex;
use reqwest::Client;
use std::time::Instant;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("article request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("article request returned status {status}")]
    Status { status: u16 },
    #[error("page contains no <article> element")]
    NoArticleElement,
}

pub struct ArticleFetcher {
    client: Client,
}

impl Default for ArticleFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleFetcher {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();
        Self { client }
    }

    /// Fetch a URL and return the text content of its first `<article>`
    /// element, tags stripped and whitespace collapsed.
    pub async fn fetch_article(&self, url: &str) -> Result<String, FetchError> {
        let start = Instant::now();

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let html = response.text().await?;
        let text = extract_article_text(&html)?;

        info!(
            url,
            bytes = html.len(),
            extracted_chars = text.chars().count(),
            latency_ms = start.elapsed().as_millis() as i64,
            "article.fetched"
        );

        Ok(text)
    }
}

/// Pull the plain text out of the first `<article>` element of an HTML page.
fn extract_article_text(html: &str) -> Result<String, FetchError> {
    let article_re =
        Regex::new(r"(?is)<article\b[^>]*>(.*?)</article\s*>").unwrap();
    let body = article_re
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .ok_or(FetchError::NoArticleElement)?;

    // Script and style subtrees carry no prose.
    let script_re = Regex::new(r"(?is)<(script|style)\b[^>]*>.*?</(script|style)\s*>").unwrap();
    let without_code = script_re.replace_all(body, " ");

    let tag_re = Regex::new(r"(?s)<[^>]+>").unwrap();
    let without_tags = tag_re.replace_all(&without_code, " ");

    let decoded = decode_entities(&without_tags);

    let ws_re = Regex::new(r"\s+").unwrap();
    Ok(ws_re.replace_all(&decoded, " ").trim().to_string())
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_article_text() {
        let html = r#"<html><body>
            <nav>Menu</nav>
            <article class="post">
              <h1>Title.</h1>
              <p>First paragraph.</p>
              <p>Second &amp; final paragraph!</p>
            </article>
            <footer>Footer</footer>
        </body></html>"#;
        let text = extract_article_text(html).unwrap();
        assert_eq!(text, "Title. First paragraph. Second & final paragraph!");
    }

    #[test]
    fn test_extract_strips_scripts() {
        let html = "<article><p>Kept.</p><script>var x = 'dropped';</script></article>";
        let text = extract_article_text(html).unwrap();
        assert_eq!(text, "Kept.");
    }

    #[test]
    fn test_extract_missing_article() {
        let err = extract_article_text("<html><body><p>No article here.</p></body></html>")
            .unwrap_err();
        assert!(matches!(err, FetchError::NoArticleElement));
    }
}
