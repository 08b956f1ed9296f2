//! Search-suggestion providers.
//!
//! Every provider answers the same OpenSearch-style payload: a JSON array
//! whose second element is the list of suggestion strings.

use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

pub mod bing;
pub mod fixed;
pub mod google;

pub use bing::BingProvider;
pub use fixed::FixedProvider;
pub use google::GoogleProvider;

/// Browser-like headers sent with every suggestion request.
pub const BROWSER_HEADERS: [(&str, &str); 3] = [
    (
        "User-Agent",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
    ),
    ("Accept-Language", "en-US,en;q=0.9"),
    ("Accept", "application/json"),
];

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("request failed with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unexpected response format: {0}")]
    UnexpectedShape(String),
    #[error("unknown provider: {0}")]
    UnknownProvider(String),
}

#[async_trait::async_trait]
pub trait SuggestionProvider: Send + Sync {
    async fn suggest(&self, keyword: &str) -> Result<Vec<String>, ProviderError>;
}

/// Extracts the suggestion list from a provider response body.
///
/// The body must be a JSON array with at least two elements, the second
/// being an array of strings. Anything else is a shape error.
pub fn parse_suggestions(body: &str) -> Result<Vec<String>, ProviderError> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| ProviderError::UnexpectedShape(format!("invalid JSON: {e}")))?;
    let outer = value
        .as_array()
        .ok_or_else(|| ProviderError::UnexpectedShape("response is not an array".into()))?;
    if outer.len() < 2 {
        return Err(ProviderError::UnexpectedShape(format!(
            "expected at least 2 elements, got {}",
            outer.len()
        )));
    }
    let inner = outer[1].as_array().ok_or_else(|| {
        ProviderError::UnexpectedShape("second element is not a list".into())
    })?;
    inner
        .iter()
        .map(|v| {
            v.as_str().map(str::to_string).ok_or_else(|| {
                ProviderError::UnexpectedShape(format!("suggestion is not a string: {v}"))
            })
        })
        .collect()
}

/// Shared GET-and-parse used by the HTTP providers.
pub(crate) async fn get_suggestions(
    client: &reqwest::Client,
    url: &str,
    query: &[(&str, &str)],
) -> Result<Vec<String>, ProviderError> {
    let mut builder = client.get(url).query(query);
    for (name, value) in BROWSER_HEADERS {
        builder = builder.header(name, value);
    }
    let resp = builder
        .send()
        .await
        .map_err(|e| ProviderError::Transport(e.to_string()))?;
    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp
            .bytes()
            .await
            .unwrap_or(bytes::Bytes::from_static(b""));
        return Err(ProviderError::Status {
            status: status.as_u16(),
            body: String::from_utf8_lossy(&body).into_owned(),
        });
    }
    let text = resp
        .text()
        .await
        .map_err(|e| ProviderError::Transport(e.to_string()))?;
    parse_suggestions(&text)
}

#[derive(Default, Clone)]
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn SuggestionProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the public google and bing endpoints.
    pub fn with_defaults() -> Self {
        Self::new()
            .with_provider("google", Arc::new(GoogleProvider::default()))
            .with_provider("bing", Arc::new(BingProvider::default()))
    }

    pub fn with_provider(mut self, name: &str, provider: Arc<dyn SuggestionProvider>) -> Self {
        self.providers.insert(name.to_string(), provider);
        self
    }

    pub fn get(&self, name: &str) -> Result<Arc<dyn SuggestionProvider>, ProviderError> {
        self.providers
            .get(name)
            .cloned()
            .ok_or_else(|| ProviderError::UnknownProvider(name.to_string()))
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.providers.keys().cloned().collect();
        names.sort();
        names
    }
}
