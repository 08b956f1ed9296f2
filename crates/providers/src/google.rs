use crate::{get_suggestions, ProviderError, SuggestionProvider};
use reqwest::Client;
use tracing::debug;

pub const GOOGLE_SUGGEST_URL: &str = "http://suggestqueries.google.com";

#[derive(Clone)]
pub struct GoogleProvider {
    client: Client,
    base_url: String,
}

impl GoogleProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for GoogleProvider {
    fn default() -> Self {
        Self::new(GOOGLE_SUGGEST_URL)
    }
}

#[async_trait::async_trait]
impl SuggestionProvider for GoogleProvider {
    async fn suggest(&self, keyword: &str) -> Result<Vec<String>, ProviderError> {
        let url = format!("{}/complete/search", self.base_url);
        debug!(%url, keyword, "google suggest");
        get_suggestions(&self.client, &url, &[("client", "firefox"), ("q", keyword)]).await
    }
}
