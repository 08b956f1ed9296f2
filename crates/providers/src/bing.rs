use crate::{get_suggestions, ProviderError, SuggestionProvider};
use reqwest::Client;
use tracing::debug;

pub const BING_SUGGEST_URL: &str = "https://api.bing.com";

#[derive(Clone)]
pub struct BingProvider {
    client: Client,
    base_url: String,
}

impl BingProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for BingProvider {
    fn default() -> Self {
        Self::new(BING_SUGGEST_URL)
    }
}

#[async_trait::async_trait]
impl SuggestionProvider for BingProvider {
    async fn suggest(&self, keyword: &str) -> Result<Vec<String>, ProviderError> {
        let url = format!("{}/osjson.aspx", self.base_url);
        debug!(%url, keyword, "bing suggest");
        get_suggestions(&self.client, &url, &[("query", keyword)]).await
    }
}
