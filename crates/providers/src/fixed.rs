use crate::{ProviderError, SuggestionProvider};
use std::sync::Mutex;

/// Provider that answers every keyword with the same canned list.
///
/// Records the keywords it was asked for so callers can assert on them.
#[derive(Debug, Default)]
pub struct FixedProvider {
    suggestions: Vec<String>,
    calls: Mutex<Vec<String>>,
}

impl FixedProvider {
    pub fn new<I, S>(suggestions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            suggestions: suggestions.into_iter().map(Into::into).collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl SuggestionProvider for FixedProvider {
    async fn suggest(&self, keyword: &str) -> Result<Vec<String>, ProviderError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(keyword.to_string());
        }
        Ok(self.suggestions.clone())
    }
}
