use crate::error::{Result, ScraperError};
use crate::models::{KeywordList, Provider};
use crate::notify::{Notifier, NOTIFY_MESSAGE, NOTIFY_TITLE};
use crate::settings::Settings;
use providers::ProviderRegistry;
use tracing::{info, warn};

/// Fetches suggestions for `keyword` from the provider named in settings.
///
/// The call is awaited in place. When `notification_alert` is on, the
/// notification is the last step; a failing notifier is logged and ignored.
pub async fn fetch_keywords(
    registry: &ProviderRegistry,
    settings: &Settings,
    notifier: &dyn Notifier,
    keyword: &str,
) -> Result<KeywordList> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Err(ScraperError::EmptyKeyword);
    }
    let provider: Provider = settings.api_source.parse()?;
    info!(%provider, keyword, "fetching related keywords");

    let suggestions = registry.get(provider.as_str())?.suggest(keyword).await?;
    info!(%provider, count = suggestions.len(), "related keywords fetched");

    if settings.notification_alert {
        if let Err(e) = notifier.notify(NOTIFY_TITLE, NOTIFY_MESSAGE) {
            warn!(error = %e, "notification failed");
        }
    }
    Ok(KeywordList::new(suggestions))
}
