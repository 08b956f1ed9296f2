//! Post-fetch desktop notification.

use crate::error::Result;

pub const NOTIFY_TITLE: &str = "Keyword Scraper";
pub const NOTIFY_MESSAGE: &str = "Scraping completed successfully!";

pub trait Notifier: Send + Sync {
    fn notify(&self, title: &str, message: &str) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _title: &str, _message: &str) -> Result<()> {
        Ok(())
    }
}

/// Shows a native notification when built with `desktop-notify`, otherwise
/// only logs it.
#[derive(Debug, Default)]
pub struct DesktopNotifier;

#[cfg(feature = "desktop-notify")]
impl Notifier for DesktopNotifier {
    fn notify(&self, title: &str, message: &str) -> Result<()> {
        notify_rust::Notification::new()
            .appname(NOTIFY_TITLE)
            .summary(title)
            .body(message)
            .show()
            .map(|_| ())
            .map_err(|e| crate::error::ScraperError::Notify(e.to_string()))
    }
}

#[cfg(not(feature = "desktop-notify"))]
impl Notifier for DesktopNotifier {
    fn notify(&self, title: &str, message: &str) -> Result<()> {
        tracing::info!(title, message, "desktop notifications disabled at build time");
        Ok(())
    }
}
