use anyhow::{Context, Result};
use scraper_cli::menu::Session;
use scraper_core::SettingsStore;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    let store = SettingsStore::default_location();
    let settings = store
        .load()
        .with_context(|| format!("failed to load settings from {}", store.path().display()))?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), store, settings);
    session.run().await
}
