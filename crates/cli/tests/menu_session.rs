use chrono::{DateTime, Local, TimeZone};
use providers::{FixedProvider, GoogleProvider, ProviderRegistry};
use scraper_cli::menu::Session;
use scraper_core::notify::NoopNotifier;
use scraper_core::{Settings, SettingsStore};
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

type TestSession = Session<Cursor<Vec<u8>>, Vec<u8>>;

fn started() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap()
}

fn session(dir: &Path, settings: Settings, registry: ProviderRegistry, input: &str) -> TestSession {
    let store = SettingsStore::new(dir.join("settings.json"));
    Session::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), store, settings)
        .with_registry(registry)
        .with_notifier(Box::new(NoopNotifier))
        .with_started_at(started())
}

fn fixed(items: &[&str]) -> ProviderRegistry {
    ProviderRegistry::new().with_provider("google", Arc::new(FixedProvider::new(items.to_vec())))
}

fn output(session: TestSession) -> String {
    String::from_utf8(session.into_output()).unwrap()
}

#[tokio::test]
async fn fetch_display_and_export_csv() {
    let temp = tempfile::tempdir().unwrap();
    let results = temp.path().join("results");
    let settings = Settings::default().with_result_path(results.to_string_lossy());
    let mut s = session(
        temp.path(),
        settings,
        fixed(&["rust book", "rust lang", "rs"]),
        "1\nrust\n2\n\n3\ncsv\n\n6\n",
    );

    s.run().await.unwrap();
    assert_eq!(s.keyword(), Some("rust"));
    assert_eq!(s.keywords().as_slice(), ["rust book", "rust lang", "rs"]);

    let out = output(s);
    assert!(out.contains("Related keywords successfully fetched! (3 found)"));
    assert!(out.contains("Related Keywords"));
    assert!(out.contains("| rust lang"));
    assert!(out.contains("Goodbye!"));

    let csv = results.join("keywords_2024-05-01_09-30-00.csv");
    assert!(out.contains("Keywords successfully exported to"));
    let text = std::fs::read_to_string(csv).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["Keywords", "rust book", "rust lang", "rs"]);
}

#[tokio::test]
async fn filter_asks_once_and_remembers_answers() {
    let temp = tempfile::tempdir().unwrap();
    let mut s = session(
        temp.path(),
        Settings::default(),
        fixed(&["new york", "la", "bbbb", "abc"]),
        "1\nseed\n4\nyes\nyes\n\n4\n\n6\n",
    );

    s.run().await.unwrap();
    assert_eq!(s.keywords().as_slice(), ["abc", "bbbb", "newyork"]);
    assert_eq!(s.settings().remove_spaces, Some(true));
    assert_eq!(s.settings().sort_keywords, Some(true));

    let stored = SettingsStore::new(temp.path().join("settings.json"))
        .load()
        .unwrap();
    assert_eq!(&stored, s.settings());

    let out = output(s);
    assert_eq!(out.matches("Remove spaces from keywords?").count(), 1);
    assert_eq!(out.matches("Sort keywords by length?").count(), 1);
    assert_eq!(
        out.matches("Keywords filtered with minimum length of 3 characters. Spaces removed. Sorted by length.")
            .count(),
        2
    );
}

#[tokio::test]
async fn settings_menu_persists_every_change() {
    let temp = tempfile::tempdir().unwrap();
    let mut s = session(
        temp.path(),
        Settings::default(),
        fixed(&[]),
        "5\n4\nbing\n2\nabc\n7\n3\nyes\n1\n3\n5\n\n6\n\n6\n",
    );

    s.run().await.unwrap();
    let expected = Settings::default()
        .with_api_source("bing")
        .with_min_keyword_length(7)
        .with_notification_alert(true)
        .with_scraping_level(3);
    assert_eq!(s.settings(), &expected);

    let stored = SettingsStore::new(temp.path().join("settings.json"))
        .load()
        .unwrap();
    assert_eq!(stored, expected);

    let out = output(s);
    assert!(out.contains("API source set to bing"));
    assert!(out.contains("Please enter a valid integer number"));
    assert!(out.contains("Minimum keyword length set to 7"));
    assert!(out.contains("Notification alert enabled"));
    assert!(out.contains("Scraping level set to 3"));
    assert!(out.contains("Result path set to results"));
}

#[tokio::test]
async fn export_without_keywords_is_refused() {
    let temp = tempfile::tempdir().unwrap();
    let results = temp.path().join("results");
    let settings = Settings::default().with_result_path(results.to_string_lossy());
    let s = {
        let mut s = session(temp.path(), settings, fixed(&[]), "3\n\n2\n\n6\n");
        s.run().await.unwrap();
        s
    };

    let out = output(s);
    assert!(out.contains("No keywords to export. Please fetch keywords first."));
    assert!(out.contains("No related keywords found."));
    assert!(!results.exists());
}

#[tokio::test]
async fn unsupported_provider_is_reported_and_menu_continues() {
    let temp = tempfile::tempdir().unwrap();
    let settings = Settings::default().with_api_source("yahoo");
    let mut s = session(temp.path(), settings, fixed(&["a"]), "1\nseed\n6\n");

    s.run().await.unwrap();
    assert!(s.keywords().is_empty());
    let out = output(s);
    assert!(out.contains("An error occurred: unsupported API source 'yahoo'"));
    assert!(out.contains("Goodbye!"));
}

#[tokio::test]
async fn transport_failure_keeps_previous_list() {
    let temp = tempfile::tempdir().unwrap();
    let registry =
        ProviderRegistry::new().with_provider("google", Arc::new(GoogleProvider::new("http://127.0.0.1:1")));
    let mut s = session(temp.path(), Settings::default(), registry, "1\nseed\n6\n");

    s.run().await.unwrap();
    assert!(s.keywords().is_empty());
    let out = output(s);
    assert!(out.contains("Network error occurred while fetching keywords"));
}

#[tokio::test]
async fn end_of_input_exits_cleanly() {
    let temp = tempfile::tempdir().unwrap();
    let mut s = session(temp.path(), Settings::default(), fixed(&["a", "b"]), "1\nseed\n");

    s.run().await.unwrap();
    assert_eq!(s.keywords().len(), 2);
    assert!(output(s).ends_with("Goodbye!\n"));
}

#[tokio::test]
async fn long_lists_are_paged() {
    let temp = tempfile::tempdir().unwrap();
    let many: Vec<String> = (1..=85).map(|i| format!("keyword {i}")).collect();
    let registry = ProviderRegistry::new().with_provider("google", Arc::new(FixedProvider::new(many)));
    // Two page breaks (after 40 and 80 rows) plus the return prompt.
    let mut s = session(temp.path(), Settings::default(), registry, "1\nseed\n2\n\n\n\n6\n");

    s.run().await.unwrap();
    let out = output(s);
    assert!(out.contains("-- 40/85 shown, press Enter for more --"));
    assert!(out.contains("-- 80/85 shown, press Enter for more --"));
    assert!(out.contains("| keyword 85"));
    assert!(out.contains("Goodbye!"));
}
