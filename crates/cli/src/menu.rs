//! Interactive main and settings menus.

use crate::display;
use crate::prompt::{is_input_closed, Prompter};
use anyhow::Result;
use chrono::{DateTime, Local};
use providers::{ProviderError, ProviderRegistry};
use scraper_core::export::Exporter;
use scraper_core::fetch::fetch_keywords;
use scraper_core::filter::FilterOptions;
use scraper_core::notify::{DesktopNotifier, Notifier};
use scraper_core::{ExportFormat, KeywordList, Provider, ScraperError, Settings, SettingsStore};
use std::io::{BufRead, Write};
use tracing::warn;

const RETURN_PROMPT: &str = "\nPress Enter to return to the menu...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// One interactive run: current settings, the fetched keyword list and the
/// terminal it talks to.
pub struct Session<R, W> {
    prompt: Prompter<R, W>,
    store: SettingsStore,
    settings: Settings,
    registry: ProviderRegistry,
    notifier: Box<dyn Notifier>,
    started_at: DateTime<Local>,
    keyword: Option<String>,
    keywords: KeywordList,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, store: SettingsStore, settings: Settings) -> Self {
        Self {
            prompt: Prompter::new(input, out),
            store,
            settings,
            registry: ProviderRegistry::with_defaults(),
            notifier: Box::new(DesktopNotifier),
            started_at: Local::now(),
            keyword: None,
            keywords: KeywordList::default(),
        }
    }

    pub fn with_registry(mut self, registry: ProviderRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_started_at(mut self, started_at: DateTime<Local>) -> Self {
        self.started_at = started_at;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    pub fn keywords(&self) -> &KeywordList {
        &self.keywords
    }

    pub fn into_output(self) -> W {
        self.prompt.into_output()
    }

    /// Runs the main menu until the user picks Exit or input ends.
    pub async fn run(&mut self) -> Result<()> {
        self.prompt.say("Welcome to Keyword Scraper!")?;
        loop {
            match self.main_menu().await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(e) if is_input_closed(&e) => break,
                Err(e) => return Err(e),
            }
        }
        self.prompt.say("Goodbye!")?;
        Ok(())
    }

    async fn main_menu(&mut self) -> Result<Flow> {
        self.prompt.say("")?;
        self.prompt.say("==== Keyword Scraper Main Menu ====")?;
        self.prompt.say("1. Enter a new keyword to scrape")?;
        self.prompt.say("2. Display related keywords")?;
        self.prompt.say("3. Export keywords to a file")?;
        self.prompt.say("4. Filter keywords")?;
        self.prompt.say("5. Settings")?;
        self.prompt.say("6. Exit")?;
        let choice = self
            .prompt
            .ask_choice("Choose an option", &["1", "2", "3", "4", "5", "6"])?;

        match choice.as_str() {
            "1" => {
                let keyword = self.prompt.ask("Enter the keyword")?;
                self.fetch(keyword).await?;
            }
            "2" => {
                self.display()?;
                self.prompt.pause(RETURN_PROMPT)?;
            }
            "3" => {
                self.export()?;
                self.prompt.pause(RETURN_PROMPT)?;
            }
            "4" => {
                self.filter()?;
                self.prompt.pause(RETURN_PROMPT)?;
            }
            "5" => {
                self.settings_menu()?;
                self.prompt.pause(RETURN_PROMPT)?;
            }
            _ => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    async fn fetch(&mut self, keyword: String) -> Result<()> {
        self.prompt.say("Fetching related keywords...")?;
        let result = fetch_keywords(
            &self.registry,
            &self.settings,
            &*self.notifier,
            &keyword,
        )
        .await;
        self.keyword = Some(keyword);
        match result {
            Ok(list) => {
                self.keywords = list;
                self.prompt.say(format!(
                    "Related keywords successfully fetched! ({} found)",
                    self.keywords.len()
                ))?;
            }
            Err(ScraperError::Provider(e @ ProviderError::Transport(_))) => {
                warn!(error = %e, "fetch failed");
                self.prompt.say(format!(
                    "Network error occurred while fetching keywords: {e}"
                ))?;
            }
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn display(&mut self) -> Result<()> {
        if self.keywords.is_empty() {
            self.prompt.say("No related keywords found.")?;
            return Ok(());
        }
        for line in display::table_header(&self.keywords) {
            self.prompt.say(line)?;
        }
        let rows = display::table_rows(&self.keywords);
        let total = rows.len();
        for (i, row) in rows.into_iter().enumerate() {
            self.prompt.say(row)?;
            let shown = i + 1;
            if shown % display::PAGE_SIZE == 0 && shown < total {
                self.prompt
                    .pause(&format!("-- {shown}/{total} shown, press Enter for more --"))?;
            }
        }
        Ok(())
    }

    fn export(&mut self) -> Result<()> {
        if self.keywords.is_empty() {
            self.prompt
                .say("No keywords to export. Please fetch keywords first.")?;
            return Ok(());
        }
        let formats: Vec<&str> = ExportFormat::ALL.iter().map(|f| f.extension()).collect();
        let format = self.prompt.ask_choice("Choose file format", &formats)?;
        let exporter = Exporter::new(&self.settings.result_path, self.started_at);
        match exporter.export(self.keywords.as_slice(), None, &format) {
            Ok(path) => self.prompt.say(format!(
                "Keywords successfully exported to {}",
                path.display()
            ))?,
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn filter(&mut self) -> Result<()> {
        if self.settings.remove_spaces.is_none() {
            let answer = self.prompt.ask_yes_no("Remove spaces from keywords?")?;
            self.update(self.settings.clone().with_remove_spaces(answer))?;
        }
        if self.settings.sort_keywords.is_none() {
            let answer = self.prompt.ask_yes_no("Sort keywords by length?")?;
            self.update(self.settings.clone().with_sort_keywords(answer))?;
        }
        // Only unset when a save above failed and was already reported.
        let Some(opts) = FilterOptions::from_settings(&self.settings) else {
            return Ok(());
        };
        self.keywords = opts.apply(&self.keywords);
        self.prompt.say(opts.describe())?;
        Ok(())
    }

    fn settings_menu(&mut self) -> Result<()> {
        loop {
            let s = &self.settings;
            let lines = [
                String::new(),
                "Settings Menu".to_string(),
                format!(
                    "1. Scraping Level: {} (1: Basic, 2: Moderate, 3: Extensive)",
                    s.scraping_level
                ),
                format!("2. Minimum Keyword Length: {}", s.min_keyword_length),
                format!(
                    "3. Notification Alert: {}",
                    if s.notification_alert { "Enabled" } else { "Disabled" }
                ),
                format!("4. API Source: {} (google, bing)", s.api_source),
                format!("5. Result Path: {} (default: results)", s.result_path),
                "6. Back to Main Menu".to_string(),
            ];
            for line in lines {
                self.prompt.say(line)?;
            }
            let choice = self
                .prompt
                .ask_choice("Choose a setting to modify", &["1", "2", "3", "4", "5", "6"])?;

            match choice.as_str() {
                "1" => {
                    let level = self.prompt.ask_choice(
                        "Enter scraping level (1: Basic, 2: Moderate, 3: Extensive)",
                        &["1", "2", "3"],
                    )?;
                    let level: i64 = level.parse()?;
                    if self.update(self.settings.clone().with_scraping_level(level))? {
                        self.prompt.say(format!("Scraping level set to {level}"))?;
                    }
                }
                "2" => {
                    let current = self.settings.min_keyword_length;
                    let n = self.prompt.ask_i64("Enter minimum keyword length", current)?;
                    if self.update(self.settings.clone().with_min_keyword_length(n))? {
                        self.prompt
                            .say(format!("Minimum keyword length set to {n}"))?;
                    }
                }
                "3" => {
                    let on = self.prompt.ask_yes_no("Enable notification alert?")?;
                    if self.update(self.settings.clone().with_notification_alert(on))? {
                        let state = if on { "enabled" } else { "disabled" };
                        self.prompt.say(format!("Notification alert {state}"))?;
                    }
                }
                "4" => {
                    let names: Vec<&str> = Provider::ALL.iter().map(|p| p.as_str()).collect();
                    let source = self.prompt.ask_choice("Choose API source", &names)?;
                    if self.update(self.settings.clone().with_api_source(source.as_str()))? {
                        self.prompt.say(format!("API source set to {source}"))?;
                    }
                }
                "5" => {
                    let current = self.settings.result_path.clone();
                    let path = self.prompt.ask_with_default("Enter the result path", &current)?;
                    if self.update(self.settings.clone().with_result_path(path.as_str()))? {
                        self.prompt.say(format!("Result path set to {path}"))?;
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    /// Persists `next` and swaps it in. On a failed save the previous
    /// settings stay active and the error is shown; returns whether it saved.
    fn update(&mut self, next: Settings) -> Result<bool> {
        match self.store.save(&next) {
            Ok(()) => {
                self.settings = next;
                Ok(true)
            }
            Err(e) => {
                self.report(&e)?;
                Ok(false)
            }
        }
    }

    fn report(&mut self, err: &ScraperError) -> Result<()> {
        warn!(error = %err, "operation failed");
        self.prompt.say(format!("An error occurred: {err}"))?;
        Ok(())
    }
}
