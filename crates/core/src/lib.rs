//! Core library: settings store, keyword filtering, export and the fetch step.

pub mod error;
pub mod export;
pub mod fetch;
pub mod filter;
pub mod models;
pub mod notify;
pub mod settings;

pub use error::{Result, ScraperError};
pub use models::{ExportFormat, KeywordList, Provider};
pub use settings::{Settings, SettingsStore};
