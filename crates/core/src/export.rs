use crate::error::{Result, ScraperError};
use crate::models::ExportFormat;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tracing::info;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Writes keyword lists under a result directory.
///
/// The timestamp in default file names is taken once, when the exporter's
/// session started, so repeated exports in one format target the same file.
#[derive(Debug, Clone)]
pub struct Exporter {
    result_dir: PathBuf,
    timestamp: String,
}

impl Exporter {
    pub fn new(result_dir: impl Into<PathBuf>, started_at: DateTime<Local>) -> Self {
        Self {
            result_dir: result_dir.into(),
            timestamp: started_at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// `<result_dir>/keywords_<timestamp>.<ext>`
    pub fn default_path(&self, format: ExportFormat) -> PathBuf {
        self.result_dir.join(format!(
            "keywords_{}.{}",
            self.timestamp,
            format.extension()
        ))
    }

    /// Writes `list` in `format` to `path`, or to [`Self::default_path`]
    /// (creating the result directory) when no path is given.
    pub fn export(&self, list: &[String], path: Option<&Path>, format: &str) -> Result<PathBuf> {
        if list.is_empty() {
            return Err(ScraperError::EmptyList);
        }
        let format: ExportFormat = format.parse()?;
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                std::fs::create_dir_all(&self.result_dir)
                    .map_err(|e| ScraperError::io(&self.result_dir, e))?;
                self.default_path(format)
            }
        };
        let contents = render(list, format)?;
        std::fs::write(&path, contents).map_err(|e| ScraperError::io(&path, e))?;
        info!(path = %path.display(), count = list.len(), %format, "keywords exported");
        Ok(path)
    }
}

fn render(list: &[String], format: ExportFormat) -> Result<String> {
    Ok(match format {
        ExportFormat::Txt => list.iter().map(|kw| format!("{kw}\n")).collect(),
        ExportFormat::Csv => {
            let mut out = String::from("Keywords\n");
            for kw in list {
                out.push_str(&csv_field(kw));
                out.push('\n');
            }
            out
        }
        ExportFormat::Json => serde_json::to_string_pretty(list)?,
    })
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
