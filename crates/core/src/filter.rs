use crate::models::KeywordList;
use crate::settings::Settings;

/// Drops entries shorter than `min_length`, optionally strips spaces from
/// the survivors, optionally sorts them by length.
///
/// The length check runs on the entry as fetched, before any space removal.
/// The sort is stable, so equal-length entries keep their relative order.
pub fn filter(
    list: &[String],
    min_length: usize,
    remove_spaces: bool,
    sort_by_length: bool,
) -> Vec<String> {
    let mut out: Vec<String> = list
        .iter()
        .filter(|kw| kw.chars().count() >= min_length)
        .map(|kw| {
            if remove_spaces {
                kw.replace(' ', "")
            } else {
                kw.clone()
            }
        })
        .collect();
    if sort_by_length {
        out.sort_by_key(|kw| kw.chars().count());
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOptions {
    pub min_length: usize,
    pub remove_spaces: bool,
    pub sort_by_length: bool,
}

impl FilterOptions {
    /// `None` until both yes/no questions have been answered and stored.
    /// A negative stored length means no minimum.
    pub fn from_settings(settings: &Settings) -> Option<Self> {
        Some(Self {
            min_length: usize::try_from(settings.min_keyword_length).unwrap_or(0),
            remove_spaces: settings.remove_spaces?,
            sort_by_length: settings.sort_keywords?,
        })
    }

    pub fn apply(&self, list: &KeywordList) -> KeywordList {
        filter(
            list.as_slice(),
            self.min_length,
            self.remove_spaces,
            self.sort_by_length,
        )
        .into()
    }

    pub fn describe(&self) -> String {
        let mut msg = format!(
            "Keywords filtered with minimum length of {} characters.",
            self.min_length
        );
        if self.remove_spaces {
            msg.push_str(" Spaces removed.");
        }
        if self.sort_by_length {
            msg.push_str(" Sorted by length.");
        }
        msg
    }
}
