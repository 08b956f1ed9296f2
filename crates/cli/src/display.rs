use scraper_core::KeywordList;

pub const TABLE_TITLE: &str = "Related Keywords";
/// Rows shown before the display waits for Enter.
pub const PAGE_SIZE: usize = 40;

/// Header lines of the keyword table: title, column names and a rule.
pub fn table_header(list: &KeywordList) -> Vec<String> {
    let (index_w, keyword_w) = widths(list);
    vec![
        TABLE_TITLE.to_string(),
        format!("{:^index_w$} | {:<keyword_w$}", "Index", "Keyword"),
        format!("{}-+-{}", "-".repeat(index_w), "-".repeat(keyword_w)),
    ]
}

/// One line per keyword, numbered from 1.
pub fn table_rows(list: &KeywordList) -> Vec<String> {
    let (index_w, _) = widths(list);
    list.iter()
        .enumerate()
        .map(|(i, kw)| format!("{:^index_w$} | {}", i + 1, kw))
        .collect()
}

fn widths(list: &KeywordList) -> (usize, usize) {
    let index_w = list.len().to_string().len().max("Index".len());
    let keyword_w = list
        .iter()
        .map(|kw| kw.chars().count())
        .max()
        .unwrap_or(0)
        .max("Keyword".len());
    (index_w, keyword_w)
}
