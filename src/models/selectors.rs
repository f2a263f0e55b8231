// src/models/selectors.rs

//! CSS selectors for scraping the notice board listing.

use serde::{Deserialize, Serialize};

/// How rows are assembled from the listing markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMode {
    /// Select each row, then query its fields inside it
    #[default]
    Row,

    /// Select each field list over the whole page and zip them by index
    Positional,
}

/// CSS selectors for the listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSelectors {
    /// Row assembly strategy
    #[serde(default)]
    pub mode: ExtractionMode,

    /// Cell shown when the board has no posts for the query
    #[serde(default = "defaults::no_post")]
    pub no_post_selector: String,

    /// Selector for each notice row (row mode only); rows without an id cell are skipped
    #[serde(default = "defaults::row")]
    pub row_selector: String,

    /// Selector for the article number cell
    #[serde(default = "defaults::id")]
    pub id_selector: String,

    /// Selector for the title anchor (carries the link)
    #[serde(default = "defaults::title")]
    pub title_selector: String,

    /// Selector for the category label
    #[serde(default = "defaults::category")]
    pub category_selector: String,

    /// Selector for the date label
    #[serde(default = "defaults::date")]
    pub date_selector: String,

    /// Selector for the writer label
    #[serde(default = "defaults::writer")]
    pub writer_selector: String,

    /// HTML attribute name for extracting links (usually "href")
    #[serde(default = "defaults::attr_name")]
    pub attr_name: String,
}

impl Default for BoardSelectors {
    fn default() -> Self {
        Self {
            mode: ExtractionMode::default(),
            no_post_selector: defaults::no_post(),
            row_selector: defaults::row(),
            id_selector: defaults::id(),
            title_selector: defaults::title(),
            category_selector: defaults::category(),
            date_selector: defaults::date(),
            writer_selector: defaults::writer(),
            attr_name: defaults::attr_name(),
        }
    }
}

impl BoardSelectors {
    /// Selectors reproducing the page-wide, index-aligned extraction.
    pub fn positional() -> Self {
        Self {
            mode: ExtractionMode::Positional,
            ..Self::default()
        }
    }

    /// All selector strings with their field names, for validation.
    pub fn entries(&self) -> [(&'static str, &str); 7] {
        [
            ("no_post_selector", self.no_post_selector.as_str()),
            ("row_selector", self.row_selector.as_str()),
            ("id_selector", self.id_selector.as_str()),
            ("title_selector", self.title_selector.as_str()),
            ("category_selector", self.category_selector.as_str()),
            ("date_selector", self.date_selector.as_str()),
            ("writer_selector", self.writer_selector.as_str()),
        ]
    }
}

mod defaults {
    pub fn no_post() -> String {
        "td.b-no-post".into()
    }
    pub fn row() -> String {
        "tr".into()
    }
    pub fn id() -> String {
        "td.b-num-box".into()
    }
    pub fn title() -> String {
        "div.b-title-box > a".into()
    }
    pub fn category() -> String {
        "span.b-cate".into()
    }
    pub fn date() -> String {
        "span.b-date".into()
    }
    pub fn writer() -> String {
        "span.b-writer".into()
    }
    pub fn attr_name() -> String {
        "href".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parses_lowercase() {
        let selectors: BoardSelectors = toml::from_str("mode = \"positional\"").unwrap();
        assert_eq!(selectors.mode, ExtractionMode::Positional);
        assert_eq!(selectors.id_selector, "td.b-num-box");
    }

    #[test]
    fn test_positional_keeps_selectors() {
        let positional = BoardSelectors::positional();
        assert_eq!(positional.mode, ExtractionMode::Positional);
        assert_eq!(positional.title_selector, BoardSelectors::default().title_selector);
    }
}
