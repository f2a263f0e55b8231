//! Application configuration structures.

use std::fs;
use std::path::Path;

use scraper::Selector;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::BoardSelectors;
use crate::models::filter::{DEFAULT_RESULT_COUNT, NOTICE_BOARD_URL};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP behavior settings
    #[serde(default)]
    pub crawler: CrawlerConfig,

    /// Notice board endpoint settings
    #[serde(default)]
    pub board: BoardConfig,

    /// Listing page selectors
    #[serde(default)]
    pub selectors: BoardSelectors,

    /// Text preprocessing settings
    #[serde(default)]
    pub cleaning: CleaningConfig,

    /// Console output settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.crawler.user_agent.trim().is_empty() {
            return Err(AppError::validation("crawler.user_agent is empty"));
        }
        if self.crawler.timeout_secs == 0 {
            return Err(AppError::validation("crawler.timeout_secs must be > 0"));
        }
        url::Url::parse(&self.board.base_url)?;
        if self.selectors.attr_name.trim().is_empty() {
            return Err(AppError::validation("selectors.attr_name is empty"));
        }
        for (field, selector) in self.selectors.entries() {
            Selector::parse(selector)
                .map_err(|e| AppError::selector(selector, format!("{field}: {e:?}")))?;
        }
        Ok(())
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Skip TLS certificate validation. Unsafe; off unless set explicitly.
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            accept_invalid_certs: false,
        }
    }
}

/// Notice board endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Listing endpoint; also the prefix of every notice link
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Result count used when the caller gives none
    #[serde(default = "defaults::default_limit")]
    pub default_limit: i64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            default_limit: defaults::default_limit(),
        }
    }
}

/// Text cleaning settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleaningConfig {
    /// "Read more" text appended to titles by the board
    #[serde(default = "defaults::read_more_marker")]
    pub read_more_marker: String,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            read_more_marker: defaults::read_more_marker(),
        }
    }
}

impl CleaningConfig {
    /// Clean a title: drop the `[writer]` duplicate and the trailing
    /// "read more" marker.
    ///
    /// The marker only counts at the end of the title, separated from the
    /// text before it by whitespace.
    pub fn clean_title(&self, title: &str, writer: &str) -> String {
        let mut result = title.trim().to_string();

        let duplicate = format!("[{writer}]");
        if !writer.is_empty() && result.contains(&duplicate) {
            result = result.replace(&duplicate, "").trim().to_string();
        }

        let marker = self.read_more_marker.trim();
        if !marker.is_empty()
            && let Some(rest) = result.strip_suffix(marker)
            && (rest.is_empty() || rest.ends_with(char::is_whitespace))
        {
            result = rest.trim().to_string();
        }

        result
    }
}

/// Console output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Template for the first line of each notice
    #[serde(default = "defaults::title_template")]
    pub title_template: String,

    /// Template for the second line of each notice
    #[serde(default = "defaults::subtitle_template")]
    pub subtitle_template: String,

    /// Print the link under each notice
    #[serde(default = "defaults::show_links")]
    pub show_links: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            title_template: defaults::title_template(),
            subtitle_template: defaults::subtitle_template(),
            show_links: defaults::show_links(),
        }
    }
}

mod defaults {
    use super::{DEFAULT_RESULT_COUNT, NOTICE_BOARD_URL};

    // Crawler defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; ajou-notice/0.1)".into()
    }
    pub fn timeout() -> u64 {
        3
    }

    // Board defaults
    pub fn base_url() -> String {
        NOTICE_BOARD_URL.into()
    }
    pub fn default_limit() -> i64 {
        DEFAULT_RESULT_COUNT
    }

    // Cleaning defaults
    pub fn read_more_marker() -> String {
        "자세히 보기".into()
    }

    // Output defaults
    pub fn title_template() -> String {
        "{title}".into()
    }
    pub fn subtitle_template() -> String {
        "{category} | {date} | {writer}".into()
    }
    pub fn show_links() -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExtractionMode;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.crawler.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.crawler.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_base_url() {
        let mut config = Config::default();
        config.board.base_url = "not a url".to_string();
        assert!(matches!(config.validate(), Err(AppError::Url(_))));
    }

    #[test]
    fn validate_rejects_bad_selector() {
        let mut config = Config::default();
        config.selectors.date_selector = "[[invalid".to_string();
        assert!(matches!(config.validate(), Err(AppError::Selector { .. })));
    }

    #[test]
    fn defaults_match_board() {
        let config = Config::default();
        assert_eq!(config.crawler.timeout_secs, 3);
        assert!(!config.crawler.accept_invalid_certs);
        assert_eq!(config.board.base_url, "https://www.ajou.ac.kr/kr/ajou/notice.do");
        assert_eq!(config.board.default_limit, 15);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [crawler]
            timeout_secs = 10
            accept_invalid_certs = true

            [selectors]
            mode = "positional"
            "#,
        )
        .unwrap();

        assert_eq!(config.crawler.timeout_secs, 10);
        assert!(config.crawler.accept_invalid_certs);
        assert_eq!(config.crawler.user_agent, defaults::user_agent());
        assert_eq!(config.selectors.mode, ExtractionMode::Positional);
        assert_eq!(config.cleaning.read_more_marker, "자세히 보기");
    }

    #[test]
    fn clean_title_removes_writer_and_marker() {
        let cleaning = CleaningConfig::default();
        assert_eq!(
            cleaning.clean_title("[Jane] Graduation notice 자세히 보기", "Jane"),
            "Graduation notice"
        );
    }

    #[test]
    fn clean_title_keeps_other_brackets() {
        let cleaning = CleaningConfig::default();
        assert_eq!(
            cleaning.clean_title("  [학사팀]  수강신청 안내\n", "장학팀"),
            "[학사팀]  수강신청 안내"
        );
    }

    #[test]
    fn clean_title_keeps_marker_outside_the_end() {
        let cleaning = CleaningConfig::default();
        assert_eq!(
            cleaning.clean_title("자세히 보기 전 유의사항 안내", ""),
            "자세히 보기 전 유의사항 안내"
        );
        assert_eq!(
            cleaning.clean_title("신청서 자세히 보기 방법 안내", ""),
            "신청서 자세히 보기 방법 안내"
        );
        assert_eq!(cleaning.clean_title("공지자세히 보기", ""), "공지자세히 보기");
    }

    #[test]
    fn clean_title_strips_trailing_marker_only() {
        let cleaning = CleaningConfig::default();
        assert_eq!(
            cleaning.clean_title("자세히 보기 안내 자세히 보기", ""),
            "자세히 보기 안내"
        );
        assert_eq!(cleaning.clean_title("자세히 보기", ""), "");
    }

    #[test]
    fn clean_title_keeps_interior_whitespace() {
        let cleaning = CleaningConfig::default();
        assert_eq!(cleaning.clean_title("  A   B  ", ""), "A   B");
    }

    #[test]
    fn clean_title_with_empty_writer() {
        let cleaning = CleaningConfig::default();
        assert_eq!(cleaning.clean_title("[] 제목", ""), "[] 제목");
    }
}
