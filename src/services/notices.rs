// src/services/notices.rs

//! Notice fetcher service.
//!
//! Requests one listing page and hands the body to [`NoticeParser`].

use std::sync::Arc;

use reqwest::Client;

use crate::error::{NoticeError, Result};
use crate::models::{Config, Notice, NoticeFilter};
use crate::services::NoticeParser;
use crate::utils::http;

/// Outcome of one fetch: a non-empty list of notices or an error kind.
pub type FetchResult = std::result::Result<Vec<Notice>, NoticeError>;

/// Service for fetching notices from the board.
pub struct NoticeFetcher {
    config: Arc<Config>,
    client: Client,
    parser: NoticeParser,
}

impl NoticeFetcher {
    /// Create a new fetcher with the given configuration.
    pub fn new(config: Arc<Config>) -> Result<Self> {
        let client = http::create_client(&config.crawler)?;
        Self::with_client(config, client)
    }

    /// Create a fetcher around an existing HTTP client.
    pub fn with_client(config: Arc<Config>, client: Client) -> Result<Self> {
        let parser = NoticeParser::new(
            &config.selectors,
            config.cleaning.clone(),
            config.board.base_url.clone(),
        )?;

        Ok(Self {
            config,
            client,
            parser,
        })
    }

    /// Filter with the configured default result count.
    pub fn default_filter(&self) -> NoticeFilter {
        let mut filter = NoticeFilter::new();
        filter.set_result_count(self.config.board.default_limit);
        filter
    }

    /// Decide which URL a fetch will request.
    ///
    /// An explicit URL is used verbatim; otherwise the filter (or the
    /// default filter) is built against the configured endpoint.
    pub fn request_url(&self, url: Option<&str>, filter: Option<&NoticeFilter>) -> String {
        match (url, filter) {
            (Some(url), _) => url.to_string(),
            (None, Some(filter)) => filter.build_with_base(&self.config.board.base_url),
            (None, None) => self
                .default_filter()
                .build_with_base(&self.config.board.base_url),
        }
    }

    /// Fetch and parse one listing page.
    ///
    /// Single attempt; a timeout or transport failure is returned as its
    /// error kind without retrying.
    pub async fn fetch(&self, url: Option<&str>, filter: Option<&NoticeFilter>) -> FetchResult {
        let url = self.request_url(url, filter);
        log::debug!("Fetching notices from {}", url);

        let body = http::fetch_text(&self.client, &url).await?;
        let notices = self.parser.parse(&body)?;

        log::debug!("Parsed {} notices", notices.len());
        Ok(notices)
    }
}
