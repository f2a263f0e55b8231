// src/models/filter.rs

//! Notice board query filter and request URL builder.

use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

use crate::error::NoticeError;
use crate::models::category::category_code;

/// Listing endpoint of the Ajou University notice board.
pub const NOTICE_BOARD_URL: &str = "https://www.ajou.ac.kr/kr/ajou/notice.do";

/// Number of notices requested when none is given.
pub const DEFAULT_RESULT_COUNT: i64 = 15;

/// Characters left as-is in the keyword: unreserved characters and `/`.
const KEYWORD_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// Query parameters for one listing request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeFilter {
    /// Number of notices to request (sent verbatim)
    pub result_count: i64,

    /// Board category code, `None` for all categories
    pub category: Option<u32>,

    /// Search keyword, trimmed and encoded only when building
    pub keyword: String,
}

impl Default for NoticeFilter {
    fn default() -> Self {
        Self {
            result_count: DEFAULT_RESULT_COUNT,
            category: None,
            keyword: String::new(),
        }
    }
}

impl NoticeFilter {
    /// Create a filter with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of notices to request.
    ///
    /// No bounds check; the board caps or ignores bad values itself.
    pub fn set_result_count(&mut self, count: i64) {
        self.result_count = count;
    }

    /// Set the category by label.
    ///
    /// An unknown label clears the category and returns
    /// [`NoticeError::InvalidCategory`]; the filter stays usable.
    pub fn set_category(&mut self, label: &str) -> Result<(), NoticeError> {
        match category_code(label) {
            Some(code) => {
                self.category = Some(code);
                Ok(())
            }
            None => {
                self.category = None;
                Err(NoticeError::InvalidCategory)
            }
        }
    }

    /// Set the category by raw board code.
    pub fn set_category_code(&mut self, code: u32) {
        self.category = Some(code);
    }

    /// Set the search keyword.
    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.keyword = keyword.into();
    }

    /// Build the request URL against the notice board endpoint.
    pub fn build(&self) -> String {
        self.build_with_base(NOTICE_BOARD_URL)
    }

    /// Build the request URL against another listing endpoint.
    pub fn build_with_base(&self, base: &str) -> String {
        let keyword = utf8_percent_encode(self.keyword.trim(), KEYWORD_ENCODE_SET);
        let category = self.category.map(|c| c.to_string()).unwrap_or_default();

        format!(
            "{base}?mode=list&srSearchKey=&srSearchVal={keyword}&article.offset=0&srCategoryId={category}&articleLimit={count}",
            count = self.result_count
        )
    }
}

impl fmt::Display for NoticeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

#[cfg(test)]
mod tests {
    use percent_encoding::percent_decode_str;

    use super::*;
    use crate::models::category::categories;

    fn query_param<'a>(url: &'a str, key: &str) -> Option<&'a str> {
        let (_, query) = url.split_once('?')?;
        query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    #[test]
    fn test_default_url() {
        assert_eq!(
            NoticeFilter::new().build(),
            "https://www.ajou.ac.kr/kr/ajou/notice.do?mode=list&srSearchKey=&srSearchVal=&article.offset=0&srCategoryId=&articleLimit=15"
        );
    }

    #[test]
    fn test_every_category_embeds_code() {
        for (label, code) in categories() {
            let mut filter = NoticeFilter::new();
            assert!(filter.set_category(label).is_ok(), "label {label}");
            let url = filter.build();
            assert_eq!(query_param(&url, "srCategoryId"), Some(code.to_string().as_str()));
        }
    }

    #[test]
    fn test_unknown_category_resets() {
        let mut filter = NoticeFilter::new();
        filter.set_category("학사").unwrap();
        assert_eq!(filter.set_category("없는분류"), Err(NoticeError::InvalidCategory));
        assert_eq!(filter.category, None);
        assert_eq!(query_param(&filter.build(), "srCategoryId"), Some(""));
    }

    #[test]
    fn test_build_is_repeatable() {
        let mut filter = NoticeFilter::new();
        filter.set_result_count(50);
        filter.set_keyword("  졸업  ");
        filter.set_category("장학").unwrap();

        let first = filter.build();
        for _ in 0..5 {
            assert_eq!(filter.build(), first);
        }
        assert_eq!(filter.to_string(), first);
    }

    #[test]
    fn test_keyword_is_trimmed_and_encoded() {
        let mut filter = NoticeFilter::new();
        filter.set_keyword("  a b&c#d/e  ");
        let url = filter.build();
        let encoded = query_param(&url, "srSearchVal").unwrap();

        assert_eq!(encoded, "a%20b%26c%23d/e");
        let decoded = percent_decode_str(encoded).decode_utf8().unwrap();
        assert_eq!(decoded, "a b&c#d/e");
    }

    #[test]
    fn test_korean_keyword_roundtrips() {
        let mut filter = NoticeFilter::new();
        filter.set_keyword("졸업 사정");
        let url = filter.build();
        let encoded = query_param(&url, "srSearchVal").unwrap();

        assert!(encoded.is_ascii());
        assert_eq!(percent_decode_str(encoded).decode_utf8().unwrap(), "졸업 사정");
    }

    #[test]
    fn test_keyword_not_trimmed_at_set_time() {
        let mut filter = NoticeFilter::new();
        filter.set_keyword(" x ");
        assert_eq!(filter.keyword, " x ");
    }

    #[test]
    fn test_result_count_is_verbatim() {
        let mut filter = NoticeFilter::new();
        filter.set_result_count(0);
        assert_eq!(query_param(&filter.build(), "articleLimit"), Some("0"));
        filter.set_result_count(-5);
        assert_eq!(query_param(&filter.build(), "articleLimit"), Some("-5"));
    }

    #[test]
    fn test_build_with_base() {
        let mut filter = NoticeFilter::new();
        filter.set_category_code(3);
        assert_eq!(
            filter.build_with_base("http://127.0.0.1:8080/notice.do"),
            "http://127.0.0.1:8080/notice.do?mode=list&srSearchKey=&srSearchVal=&article.offset=0&srCategoryId=3&articleLimit=15"
        );
    }
}
