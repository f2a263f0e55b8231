// src/services/parser.rs

//! Listing page parser.
//!
//! Turns the HTML of one listing page into [`Notice`] records. Rows whose
//! article number is not numeric (pinned "공지" rows) are skipped.

use scraper::{ElementRef, Html, Selector};

use crate::error::{AppError, NoticeError, Result};
use crate::models::{BoardSelectors, CleaningConfig, ExtractionMode, Notice};

/// Raw text fields of one listing row, before cleaning.
struct RawRow<'a> {
    id: ElementRef<'a>,
    title: ElementRef<'a>,
    category: Option<ElementRef<'a>>,
    date: Option<ElementRef<'a>>,
    writer: Option<ElementRef<'a>>,
}

/// Parser for the notice board listing page.
#[derive(Debug, Clone)]
pub struct NoticeParser {
    mode: ExtractionMode,
    no_post: Selector,
    row: Selector,
    id: Selector,
    title: Selector,
    category: Selector,
    date: Selector,
    writer: Selector,
    attr_name: String,
    link_base: String,
    cleaning: CleaningConfig,
}

impl NoticeParser {
    /// Compile the selectors once.
    pub fn new(
        selectors: &BoardSelectors,
        cleaning: CleaningConfig,
        link_base: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            mode: selectors.mode,
            no_post: Self::parse_selector(&selectors.no_post_selector)?,
            row: Self::parse_selector(&selectors.row_selector)?,
            id: Self::parse_selector(&selectors.id_selector)?,
            title: Self::parse_selector(&selectors.title_selector)?,
            category: Self::parse_selector(&selectors.category_selector)?,
            date: Self::parse_selector(&selectors.date_selector)?,
            writer: Self::parse_selector(&selectors.writer_selector)?,
            attr_name: selectors.attr_name.clone(),
            link_base: link_base.into(),
            cleaning,
        })
    }

    /// Parse a listing page.
    ///
    /// Returns [`NoticeError::NoNotice`] when the page carries the "no posts"
    /// marker or when no row yields a notice.
    pub fn parse(&self, html: &str) -> std::result::Result<Vec<Notice>, NoticeError> {
        let document = Html::parse_document(html);

        if document.select(&self.no_post).next().is_some() {
            log::debug!("Board reported no posts");
            return Err(NoticeError::NoNotice);
        }

        let rows = match self.mode {
            ExtractionMode::Row => self.scoped_rows(&document),
            ExtractionMode::Positional => self.positional_rows(&document),
        };

        let notices: Vec<Notice> = rows
            .into_iter()
            .filter_map(|row| self.build_notice(row))
            .collect();

        if notices.is_empty() {
            return Err(NoticeError::NoNotice);
        }
        Ok(notices)
    }

    /// Select rows as units and query fields inside each one.
    fn scoped_rows<'a>(&self, document: &'a Html) -> Vec<RawRow<'a>> {
        document
            .select(&self.row)
            .filter_map(|row| {
                let id = row.select(&self.id).next()?;
                let title = row.select(&self.title).next()?;
                Some(RawRow {
                    id,
                    title,
                    category: row.select(&self.category).next(),
                    date: row.select(&self.date).next(),
                    writer: row.select(&self.writer).next(),
                })
            })
            .collect()
    }

    /// Select each field across the page and pair them by position.
    ///
    /// Assumes the lists are index-aligned; extra entries past the shortest
    /// list are dropped.
    fn positional_rows<'a>(&self, document: &'a Html) -> Vec<RawRow<'a>> {
        let ids: Vec<_> = document.select(&self.id).collect();
        let titles: Vec<_> = document.select(&self.title).collect();
        let categories: Vec<_> = document.select(&self.category).collect();
        let dates: Vec<_> = document.select(&self.date).collect();
        let writers: Vec<_> = document.select(&self.writer).collect();

        let len = [
            ids.len(),
            titles.len(),
            categories.len(),
            dates.len(),
            writers.len(),
        ]
        .into_iter()
        .min()
        .unwrap_or(0);

        if len < ids.len() {
            log::warn!(
                "Listing fields are misaligned ({} ids, {} titles, {} categories, {} dates, {} writers)",
                ids.len(),
                titles.len(),
                categories.len(),
                dates.len(),
                writers.len()
            );
        }

        (0..len)
            .map(|i| RawRow {
                id: ids[i],
                title: titles[i],
                category: Some(categories[i]),
                date: Some(dates[i]),
                writer: Some(writers[i]),
            })
            .collect()
    }

    fn build_notice(&self, row: RawRow<'_>) -> Option<Notice> {
        let raw_id = Self::text_of(row.id);
        let id = match raw_id.trim().parse::<u64>() {
            Ok(id) => id,
            Err(_) => {
                log::debug!("Skipping row with non-numeric id {:?}", raw_id.trim());
                return None;
            }
        };

        let writer = row.writer.map(Self::text_of).unwrap_or_default();
        let writer = writer.trim().to_string();
        let title = self.cleaning.clean_title(&Self::text_of(row.title), &writer);
        let category = Self::clean_field(row.category);
        let date = Self::clean_field(row.date);

        let href = row.title.value().attr(&self.attr_name).unwrap_or("");
        let link = format!("{}{}", self.link_base, href);

        Some(Notice {
            id,
            title,
            category,
            writer,
            date,
            link,
        })
    }

    fn clean_field(element: Option<ElementRef<'_>>) -> String {
        element
            .map(|e| Self::text_of(e).trim().to_string())
            .unwrap_or_default()
    }

    fn text_of(element: ElementRef<'_>) -> String {
        element.text().collect()
    }

    fn parse_selector(s: &str) -> Result<Selector> {
        Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
    }
}
