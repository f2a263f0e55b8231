// src/models/mod.rs

//! Domain models for the notice fetcher.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

pub mod category;
mod config;
mod filter;
mod notice;
mod selectors;

// Re-export all public types
pub use category::{CATEGORIES, categories, category_code, category_label};
pub use config::{BoardConfig, CleaningConfig, Config, CrawlerConfig, OutputConfig};
pub use filter::{DEFAULT_RESULT_COUNT, NOTICE_BOARD_URL, NoticeFilter};
pub use notice::Notice;
pub use selectors::{BoardSelectors, ExtractionMode};
