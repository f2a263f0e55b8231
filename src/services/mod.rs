//! Service layer for the notice fetcher.
//!
//! This module contains the business logic for:
//! - Listing page parsing (`NoticeParser`)
//! - Notice fetching (`NoticeFetcher`)

mod notices;
mod parser;

pub use notices::{FetchResult, NoticeFetcher};
pub use parser::NoticeParser;
