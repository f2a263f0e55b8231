// src/lib.rs

//! Ajou University notice board library
//!
//! Builds listing URLs from a [`models::NoticeFilter`], fetches one page
//! with [`services::NoticeFetcher`] and parses it into [`models::Notice`]
//! records.

pub mod error;
pub mod models;
pub mod services;
pub mod ui;
pub mod utils;
