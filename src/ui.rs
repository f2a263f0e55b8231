// src/ui.rs

//! Console presentation of notices.
//!
//! Everything here is cosmetic: icons, messages and list layout.

use std::io;
use std::process::Command;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::NoticeError;
use crate::models::{Notice, NoticeFilter, OutputConfig, categories};

/// Icon shown next to a notice of the given category.
pub fn category_icon(category: &str) -> &'static str {
    match category {
        "학사" => "🎓",
        "비교과" | "장학" => "ℹ️",
        "학술" => "📰",
        "입학" => "🚪",
        "취업" => "💼",
        "사무" => "🗂️",
        "기타" => "📢",
        "행사" => "🎉",
        "파란학기제" | "학사일정" => "📘",
        _ => "⋮",
    }
}

/// Message shown while a fetch is in flight.
pub fn loading_message(filter: &NoticeFilter) -> String {
    let keyword = filter.keyword.trim();
    if keyword.is_empty() {
        "공지 불러오는 중...".to_string()
    } else {
        format!("\"{keyword}\" 검색하는 중...")
    }
}

/// User-facing message for an error kind.
pub fn error_message(error: NoticeError) -> &'static str {
    match error {
        NoticeError::Timeout => "웹사이트를 불러오는 데 시간이 너무 오래 걸립니다.",
        NoticeError::InvalidUrl => "서버가 응답하지 않거나 주소가 잘못되었습니다.",
        NoticeError::NoNotice => "공지가 없습니다.",
        NoticeError::InvalidCategory => "잘못된 카테고리입니다.",
    }
}

/// Render notices as a numbered list.
///
/// Numbers start at 1 and match the index accepted by `--open`.
pub fn render_notices(notices: &[Notice], output: &OutputConfig) -> String {
    let width = notices.len().to_string().len();
    let mut lines = Vec::with_capacity(notices.len() * 3);

    for (i, notice) in notices.iter().enumerate() {
        lines.push(format!(
            "{:>width$}. {} {}",
            i + 1,
            category_icon(&notice.category),
            notice.format(&output.title_template)
        ));
        lines.push(format!(
            "{:width$}  {}",
            "",
            notice.format(&output.subtitle_template)
        ));
        if output.show_links {
            lines.push(format!("{:width$}  {}", "", notice.link));
        }
    }

    lines.join("\n")
}

/// Render the category table.
pub fn render_categories() -> String {
    categories()
        .map(|(label, code)| format!("{} {:<6} {}", category_icon(label), label, code))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pick a notice by its 1-based list number.
pub fn select_notice(notices: &[Notice], number: usize) -> Option<&Notice> {
    number.checked_sub(1).and_then(|i| notices.get(i))
}

/// Open a link in the system browser.
pub fn open_link(link: &str) -> io::Result<()> {
    let mut command = if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    } else if cfg!(target_os = "macos") {
        Command::new("open")
    } else {
        Command::new("xdg-open")
    };

    let status = command.arg(link).status()?;
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!("browser exited with {status}")))
    }
}

/// Machine-readable result of one fetch.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum JsonReport<'a> {
    Success {
        url: &'a str,
        fetched_at: DateTime<Utc>,
        count: usize,
        notices: &'a [Notice],
    },
    Error {
        url: &'a str,
        fetched_at: DateTime<Utc>,
        error: &'static str,
        message: &'static str,
    },
}

impl<'a> JsonReport<'a> {
    /// Build a report from a fetch outcome.
    pub fn new(url: &'a str, outcome: &'a Result<Vec<Notice>, NoticeError>) -> Self {
        let fetched_at = Utc::now();
        match outcome {
            Ok(notices) => Self::Success {
                url,
                fetched_at,
                count: notices.len(),
                notices,
            },
            Err(error) => Self::Error {
                url,
                fetched_at,
                error: error.code(),
                message: error_message(*error),
            },
        }
    }
}
