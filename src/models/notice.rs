//! Notice data structure.

use serde::{Deserialize, Serialize};

/// A notice parsed from one row of the board listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notice {
    /// Article number shown in the listing
    pub id: u64,

    /// Notice title, with the writer prefix and "read more" marker removed
    pub title: String,

    /// Category label (e.g., "학사")
    pub category: String,

    /// Posting department or person
    pub writer: String,

    /// Date as printed by the board (not parsed)
    pub date: String,

    /// Full URL to the notice
    pub link: String,
}

impl Notice {
    /// Format notice for display using a template.
    ///
    /// Supported placeholders:
    /// - `{id}`, `{title}`, `{category}`
    /// - `{writer}`, `{date}`, `{link}`
    pub fn format(&self, template: &str) -> String {
        template
            .replace("{id}", &self.id.to_string())
            .replace("{title}", &self.title)
            .replace("{category}", &self.category)
            .replace("{writer}", &self.writer)
            .replace("{date}", &self.date)
            .replace("{link}", &self.link)
    }
}
