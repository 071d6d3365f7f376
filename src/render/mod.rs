pub mod html;
pub mod text;

use chrono::{DateTime, Utc};

pub const INDENT: usize = 4;

pub(crate) fn format_date(date: Option<&DateTime<Utc>>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}
