pub mod json;
pub mod text;

use chrono::{DateTime, SecondsFormat, Utc};

pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}
