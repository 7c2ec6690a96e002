use chrono::{NaiveDate, NaiveDateTime};

/// Placeholder used when the request line carries no path token.
pub const MISSING_PATH: &str = "-";

/// One access-log line in the combined format, broken into its fields.
///
/// Quoted groups are stored without their surrounding quotes and are otherwise
/// untouched. `status` and `body_size` stay textual since the log itself may
/// carry placeholders such as `-`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub client_address: String,
    /// `None` when the bracketed date did not parse.
    pub timestamp: Option<NaiveDateTime>,
    pub request_line: String,
    pub status: String,
    pub body_size: String,
    pub referrer: String,
    pub user_agent: String,
    pub requested_path: String,
}

impl LogRecord {
    pub fn date(&self) -> Option<NaiveDate> {
        self.timestamp.map(|ts| ts.date())
    }
}
