use crate::parse::record::{LogRecord, MISSING_PATH};
use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

/// Date layout of the first token inside the bracketed timestamp.
/// The timezone offset that follows it is ignored. Fields that are not
/// zero-padded (`1/Jun/2025:2:00:00`) are accepted as well.
pub const TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S";

/// `<addr> <ident> <user> [<timestamp>] "<request>" <status> <size> "<referrer>" "<user-agent>"`
///
/// Quoted groups may contain backslash escapes (`\"`); they are kept as written.
static COMBINED_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^(\S+) \S+ \S+ \[([^\]]*)\] "((?:[^"\\]|\\.)*)" ([0-9]{3}) (\S+) "((?:[^"\\]|\\.)*)" "((?:[^"\\]|\\.)*)"\s*$"#,
    )
    .expect("combined log pattern must compile")
});

/// Parses one line of a combined-format access log.
///
/// Returns `None` when the line does not follow the grammar. A timestamp that
/// cannot be read does not reject the line; the record simply carries no
/// timestamp.
pub fn parse_line(line: &str) -> Option<LogRecord> {
    let caps = COMBINED_LINE.captures(line)?;

    let request_line = caps[3].to_string();
    let requested_path = request_path(&request_line).to_string();

    Some(LogRecord {
        client_address: caps[1].to_string(),
        timestamp: parse_timestamp(&caps[2]),
        request_line,
        status: caps[4].to_string(),
        body_size: caps[5].to_string(),
        referrer: caps[6].to_string(),
        user_agent: caps[7].to_string(),
        requested_path,
    })
}

/// Reads the date+time token of a bracketed timestamp, e.g. `10/Jun/2025:12:00:00 +0000`.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let token = raw.split_whitespace().next()?;
    NaiveDateTime::parse_from_str(token, TIMESTAMP_FORMAT).ok()
}

/// Second whitespace-separated token of the request line (`GET /path HTTP/1.1`).
pub fn request_path(request_line: &str) -> &str {
    request_line
        .split_whitespace()
        .nth(1)
        .unwrap_or(MISSING_PATH)
}
