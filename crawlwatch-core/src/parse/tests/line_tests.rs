use crate::parse::{MISSING_PATH, parse_line, parse_timestamp, request_path};
use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;

const GPTBOT_LINE: &str = r#"10.0.0.1 - - [10/Jun/2025:12:00:00 +0000] "GET /index.html HTTP/1.1" 200 512 "-" "Mozilla/5.0 GPTBot""#;

fn ts(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

#[test]
fn parses_a_combined_line() {
    // Act
    let record = parse_line(GPTBOT_LINE).unwrap();

    // Assert
    assert_eq!(record.client_address, "10.0.0.1");
    assert_eq!(record.timestamp, Some(ts(2025, 6, 10, 12, 0, 0)));
    assert_eq!(record.request_line, "GET /index.html HTTP/1.1");
    assert_eq!(record.status, "200");
    assert_eq!(record.body_size, "512");
    assert_eq!(record.referrer, "-");
    assert_eq!(record.user_agent, "Mozilla/5.0 GPTBot");
    assert_eq!(record.requested_path, "/index.html");
    assert_eq!(record.date(), NaiveDate::from_ymd_opt(2025, 6, 10));
}

#[test]
fn quoted_fields_are_kept_verbatim() {
    // Arrange
    let line = r#"2001:db8::1 ident alice [01/Jan/2024:00:00:01 -0700] "POST /a%20b?q=1&x=\x00 HTTP/2.0" 404 - "https://example.com/?r=1" "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)""#;

    // Act
    let record = parse_line(line).unwrap();

    // Assert
    assert_eq!(record.client_address, "2001:db8::1");
    assert_eq!(record.request_line, r"POST /a%20b?q=1&x=\x00 HTTP/2.0");
    assert_eq!(record.requested_path, "/a%20b?q=1&x=\\x00");
    assert_eq!(record.status, "404");
    assert_eq!(record.body_size, "-");
    assert_eq!(record.referrer, "https://example.com/?r=1");
    assert_eq!(
        record.user_agent,
        "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)"
    );
}

#[test]
fn unparsable_timestamp_keeps_the_record() {
    // Arrange
    let line = r#"10.0.0.2 - - [garbage] "GET /a HTTP/1.1" 200 1 "-" "Googlebot""#;

    // Act
    let record = parse_line(line).unwrap();

    // Assert
    assert_eq!(record.timestamp, None);
    assert_eq!(record.date(), None);
    assert_eq!(record.requested_path, "/a");
    assert_eq!(record.user_agent, "Googlebot");
}

#[test]
fn empty_brackets_yield_no_timestamp() {
    let line = r#"10.0.0.2 - - [] "GET /a HTTP/1.1" 200 1 "-" "Googlebot""#;

    let record = parse_line(line).unwrap();

    assert_eq!(record.timestamp, None);
}

#[test]
fn request_without_path_uses_placeholder() {
    // Arrange
    let line = r#"10.0.0.3 - - [10/Jun/2025:12:00:00 +0000] "-" 400 0 "-" "GPTBot""#;

    // Act
    let record = parse_line(line).unwrap();

    // Assert
    assert_eq!(record.request_line, "-");
    assert_eq!(record.requested_path, MISSING_PATH);
}

#[test]
fn empty_request_uses_placeholder() {
    let line = r#"10.0.0.3 - - [10/Jun/2025:12:00:00 +0000] "" 400 0 "-" "GPTBot""#;

    let record = parse_line(line).unwrap();

    assert_eq!(record.requested_path, MISSING_PATH);
}

#[test]
fn trailing_carriage_return_is_tolerated() {
    let line = format!("{GPTBOT_LINE}\r");

    let record = parse_line(&line).unwrap();

    assert_eq!(record.user_agent, "Mozilla/5.0 GPTBot");
}

#[test]
fn escaped_quotes_stay_inside_their_group() {
    // Arrange
    let line = r#"10.0.0.1 - - [10/Jun/2025:12:00:00 +0000] "GET /q?x=\"y\" HTTP/1.1" 200 512 "-" "Mozilla/5.0 (\"compat\") GPTBot""#;

    // Act
    let record = parse_line(line).unwrap();

    // Assert
    assert_eq!(record.user_agent, r#"Mozilla/5.0 (\"compat\") GPTBot"#);
    assert_eq!(record.request_line, r#"GET /q?x=\"y\" HTTP/1.1"#);
    assert_eq!(record.requested_path, r#"/q?x=\"y\""#);
}

#[test]
fn malformed_lines_are_rejected() {
    let cases = [
        "",
        "not a log line",
        // missing user token
        r#"10.0.0.1 - [10/Jun/2025:12:00:00 +0000] "GET / HTTP/1.1" 200 512 "-" "GPTBot""#,
        // missing brackets
        r#"10.0.0.1 - - 10/Jun/2025:12:00:00 "GET / HTTP/1.1" 200 512 "-" "GPTBot""#,
        // unquoted request
        r#"10.0.0.1 - - [10/Jun/2025:12:00:00 +0000] GET / HTTP/1.1 200 512 "-" "GPTBot""#,
        // status is not three digits
        r#"10.0.0.1 - - [10/Jun/2025:12:00:00 +0000] "GET / HTTP/1.1" 20 512 "-" "GPTBot""#,
        r#"10.0.0.1 - - [10/Jun/2025:12:00:00 +0000] "GET / HTTP/1.1" 2000 512 "-" "GPTBot""#,
        r#"10.0.0.1 - - [10/Jun/2025:12:00:00 +0000] "GET / HTTP/1.1" abc 512 "-" "GPTBot""#,
        // missing user-agent group
        r#"10.0.0.1 - - [10/Jun/2025:12:00:00 +0000] "GET / HTTP/1.1" 200 512 "-""#,
        // unterminated user-agent quote
        r#"10.0.0.1 - - [10/Jun/2025:12:00:00 +0000] "GET / HTTP/1.1" 200 512 "-" "GPTBot"#,
        // closing quote escaped away
        r#"10.0.0.1 - - [10/Jun/2025:12:00:00 +0000] "GET / HTTP/1.1" 200 512 "-" "GPTBot\""#,
        // extra trailing field
        r#"10.0.0.1 - - [10/Jun/2025:12:00:00 +0000] "GET / HTTP/1.1" 200 512 "-" "GPTBot" "1.2.3.4""#,
    ];

    for line in cases {
        assert!(parse_line(line).is_none(), "expected rejection: {line:?}");
    }
}

#[test]
fn timestamp_requires_the_full_layout() {
    assert_eq!(
        parse_timestamp("10/Jun/2025:12:00:00 +0000"),
        Some(ts(2025, 6, 10, 12, 0, 0))
    );
    assert_eq!(
        parse_timestamp("31/Dec/1999:23:59:59"),
        Some(ts(1999, 12, 31, 23, 59, 59))
    );

    // Missing zero padding is tolerated.
    assert_eq!(
        parse_timestamp("1/Jun/2025:2:00:00"),
        Some(ts(2025, 6, 1, 2, 0, 0))
    );

    assert_eq!(parse_timestamp("2025-06-10T12:00:00Z"), None);
    assert_eq!(parse_timestamp("10/Jun/2025"), None);
    assert_eq!(parse_timestamp("10/Foo/2025:12:00:00"), None);
    assert_eq!(parse_timestamp("32/Jun/2025:12:00:00"), None);
    assert_eq!(parse_timestamp("10/Jun/2025:25:00:00"), None);
    assert_eq!(parse_timestamp(""), None);
}

#[test]
fn request_path_takes_the_second_token() {
    assert_eq!(request_path("GET /robots.txt HTTP/1.1"), "/robots.txt");
    assert_eq!(request_path("GET  /spaced   HTTP/1.0"), "/spaced");
    assert_eq!(request_path("GET /no-version"), "/no-version");
    assert_eq!(request_path("GARBAGE"), MISSING_PATH);
    assert_eq!(request_path(""), MISSING_PATH);
}
