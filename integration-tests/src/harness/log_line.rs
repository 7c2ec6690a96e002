use std::fmt;

pub const GPTBOT_UA: &str =
    "Mozilla/5.0 AppleWebKit/537.36 (KHTML, like Gecko; compatible; GPTBot/1.2; +https://openai.com/gptbot)";
pub const GOOGLEBOT_UA: &str =
    "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)";
pub const CLAUDEBOT_UA: &str =
    "Mozilla/5.0 AppleWebKit/537.36 (KHTML, like Gecko; compatible; ClaudeBot/1.0; +claudebot@anthropic.com)";
pub const BROWSER_UA: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Builder for one combined-format access log line.
#[derive(Debug, Clone)]
pub struct LogLine {
    pub address: String,
    pub timestamp: String,
    pub request: String,
    pub status: u16,
    pub user_agent: String,
}

impl LogLine {
    pub fn new(user_agent: &str) -> Self {
        Self {
            address: "203.0.113.7".to_string(),
            timestamp: "10/Oct/2024:13:55:36 +0000".to_string(),
            request: "GET / HTTP/1.1".to_string(),
            status: 200,
            user_agent: user_agent.to_string(),
        }
    }

    pub fn gptbot() -> Self {
        Self::new(GPTBOT_UA)
    }

    pub fn googlebot() -> Self {
        Self::new(GOOGLEBOT_UA)
    }

    pub fn claudebot() -> Self {
        Self::new(CLAUDEBOT_UA)
    }

    pub fn browser() -> Self {
        Self::new(BROWSER_UA)
    }

    pub fn address(mut self, address: &str) -> Self {
        self.address = address.to_string();
        self
    }

    /// Day of October 2024.
    pub fn on(mut self, day: u32) -> Self {
        self.timestamp = format!("{day:02}/Oct/2024:13:55:36 +0000");
        self
    }

    pub fn at(mut self, timestamp: &str) -> Self {
        self.timestamp = timestamp.to_string();
        self
    }

    pub fn path(mut self, path: &str) -> Self {
        self.request = format!("GET {path} HTTP/1.1");
        self
    }

    pub fn request(mut self, request: &str) -> Self {
        self.request = request.to_string();
        self
    }
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"{} - - [{}] "{}" {} 1234 "-" "{}""#,
            self.address, self.timestamp, self.request, self.status, self.user_agent
        )
    }
}
