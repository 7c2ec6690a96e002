mod fixtures;
mod log_line;
pub mod tracing;

pub use fixtures::{LogDir, render};
pub use log_line::{BROWSER_UA, CLAUDEBOT_UA, GOOGLEBOT_UA, GPTBOT_UA, LogLine};
pub use self::tracing::{CapturedEvent, capture_events};
