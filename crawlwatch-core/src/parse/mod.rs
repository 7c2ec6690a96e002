//! Combined log format parsing.
//!
//! Every line is handled on its own: a line either becomes a [`LogRecord`] or is
//! rejected, there is no state carried between lines.

mod line;
mod record;
#[cfg(test)]
mod tests;

pub use line::{TIMESTAMP_FORMAT, parse_line, parse_timestamp, request_path};
pub use record::{LogRecord, MISSING_PATH};
