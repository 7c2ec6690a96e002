//! Per-bot aggregation.
//!
//! The data flow is:
//!
//! ```text
//! log line
//!   -> parse_line -> LogRecord
//!   -> BotMatcher
//!   -> Aggregator (AggregateState + RunStats)
//!   -> ResultSet -> daily / page / unique-address views
//! ```

mod aggregator;
mod result;
mod state;
mod stats;

pub use aggregator::Aggregator;
pub use result::{DailyHits, DateRange, PageHits, ResultExport, ResultSet};
pub use state::{AggregateState, FastMap, FastSet};
pub use stats::RunStats;
