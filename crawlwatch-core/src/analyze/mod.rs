//! Reading log inputs and driving them through the aggregation pipeline.

mod analyzer;
mod cancel;
mod error;
mod input;

pub use analyzer::{Analyzer, split_lines};
pub use cancel::CancelFlag;
pub use error::AnalyzeError;
pub use input::{InputSource, STDIN_ARG, discover, for_each_line, is_gzip, resolve_inputs};
