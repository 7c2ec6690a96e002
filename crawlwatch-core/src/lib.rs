pub mod aggregate;
pub mod analyze;
pub mod catalog;
pub mod cli;
pub mod conf;
pub mod enrichment;
pub mod logging;
pub mod parse;
