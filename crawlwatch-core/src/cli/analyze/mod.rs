mod export;
mod render;
mod run;

pub use export::render_export;
pub use render::{NO_ACTIVITY, TableOptions, render_table};
pub use run::{execute, run};

use crate::logging::LogFormat;
use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Log files or glob patterns; `-` reads stdin
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// Bot catalog file (defaults to the built-in catalog)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// First day of the daily view (YYYY-MM-DD, inclusive)
    #[arg(long)]
    pub since: Option<NaiveDate>,

    /// Last day of the daily view (YYYY-MM-DD, inclusive)
    #[arg(long)]
    pub until: Option<NaiveDate>,

    /// Pages listed per bot in table output
    #[arg(long, default_value_t = 10)]
    pub top: usize,

    /// Load each input into memory and fold it on all cores
    #[arg(long)]
    pub parallel: bool,

    /// Diagnostic log format on stderr
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}
