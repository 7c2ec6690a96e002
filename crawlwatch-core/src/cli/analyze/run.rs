use crate::analyze::{CancelFlag, resolve_inputs};
use crate::cli::analyze::export::render_export;
use crate::cli::analyze::render::{TableOptions, render_table};
use crate::cli::analyze::{AnalyzeArgs, OutputFormat};
use crate::aggregate::DateRange;
use crate::conf::resolve_catalog;
use anyhow::{Context, Result, bail};
use std::io::{self, IsTerminal};

/// Entry point of `crawlwatch analyze`: installs the Ctrl-C handler and prints
/// the rendered report to stdout.
pub fn run(args: AnalyzeArgs) -> Result<()> {
    let cancel = CancelFlag::new();

    let flag = cancel.clone();
    ctrlc::set_handler(move || {
        tracing::warn!("interrupt received, abandoning analysis");
        flag.cancel();
    })
    .context("failed to install interrupt handler")?;

    let out = execute(&args, cancel)?;
    print!("{out}");
    Ok(())
}

/// Loads the catalog, analyzes every input and renders the result.
pub fn execute(args: &AnalyzeArgs, cancel: CancelFlag) -> Result<String> {
    let range = DateRange::new(args.since, args.until);
    if let (Some(since), Some(until)) = (range.since, range.until) {
        if since > until {
            bail!("--since {since} is after --until {until}");
        }
    }

    let catalog = resolve_catalog(args.catalog.as_deref()).with_context(|| match &args.catalog {
        Some(path) => format!("failed to load catalog {}", path.display()),
        None => "failed to load the built-in catalog".to_string(),
    })?;

    let sources = resolve_inputs(&args.inputs)?;
    tracing::info!(
        inputs = sources.len(),
        catalog = %catalog.origin.display(),
        signatures = catalog.catalog.len(),
        parallel = args.parallel,
        "starting analysis"
    );

    let analyzer = catalog.analyzer().with_cancel_flag(cancel);
    let result = if args.parallel {
        analyzer.analyze_sources_parallel(&sources)?
    } else {
        analyzer.analyze_sources(&sources)?
    };

    match args.format {
        OutputFormat::Table => {
            let opts = TableOptions {
                range,
                top: args.top,
                color: io::stdout().is_terminal(),
            };
            Ok(render_table(&result, &opts))
        }
        format => render_export(&result, &range, format),
    }
}
