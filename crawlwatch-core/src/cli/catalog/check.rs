use crate::conf::resolve_catalog;
use anyhow::{Context, Result};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    Pretty,
    Plain,
    Json,
}

/// Loads and validates a catalog, returning the rendered report.
///
/// Hard errors (unparseable file, empty catalog or signature) are returned as
/// `Err`; warnings only show up in the report.
pub fn check(path: Option<&Path>, mode: ReportMode) -> Result<String> {
    let cfg = resolve_catalog(path).with_context(|| match path {
        Some(path) => format!("catalog {} is invalid", path.display()),
        None => "built-in catalog is invalid".to_string(),
    })?;

    let mut out = match mode {
        ReportMode::Json => return Ok(format!("{}\n", cfg.report.render_json()?)),
        ReportMode::Plain => cfg.report.render_plain(),
        ReportMode::Pretty => cfg.report.render_pretty(),
    };

    out.push_str(&format!("✔ Catalog {} loaded\n", cfg.origin.display()));
    out.push_str(&format!("✔ {} signatures\n", cfg.catalog.len()));
    out.push_str(&format!("✔ match policy: {}\n", cfg.match_policy));
    if cfg.detect_unlisted {
        out.push_str("✔ unlisted crawler detection enabled\n");
    }
    if cfg.report.has_warnings() {
        out.push_str(&format!("! {} warnings\n", cfg.report.warnings.len()));
    }

    Ok(out)
}
