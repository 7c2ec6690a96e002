use crate::conf::resolve_catalog;
use anyhow::Result;
use std::path::Path;

/// One signature per line, in priority order.
pub fn list(path: Option<&Path>) -> Result<String> {
    let cfg = resolve_catalog(path)?;

    let mut out = String::new();
    for sig in cfg.catalog.iter() {
        out.push_str(sig);
        out.push('\n');
    }
    Ok(out)
}
