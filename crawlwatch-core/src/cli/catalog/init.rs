use crate::conf::{DEFAULT_TEMPLATE, template};
use anyhow::{Context, Result, bail};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Writes the embedded default catalog to `path`. Never overwrites.
pub fn init(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("{} already exists; refusing to overwrite it", path.display());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let contents = template(DEFAULT_TEMPLATE)?;
    let mut f = fs::File::create_new(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    f.write_all(contents.trim_start().as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))?;

    println!("✔ Wrote bot catalog to {}", path.display());
    println!();
    println!("Next steps:");
    println!("  crawlwatch catalog check {}", path.display());
    println!("  crawlwatch analyze --catalog {} access.log", path.display());

    Ok(())
}
