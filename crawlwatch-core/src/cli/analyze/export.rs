use crate::aggregate::{DateRange, ResultSet};
use crate::cli::analyze::OutputFormat;
use anyhow::Result;

/// Serializes the result for machine consumption. Table output is handled by
/// [`render_table`](crate::cli::analyze::render_table).
pub fn render_export(result: &ResultSet, range: &DateRange, format: OutputFormat) -> Result<String> {
    let export = result.export(range);

    let mut s = match format {
        OutputFormat::Yaml => serde_yaml::to_string(&export)?,
        OutputFormat::Json | OutputFormat::Table => serde_json::to_string_pretty(&export)?,
    };

    if !s.ends_with('\n') {
        s.push('\n');
    }
    Ok(s)
}
