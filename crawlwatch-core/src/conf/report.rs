use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogIssue {
    pub message: String,
    /// Zero-based position of the offending signature.
    pub index: usize,
    pub help: Option<String>,
}

/// Non-fatal findings about a catalog file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogReport {
    pub origin: PathBuf,
    pub warnings: Vec<CatalogIssue>,
}

impl CatalogReport {
    pub fn new(origin: impl Into<PathBuf>) -> Self {
        Self {
            origin: origin.into(),
            warnings: Vec::new(),
        }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub(crate) fn warning(&mut self, index: usize, message: String, help: Option<String>) {
        tracing::warn!(catalog = %self.origin.display(), index, "{message}");
        self.warnings.push(CatalogIssue {
            message,
            index,
            help,
        });
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn render_plain(&self) -> String {
        let mut out = String::new();
        for issue in &self.warnings {
            out.push_str(&format!(
                "{}:warning: {} (signature #{})\n",
                self.origin.display(),
                issue.message,
                issue.index
            ));
        }
        out
    }

    pub fn render_pretty(&self) -> String {
        let mut out = String::new();
        if self.warnings.is_empty() {
            return out;
        }

        out.push_str(&format!("{}\n", self.origin.display().bold()));
        for issue in &self.warnings {
            out.push_str(&format!(
                "  {}: {} (signature #{})\n",
                "warning".yellow().bold(),
                issue.message,
                issue.index
            ));
            if let Some(help) = &issue.help {
                out.push_str(&format!("    {}: {}\n", "help".cyan(), help));
            }
        }
        out
    }
}
