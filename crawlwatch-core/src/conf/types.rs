use crate::analyze::Analyzer;
use crate::catalog::{BotCatalog, BotMatcher, MatchPolicy};
use crate::conf::report::CatalogReport;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw contents of a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Case-sensitive user-agent substrings, in priority order.
    pub signatures: Vec<String>,

    #[serde(default)]
    pub match_policy: MatchPolicy,

    /// Tally crawlers the catalog does not list (diagnostic only).
    #[serde(default)]
    pub detect_unlisted: bool,
}

/// A catalog that passed validation, together with its non-fatal findings.
#[derive(Debug, Clone)]
pub struct ValidatedCatalog {
    pub origin: PathBuf,
    pub catalog: BotCatalog,
    pub match_policy: MatchPolicy,
    pub detect_unlisted: bool,
    pub report: CatalogReport,
}

impl ValidatedCatalog {
    pub fn matcher(&self) -> BotMatcher {
        BotMatcher::with_policy(self.catalog.clone(), self.match_policy)
    }

    pub fn analyzer(&self) -> Analyzer {
        Analyzer::new(self.matcher()).with_unlisted_detection(self.detect_unlisted)
    }
}
