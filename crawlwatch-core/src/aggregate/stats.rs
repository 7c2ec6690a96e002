use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Counters describing what happened to the input lines of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Every line seen, blank ones included.
    pub lines_read: u64,
    /// Non-blank lines rejected by the parser.
    pub malformed_lines: u64,
    /// Parsed records whose timestamp could not be read.
    pub undated_records: u64,
    /// Parsed records attributed to at least one bot.
    pub matched_records: u64,
    /// Parsed records matching no catalog signature.
    pub unmatched_records: u64,
    /// Unmatched records woothee classifies as crawlers, by crawler name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub unlisted_crawlers: BTreeMap<String, u64>,
}

impl RunStats {
    pub fn records(&self) -> u64 {
        self.matched_records + self.unmatched_records
    }

    pub fn merge(&mut self, other: RunStats) {
        self.lines_read += other.lines_read;
        self.malformed_lines += other.malformed_lines;
        self.undated_records += other.undated_records;
        self.matched_records += other.matched_records;
        self.unmatched_records += other.unmatched_records;

        for (name, count) in other.unlisted_crawlers {
            *self.unlisted_crawlers.entry(name).or_insert(0) += count;
        }
    }
}
