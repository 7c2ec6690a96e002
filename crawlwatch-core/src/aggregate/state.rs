use crate::parse::LogRecord;
use ahash::RandomState;
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

pub type FastMap<K, V> = HashMap<K, V, RandomState>;
pub type FastSet<T> = HashSet<T, RandomState>;

/// Running per-bot aggregates.
///
/// All maps are keyed by the catalog signature that matched. A bot only ever
/// appears here after at least one record was attributed to it, and for every
/// bot `sum(daily_hits) + undated_hits == sum(page_hits)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateState {
    daily_hits: FastMap<String, BTreeMap<NaiveDate, u64>>,
    page_hits: FastMap<String, FastMap<String, u64>>,
    unique_addresses: FastMap<String, FastSet<String>>,
    /// Matched records whose timestamp did not parse; they have no day to land on.
    undated_hits: FastMap<String, u64>,
}

impl AggregateState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attributes one record to `bot`.
    pub fn record(&mut self, bot: &str, record: &LogRecord) {
        match record.date() {
            Some(date) => {
                *self
                    .daily_hits
                    .entry(bot.to_owned())
                    .or_default()
                    .entry(date)
                    .or_insert(0) += 1;
            }
            None => {
                *self.undated_hits.entry(bot.to_owned()).or_insert(0) += 1;
            }
        }

        let pages = self.page_hits.entry(bot.to_owned()).or_default();
        match pages.get_mut(record.requested_path.as_str()) {
            Some(count) => *count += 1,
            None => {
                pages.insert(record.requested_path.clone(), 1);
            }
        }

        let addresses = self.unique_addresses.entry(bot.to_owned()).or_default();
        if !addresses.contains(record.client_address.as_str()) {
            addresses.insert(record.client_address.clone());
        }
    }

    /// Folds `other` into `self`: counts add up, address sets union.
    pub fn merge(&mut self, other: AggregateState) {
        for (bot, days) in other.daily_hits {
            let mine = self.daily_hits.entry(bot).or_default();
            for (date, hits) in days {
                *mine.entry(date).or_insert(0) += hits;
            }
        }

        for (bot, pages) in other.page_hits {
            let mine = self.page_hits.entry(bot).or_default();
            for (path, hits) in pages {
                *mine.entry(path).or_insert(0) += hits;
            }
        }

        for (bot, addresses) in other.unique_addresses {
            self.unique_addresses
                .entry(bot)
                .or_default()
                .extend(addresses);
        }

        for (bot, hits) in other.undated_hits {
            *self.undated_hits.entry(bot).or_insert(0) += hits;
        }
    }

    pub fn daily_hits(&self, bot: &str) -> Option<&BTreeMap<NaiveDate, u64>> {
        self.daily_hits.get(bot)
    }

    pub fn page_hits(&self, bot: &str) -> Option<&FastMap<String, u64>> {
        self.page_hits.get(bot)
    }

    pub fn unique_addresses(&self, bot: &str) -> Option<&FastSet<String>> {
        self.unique_addresses.get(bot)
    }

    pub fn undated_hits(&self, bot: &str) -> u64 {
        self.undated_hits.get(bot).copied().unwrap_or(0)
    }

    /// Every request attributed to `bot`, dated or not.
    pub fn total_hits(&self, bot: &str) -> u64 {
        self.page_hits
            .get(bot)
            .map(|pages| pages.values().sum())
            .unwrap_or(0)
    }

    /// Bots with at least one attributed request, sorted by name.
    pub fn bots(&self) -> BTreeSet<&str> {
        self.page_hits.keys().map(String::as_str).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.page_hits.is_empty()
    }
}
