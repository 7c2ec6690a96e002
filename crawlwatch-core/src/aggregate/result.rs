use crate::aggregate::state::AggregateState;
use crate::aggregate::stats::RunStats;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// One point of a bot's daily time series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyHits {
    pub bot: String,
    pub date: NaiveDate,
    pub hits: u64,
}

/// All-time request count of one page by one bot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageHits {
    pub bot: String,
    pub path: String,
    pub hits: u64,
}

/// Inclusive date window applied to the daily view. Open ends are unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub since: Option<NaiveDate>,
    pub until: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(since: Option<NaiveDate>, until: Option<NaiveDate>) -> Self {
        Self { since, until }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.since.is_none_or(|since| date >= since) && self.until.is_none_or(|until| date <= until)
    }

    pub fn is_unbounded(&self) -> bool {
        self.since.is_none() && self.until.is_none()
    }
}

/// Flat, serializable form of a [`ResultSet`]: what presentation layers consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultExport {
    pub daily_hits: Vec<DailyHits>,
    pub page_hits: Vec<PageHits>,
    pub unique_addresses: BTreeMap<String, u64>,
    pub stats: RunStats,
}

/// Frozen outcome of a run.
///
/// The views below are plain projections of the aggregates; they are sorted so
/// the same input always renders the same way, independently of hashing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSet {
    state: AggregateState,
    stats: RunStats,
}

impl ResultSet {
    pub fn new(state: AggregateState, stats: RunStats) -> Self {
        Self { state, stats }
    }

    pub fn state(&self) -> &AggregateState {
        &self.state
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// `true` when no request was attributed to any bot.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn bots(&self) -> Vec<&str> {
        self.state.bots().into_iter().collect()
    }

    pub fn total_hits(&self, bot: &str) -> u64 {
        self.state.total_hits(bot)
    }

    /// `(bot, date, hits)` for every day a bot was seen, ordered by bot then date.
    pub fn daily_hits(&self) -> Vec<DailyHits> {
        self.daily_hits_in(&DateRange::default())
    }

    pub fn daily_hits_in(&self, range: &DateRange) -> Vec<DailyHits> {
        let mut out = Vec::new();

        for bot in self.state.bots() {
            let Some(days) = self.state.daily_hits(bot) else {
                continue;
            };

            for (date, hits) in days {
                if range.contains(*date) {
                    out.push(DailyHits {
                        bot: bot.to_string(),
                        date: *date,
                        hits: *hits,
                    });
                }
            }
        }

        out
    }

    /// `(bot, path, hits)` across the whole input, busiest pages first within each bot.
    pub fn page_hits(&self) -> Vec<PageHits> {
        self.state
            .bots()
            .into_iter()
            .flat_map(|bot| self.pages_of(bot))
            .collect()
    }

    /// The `limit` busiest pages of `bot`.
    pub fn top_pages(&self, bot: &str, limit: usize) -> Vec<PageHits> {
        let mut pages = self.pages_of(bot);
        pages.truncate(limit);
        pages
    }

    /// Number of distinct client addresses per bot.
    pub fn unique_addresses(&self) -> BTreeMap<String, u64> {
        self.state
            .bots()
            .into_iter()
            .map(|bot| {
                let count = self
                    .state
                    .unique_addresses(bot)
                    .map(|set| set.len() as u64)
                    .unwrap_or(0);
                (bot.to_string(), count)
            })
            .collect()
    }

    pub fn export(&self, range: &DateRange) -> ResultExport {
        ResultExport {
            daily_hits: self.daily_hits_in(range),
            page_hits: self.page_hits(),
            unique_addresses: self.unique_addresses(),
            stats: self.stats.clone(),
        }
    }

    fn pages_of(&self, bot: &str) -> Vec<PageHits> {
        let Some(pages) = self.state.page_hits(bot) else {
            return Vec::new();
        };

        let mut out: Vec<PageHits> = pages
            .iter()
            .map(|(path, hits)| PageHits {
                bot: bot.to_string(),
                path: path.clone(),
                hits: *hits,
            })
            .collect();

        out.sort_by(|a, b| {
            Reverse(a.hits)
                .cmp(&Reverse(b.hits))
                .then_with(|| a.path.cmp(&b.path))
        });
        out
    }
}
