use crate::aggregate::result::ResultSet;
use crate::aggregate::state::AggregateState;
use crate::aggregate::stats::RunStats;
use crate::catalog::BotMatcher;
use crate::enrichment::UnlistedCrawlerClassifier;
use crate::parse::{LogRecord, parse_line};

/// Input name used until [`Aggregator::begin_input`] is called.
const DEFAULT_INPUT: &str = "input";

/// Single-pass fold of log lines into an [`AggregateState`].
///
/// The aggregator borrows its matcher, so several of them can run side by side
/// over disjoint chunks of input and be merged afterwards.
pub struct Aggregator<'a> {
    matcher: &'a BotMatcher,
    unlisted: Option<&'a UnlistedCrawlerClassifier>,
    state: AggregateState,
    stats: RunStats,
    line_offset: u64,
    input: String,
    input_start: u64,
}

impl<'a> Aggregator<'a> {
    pub fn new(matcher: &'a BotMatcher) -> Self {
        Self {
            matcher,
            unlisted: None,
            state: AggregateState::new(),
            stats: RunStats::default(),
            line_offset: 0,
            input: DEFAULT_INPUT.to_string(),
            input_start: 0,
        }
    }

    /// Tally unmatched crawler traffic with `classifier`.
    pub fn with_unlisted(mut self, classifier: &'a UnlistedCrawlerClassifier) -> Self {
        self.unlisted = Some(classifier);
        self
    }

    /// Line numbers reported in diagnostics start after `offset`.
    pub fn with_line_offset(mut self, offset: u64) -> Self {
        self.line_offset = offset;
        self
    }

    /// Marks the start of a new input. Diagnostics name `origin` and count
    /// lines from the first line pushed after this call.
    pub fn begin_input(&mut self, origin: &str) {
        self.input = origin.to_string();
        self.input_start = self.stats.lines_read;
    }

    /// 1-based number, within the current input, of the last line pushed.
    pub fn current_line(&self) -> u64 {
        self.line_offset + self.stats.lines_read - self.input_start
    }

    /// Parses and folds one raw line. Blank lines are counted but otherwise ignored.
    pub fn push_line(&mut self, line: &str) {
        self.stats.lines_read += 1;

        if line.trim().is_empty() {
            return;
        }

        match parse_line(line) {
            Some(record) => self.push_record(&record),
            None => {
                self.stats.malformed_lines += 1;
                tracing::debug!(
                    input = %self.input,
                    line = self.current_line(),
                    "skipping malformed log line"
                );
            }
        }
    }

    /// Folds an already parsed record.
    pub fn push_record(&mut self, record: &LogRecord) {
        if record.timestamp.is_none() {
            self.stats.undated_records += 1;
        }

        let matcher = self.matcher;
        let bots = matcher.matches(&record.user_agent);

        if bots.is_empty() {
            self.stats.unmatched_records += 1;

            if let Some(name) = self
                .unlisted
                .and_then(|classifier| classifier.classify(&record.user_agent))
            {
                *self.stats.unlisted_crawlers.entry(name).or_insert(0) += 1;
            }
            return;
        }

        self.stats.matched_records += 1;
        for bot in bots {
            self.state.record(bot, record);
        }
    }

    /// Absorbs the work of another aggregator, typically one that ran over a different chunk.
    pub fn merge(&mut self, other: Aggregator<'_>) {
        let (state, stats) = other.into_parts();
        self.state.merge(state);
        self.stats.merge(stats);
    }

    pub fn state(&self) -> &AggregateState {
        &self.state
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    pub fn into_parts(self) -> (AggregateState, RunStats) {
        (self.state, self.stats)
    }

    /// Freezes the aggregates.
    pub fn finish(self) -> ResultSet {
        ResultSet::new(self.state, self.stats)
    }
}
