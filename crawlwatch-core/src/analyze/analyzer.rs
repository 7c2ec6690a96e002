use crate::aggregate::{AggregateState, Aggregator, ResultSet, RunStats};
use crate::analyze::cancel::CancelFlag;
use crate::analyze::error::AnalyzeError;
use crate::analyze::input::{InputSource, for_each_line};
use crate::catalog::BotMatcher;
use crate::enrichment::UnlistedCrawlerClassifier;
use rayon::prelude::*;
use std::io::BufRead;

/// Runs whole inputs through parsing and aggregation.
///
/// A run is all-or-nothing: any read failure or cancellation returns an error
/// and the partially filled aggregates are dropped.
pub struct Analyzer {
    matcher: BotMatcher,
    unlisted: Option<UnlistedCrawlerClassifier>,
    cancel: CancelFlag,
}

impl Analyzer {
    pub fn new(matcher: BotMatcher) -> Self {
        Self {
            matcher,
            unlisted: None,
            cancel: CancelFlag::new(),
        }
    }

    pub fn with_unlisted_detection(mut self, enabled: bool) -> Self {
        self.unlisted = enabled.then(UnlistedCrawlerClassifier::new);
        self
    }

    pub fn with_cancel_flag(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn matcher(&self) -> &BotMatcher {
        &self.matcher
    }

    pub fn cancel_flag(&self) -> &CancelFlag {
        &self.cancel
    }

    /// A fresh aggregator wired to this analyzer's matcher and classifier.
    pub fn aggregator(&self) -> Aggregator<'_> {
        let agg = Aggregator::new(&self.matcher);
        match &self.unlisted {
            Some(classifier) => agg.with_unlisted(classifier),
            None => agg,
        }
    }

    /// Streams one reader through a single aggregator.
    pub fn analyze_reader<R: BufRead>(&self, reader: R) -> Result<ResultSet, AnalyzeError> {
        let mut agg = self.aggregator();
        self.fold(&mut agg, reader, "input")?;
        Ok(self.finish(agg))
    }

    /// Streams every source, in order, into one result.
    pub fn analyze_sources(&self, sources: &[InputSource]) -> Result<ResultSet, AnalyzeError> {
        let mut agg = self.aggregator();

        for source in sources {
            let origin = source.to_string();
            tracing::info!(input = %origin, "reading log input");

            let before = agg.stats().clone();
            self.fold(&mut agg, source.open()?, &origin)?;

            let after = agg.stats();
            tracing::info!(
                input = %origin,
                lines = after.lines_read - before.lines_read,
                malformed = after.malformed_lines - before.malformed_lines,
                "finished log input"
            );
        }

        Ok(self.finish(agg))
    }

    /// Same result as [`Analyzer::analyze_sources`], but every source is loaded
    /// into memory first and the lines are folded on the rayon pool.
    pub fn analyze_sources_parallel(
        &self,
        sources: &[InputSource],
    ) -> Result<ResultSet, AnalyzeError> {
        let mut state = AggregateState::new();
        let mut stats = RunStats::default();

        for source in sources {
            tracing::info!(input = %source, "loading log input");
            let bytes = source.read_all()?;
            let (s, st) =
                self.fold_parallel(&bytes, rayon::current_num_threads(), &source.to_string())?;
            state.merge(s);
            stats.merge(st);
        }

        Ok(self.log_summary(ResultSet::new(state, stats)))
    }

    /// Folds an in-memory buffer on the calling thread.
    pub fn analyze_bytes(&self, bytes: &[u8]) -> Result<ResultSet, AnalyzeError> {
        self.analyze_reader(bytes)
    }

    /// Folds an in-memory buffer as `chunks` line-aligned slices in parallel,
    /// then merges the partial aggregates.
    pub fn analyze_bytes_parallel(
        &self,
        bytes: &[u8],
        chunks: usize,
    ) -> Result<ResultSet, AnalyzeError> {
        let (state, stats) = self.fold_parallel(bytes, chunks, "input")?;
        Ok(self.log_summary(ResultSet::new(state, stats)))
    }

    fn fold_parallel(
        &self,
        bytes: &[u8],
        chunks: usize,
        origin: &str,
    ) -> Result<(AggregateState, RunStats), AnalyzeError> {
        split_lines(bytes, chunks)
            .into_par_iter()
            .map(|(offset, chunk)| -> Result<_, AnalyzeError> {
                let mut agg = self.aggregator().with_line_offset(offset);
                self.fold(&mut agg, chunk, origin)?;
                Ok(agg.into_parts())
            })
            .try_reduce(
                || (AggregateState::new(), RunStats::default()),
                |(mut state, mut stats), (s, st)| {
                    state.merge(s);
                    stats.merge(st);
                    Ok((state, stats))
                },
            )
    }

    fn fold<R: BufRead>(
        &self,
        agg: &mut Aggregator<'_>,
        reader: R,
        origin: &str,
    ) -> Result<(), AnalyzeError> {
        agg.begin_input(origin);

        let cancel = &self.cancel;
        for_each_line(reader, origin, || cancel.is_cancelled(), |line| {
            agg.push_line(line)
        })
    }

    fn finish(&self, agg: Aggregator<'_>) -> ResultSet {
        self.log_summary(agg.finish())
    }

    fn log_summary(&self, result: ResultSet) -> ResultSet {
        let stats = result.stats();
        tracing::info!(
            lines = stats.lines_read,
            malformed = stats.malformed_lines,
            matched = stats.matched_records,
            unmatched = stats.unmatched_records,
            undated = stats.undated_records,
            bots = result.bots().len(),
            "analysis complete"
        );
        result
    }
}

/// Splits `bytes` into at most `chunks` slices that each end on a line boundary.
/// Each slice comes with the number of lines that precede it.
pub fn split_lines(bytes: &[u8], chunks: usize) -> Vec<(u64, &[u8])> {
    let chunks = chunks.max(1);
    let target = bytes.len().div_ceil(chunks).max(1);

    let mut out = Vec::with_capacity(chunks);
    let mut start = 0;
    let mut lines_before = 0u64;

    while start < bytes.len() {
        let mut end = (start + target).min(bytes.len());
        if end < bytes.len() {
            end = match bytes[end - 1..].iter().position(|b| *b == b'\n') {
                Some(i) => end + i,
                None => bytes.len(),
            };
        }

        let chunk = &bytes[start..end];
        out.push((lines_before, chunk));
        lines_before += chunk.iter().filter(|b| **b == b'\n').count() as u64;
        start = end;
    }

    out
}
