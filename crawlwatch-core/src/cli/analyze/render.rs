use crate::aggregate::{DateRange, ResultSet};
use owo_colors::{OwoColorize, Style};

/// Longest bar drawn for a bot's busiest day.
const BAR_WIDTH: u64 = 30;

pub const NO_ACTIVITY: &str = "no bot activity found";

#[derive(Debug, Clone)]
pub struct TableOptions {
    pub range: DateRange,
    /// Pages listed per bot.
    pub top: usize,
    /// Emit ANSI styling.
    pub color: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            range: DateRange::default(),
            top: 10,
            color: false,
        }
    }
}

pub fn render_table(result: &ResultSet, opts: &TableOptions) -> String {
    let mut out = String::new();

    let (heading, dim, bar) = if opts.color {
        (
            Style::new().bold().cyan(),
            Style::new().dimmed(),
            Style::new().green(),
        )
    } else {
        (Style::new(), Style::new(), Style::new())
    };

    if result.is_empty() {
        out.push_str(NO_ACTIVITY);
        out.push('\n');
        render_footer(&mut out, result, dim);
        return out;
    }

    let addresses = result.unique_addresses();
    let daily = result.daily_hits_in(&opts.range);

    for bot in result.bots() {
        out.push_str(&format!("{}\n", bot.style(heading)));
        out.push_str(&format!(
            "  unique addresses: {}   total hits: {}\n",
            addresses.get(bot).copied().unwrap_or(0),
            result.total_hits(bot)
        ));

        let undated = result.state().undated_hits(bot);
        if undated > 0 {
            out.push_str(&format!(
                "  {}\n",
                format!("{undated} hits without a readable timestamp").style(dim)
            ));
        }

        // Daily series, scaled against the bot's busiest day in range.
        let days: Vec<_> = daily.iter().filter(|d| d.bot == bot).collect();
        out.push_str("  daily hits:\n");
        if days.is_empty() {
            out.push_str(&format!("    {}\n", "<none in range>".style(dim)));
        } else {
            let max = days.iter().map(|d| d.hits).max().unwrap_or(1).max(1);
            for day in &days {
                let width = (day.hits * BAR_WIDTH / max).max(1) as usize;
                out.push_str(&format!(
                    "    {}  {:<w$}  {}\n",
                    day.date,
                    "█".repeat(width).style(bar),
                    day.hits,
                    w = BAR_WIDTH as usize
                ));
            }
        }

        let pages = result.top_pages(bot, opts.top);
        if !pages.is_empty() {
            out.push_str("  top pages:\n");
            for page in pages {
                out.push_str(&format!("    {:>8}  {}\n", page.hits, page.path));
            }
        }
        out.push('\n');
    }

    render_footer(&mut out, result, dim);
    out
}

fn render_footer(out: &mut String, result: &ResultSet, dim: Style) {
    let stats = result.stats();
    let line = format!(
        "lines: {}  malformed: {}  matched: {}  unmatched: {}  undated: {}",
        stats.lines_read,
        stats.malformed_lines,
        stats.matched_records,
        stats.unmatched_records,
        stats.undated_records
    );
    out.push_str(&format!("{}\n", line.style(dim)));

    if !stats.unlisted_crawlers.is_empty() {
        out.push_str("unlisted crawlers:\n");
        for (name, hits) in &stats.unlisted_crawlers {
            out.push_str(&format!("  {hits:>8}  {name}\n"));
        }
    }
}
