use woothee::parser::Parser;

const CRAWLER_CATEGORY: &str = "crawler";

/// Recognises crawlers the catalog does not list, using woothee's built-in
/// user-agent dataset.
pub struct UnlistedCrawlerClassifier {
    parser: Parser,
}

impl UnlistedCrawlerClassifier {
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
        }
    }

    /// Crawler name for `user_agent`, or `None` when woothee does not consider it a crawler.
    pub fn classify(&self, user_agent: &str) -> Option<String> {
        let result = self.parser.parse(user_agent)?;

        if result.category != CRAWLER_CATEGORY {
            return None;
        }

        Some(result.name.to_string())
    }
}

impl Default for UnlistedCrawlerClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for UnlistedCrawlerClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnlistedCrawlerClassifier").finish()
    }
}
