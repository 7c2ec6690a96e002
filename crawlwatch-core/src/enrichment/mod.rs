mod unlisted;

pub use unlisted::UnlistedCrawlerClassifier;

#[cfg(test)]
mod tests {
    use super::UnlistedCrawlerClassifier;

    #[test]
    fn recognises_a_well_known_crawler() {
        let classifier = UnlistedCrawlerClassifier::new();

        let name = classifier.classify(
            "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)",
        );

        assert_eq!(name.as_deref(), Some("Googlebot"));
    }

    #[test]
    fn browsers_are_not_crawlers() {
        let classifier = UnlistedCrawlerClassifier::new();

        let name = classifier.classify(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
        );

        assert_eq!(name, None);
    }

    #[test]
    fn garbage_is_not_a_crawler() {
        let classifier = UnlistedCrawlerClassifier::new();

        assert_eq!(classifier.classify(""), None);
    }
}
