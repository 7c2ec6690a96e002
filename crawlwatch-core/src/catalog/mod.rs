//! Bot catalog and user-agent matching.

mod matcher;

pub use matcher::{BotMatcher, MatchPolicy, Matches};

/// Ordered list of bot signatures.
///
/// A signature is a literal, case-sensitive substring of a user-agent string.
/// Duplicates collapse onto their first occurrence and empty signatures are
/// dropped, since an empty needle would match every request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BotCatalog {
    signatures: Vec<String>,
}

impl BotCatalog {
    pub fn new<I, S>(signatures: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for sig in signatures {
            let sig = sig.into();
            if sig.is_empty() || out.contains(&sig) {
                continue;
            }
            out.push(sig);
        }
        Self { signatures: out }
    }

    pub fn signatures(&self) -> &[String] {
        &self.signatures
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.signatures.iter().map(String::as_str)
    }

    pub fn contains(&self, signature: &str) -> bool {
        self.signatures.iter().any(|s| s == signature)
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}
