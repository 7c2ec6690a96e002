use crate::catalog::BotCatalog;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Signatures found in one user-agent. Almost always zero or one entry.
pub type Matches<'a> = SmallVec<[&'a str; 2]>;

/// How a user-agent matching several signatures is attributed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// Count the request toward every matching signature.
    #[default]
    All,
    /// Count the request toward the first matching signature in catalog order.
    First,
}

impl std::fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchPolicy::All => f.write_str("all"),
            MatchPolicy::First => f.write_str("first"),
        }
    }
}

/// Substring matcher over a fixed [`BotCatalog`].
///
/// Each signature is checked with a plain `str::contains`, which is fine for a
/// catalog of a few dozen entries.
// TODO: switch to a multi-pattern automaton (aho-corasick) once catalogs grow into the hundreds.
#[derive(Debug, Clone)]
pub struct BotMatcher {
    catalog: BotCatalog,
    policy: MatchPolicy,
}

impl BotMatcher {
    pub fn new(catalog: BotCatalog) -> Self {
        Self::with_policy(catalog, MatchPolicy::All)
    }

    pub fn with_policy(catalog: BotCatalog, policy: MatchPolicy) -> Self {
        Self { catalog, policy }
    }

    pub fn catalog(&self) -> &BotCatalog {
        &self.catalog
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Signatures contained in `user_agent`, in catalog order.
    pub fn matches<'a>(&'a self, user_agent: &str) -> Matches<'a> {
        let mut out = Matches::new();

        for sig in self.catalog.iter() {
            if user_agent.contains(sig) {
                out.push(sig);
                if self.policy == MatchPolicy::First {
                    break;
                }
            }
        }

        out
    }

    pub fn is_match(&self, user_agent: &str) -> bool {
        self.catalog.iter().any(|sig| user_agent.contains(sig))
    }
}
