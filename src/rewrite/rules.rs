//! Ordered literal substitution rules.
//!
//! # Responsibilities
//! - Rebrand the upstream domain and url path hooks
//! - Rename "eth2"/"eth1" terminology across its spellings
//! - Point news links at this gateway
//! - Repair identifiers the renaming corrupts
//!
//! # Design Decisions
//! - One full pass per rule, in declaration order
//! - Corrective rules come last and see already-renamed text
//! - Patterns are literals, never regexes

use crate::config::SiteConfig;

/// Upstream news link prefix rewritten to point at `/news/` on this gateway.
pub const UPSTREAM_NEWS_LINK: &str = "https://hackmd.io/@benjaminion/wnie2_";

/// A single literal replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub pattern: String,
    pub replacement: String,
}

impl Rule {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }

    /// Replace every occurrence of the pattern.
    pub fn apply(&self, text: &str) -> String {
        text.replace(&self.pattern, &self.replacement)
    }
}

/// The fixed, ordered rule set applied to news pages.
#[derive(Debug, Clone)]
pub struct RewriteRules {
    rules: Vec<Rule>,
}

impl RewriteRules {
    /// Build from an explicit ordered list.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The consensus-layer renaming for the given site identity.
    pub fn consensus_layer(site: &SiteConfig) -> Self {
        Self::new(vec![
            Rule::new(
                "window.domain = 'hackmd.io'",
                format!("window.domain = '{}'", site.domain),
            ),
            Rule::new("window.urlpath = ''", "window.urlpath = 'forward'"),
            Rule::new("eth2.news", "consensuslayer.news"),
            Rule::new("Ethereum 2.0", "Ethereum Consensus Layer"),
            Rule::new("Eth2", "Ethereum Consensus Layer"),
            Rule::new("ETH2", "Eth CL"),
            Rule::new("eth2", "eth CL"),
            Rule::new("eth 2", "eth CL"),
            Rule::new("Eth 2", "Eth CL"),
            Rule::new("Ethereum 1.0", "Ethereum Execution Layer"),
            Rule::new("Eth1", "Ethereum Execution Layer"),
            Rule::new("ETH1", "Eth EL"),
            Rule::new("eth1", "eth EL"),
            Rule::new("eth 1", "eth EL"),
            Rule::new("Eth 1", "Eth EL"),
            Rule::new(UPSTREAM_NEWS_LINK, site.news_path()),
            // links broken by the "eth2" rule above (hidden in the page anyway)
            Rule::new("newineth CL", "newineth2"),
            Rule::new("/eth CL_news/", "/eth2news/"),
        ])
    }

    /// Run every rule over `body`, in order.
    pub fn apply(&self, body: &str) -> String {
        self.rules
            .iter()
            .fold(body.to_string(), |text, rule| rule.apply(&text))
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}
