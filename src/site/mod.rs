//! Site adapters for supported contest sites
//!
//! Each supported site implements [`SiteAdapter`], the capability set the
//! crawler drives:
//! - Page classification (contest listing, problem statement, other)
//! - Contest and problem name extraction
//! - Sample case extraction
//! - Problem link discovery on contest pages
//!
//! Adapter selection is keyed on the URL host through a [`SiteRegistry`],
//! before any fetch happens. The crawler never branches on site identity
//! after that; it only calls the trait.

mod atcoder;
mod codeforces;

pub use atcoder::AtCoder;
pub use codeforces::Codeforces;

use crate::problem::SampleCase;
use crate::{KataError, Result};
use scraper::Html;
use std::collections::HashMap;
use url::Url;

/// What kind of page a fetched document represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// A contest page listing problems
    Contest,
    /// A single problem statement
    Problem,
    /// Anything else; ignored by the crawler
    Other,
}

/// Supported contest sites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiteKind {
    AtCoder,
    Codeforces,
}

impl SiteKind {
    /// Constructs this site's adapter over an already-fetched document
    pub fn adapter(self, url: Url, document: Html) -> Box<dyn SiteAdapter> {
        match self {
            SiteKind::AtCoder => Box::new(AtCoder::new(url, document)),
            SiteKind::Codeforces => Box::new(Codeforces::new(url, document)),
        }
    }
}

/// Maps URL hosts to the site responsible for them
///
/// The default registry claims the two production hosts. Tests register
/// extra hosts to aim an adapter at a local mock server.
#[derive(Debug, Clone)]
pub struct SiteRegistry {
    hosts: HashMap<String, SiteKind>,
}

impl Default for SiteRegistry {
    fn default() -> Self {
        let mut hosts = HashMap::new();
        hosts.insert("atcoder.jp".to_string(), SiteKind::AtCoder);
        hosts.insert("codeforces.com".to_string(), SiteKind::Codeforces);
        Self { hosts }
    }
}

impl SiteRegistry {
    /// Registers an additional host for a site
    pub fn register(&mut self, host: impl Into<String>, kind: SiteKind) {
        self.hosts.insert(host.into(), kind);
    }

    /// Resolves the site responsible for a URL
    ///
    /// # Errors
    ///
    /// Fails with [`KataError::UnsupportedSite`] for hosts no adapter claims.
    pub fn detect(&self, url: &Url) -> Result<SiteKind> {
        let host = url.host_str().unwrap_or_default();
        self.hosts
            .get(host)
            .copied()
            .ok_or_else(|| KataError::UnsupportedSite {
                host: host.to_string(),
            })
    }
}

/// Capability set every site adapter provides
pub trait SiteAdapter {
    /// Site identifier derived from the URL host
    fn site_name(&self) -> String;

    /// Classifies the page as contest listing, problem statement, or other
    fn classify(&self) -> PageKind;

    /// Human-readable contest name
    ///
    /// Fails with [`KataError::NotFound`] when the page carries none.
    fn contest_name(&self) -> Result<String>;

    /// Human-readable problem name
    ///
    /// Fails with [`KataError::NotFound`] when the page carries none.
    fn problem_name(&self) -> Result<String>;

    /// Sample cases in document order
    ///
    /// Fails with [`KataError::NoSamples`] when the page yields no pairs or
    /// when the extracted inputs and outputs do not pair up.
    fn sample_cases(&self) -> Result<Vec<SampleCase>>;

    /// Absolute URLs of the problems linked from a contest page
    ///
    /// Fails with [`KataError::NoUrls`] when no links are found.
    fn related_problem_urls(&self) -> Result<Vec<Url>>;
}

/// Pairs alternating sample texts into cases
///
/// Even positions are inputs and odd positions are the matching expected
/// outputs, in document order. Empty texts are dropped before positions are
/// assigned, so an empty node does not shift the pairing of the nodes around
/// it.
pub(crate) fn pair_samples<I>(texts: I, url: &Url) -> Result<Vec<SampleCase>>
where
    I: IntoIterator<Item = String>,
{
    let mut inputs = Vec::new();
    let mut outputs = Vec::new();

    for (position, text) in texts.into_iter().filter(|t| !t.is_empty()).enumerate() {
        if position % 2 == 0 {
            inputs.push(text);
        } else {
            outputs.push(text);
        }
    }

    if inputs.is_empty() || inputs.len() != outputs.len() {
        return Err(KataError::NoSamples {
            url: url.to_string(),
        });
    }

    Ok(inputs
        .into_iter()
        .zip(outputs)
        .map(|(input, output)| SampleCase { input, output })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_url() -> Url {
        Url::parse("https://atcoder.jp/contests/abc100/tasks/abc100_a").unwrap()
    }

    fn texts(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_registry_detects_default_hosts() {
        let registry = SiteRegistry::default();

        let atcoder = Url::parse("https://atcoder.jp/contests/abc100/tasks").unwrap();
        assert_eq!(registry.detect(&atcoder).unwrap(), SiteKind::AtCoder);

        let codeforces = Url::parse("https://codeforces.com/contest/1200").unwrap();
        assert_eq!(registry.detect(&codeforces).unwrap(), SiteKind::Codeforces);
    }

    #[test]
    fn test_registry_rejects_unknown_host() {
        let registry = SiteRegistry::default();
        let url = Url::parse("https://example.com/contests/abc100/tasks").unwrap();

        let err = registry.detect(&url).unwrap_err();
        assert!(matches!(err, KataError::UnsupportedSite { host } if host == "example.com"));
    }

    #[test]
    fn test_registry_accepts_registered_host() {
        let mut registry = SiteRegistry::default();
        registry.register("127.0.0.1", SiteKind::AtCoder);

        let url = Url::parse("http://127.0.0.1:8080/contests/x/tasks").unwrap();
        assert_eq!(registry.detect(&url).unwrap(), SiteKind::AtCoder);
    }

    #[test]
    fn test_pair_samples_alternates_in_order() {
        let cases = pair_samples(texts(&["in 1", "out 1", "in 2", "out 2"]), &test_url()).unwrap();

        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].input, "in 1");
        assert_eq!(cases[0].output, "out 1");
        assert_eq!(cases[1].input, "in 2");
        assert_eq!(cases[1].output, "out 2");
    }

    #[test]
    fn empty_nodes_do_not_shift_pairing() {
        // The empty node sits between an input and its output; it must not
        // consume a position.
        let cases =
            pair_samples(texts(&["in 1", "", "out 1", "in 2", "out 2"]), &test_url()).unwrap();

        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].input, "in 1");
        assert_eq!(cases[0].output, "out 1");
        assert_eq!(cases[1].input, "in 2");
        assert_eq!(cases[1].output, "out 2");
    }

    #[test]
    fn test_pair_samples_rejects_zero_pairs() {
        let err = pair_samples(texts(&[]), &test_url()).unwrap_err();
        assert!(matches!(err, KataError::NoSamples { .. }));

        // All-empty nodes reduce to zero pairs as well
        let err = pair_samples(texts(&["", "", ""]), &test_url()).unwrap_err();
        assert!(matches!(err, KataError::NoSamples { .. }));
    }

    #[test]
    fn test_pair_samples_rejects_unbalanced_counts() {
        let err = pair_samples(texts(&["in 1", "out 1", "in 2"]), &test_url()).unwrap_err();
        assert!(matches!(err, KataError::NoSamples { .. }));
    }
}
