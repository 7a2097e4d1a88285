//! Crawler coordinator - main crawl orchestration logic
//!
//! The crawl is a breadth-first walk over contest-site URLs:
//! - Contest pages contribute the problem URLs they link
//! - Problem pages yield a fully extracted [`Problem`] handed to the sink
//! - Anything else is ignored
//!
//! URLs are deduplicated on dequeue against a visited set keyed by the exact
//! URL string, so the same URL may sit in the queue several times but is
//! fetched at most once. Every per-URL failure is logged and the walk
//! continues; only an unparseable seed aborts the crawl.

use crate::crawler::DocumentFetcher;
use crate::problem::{Problem, ProblemSink};
use crate::site::{PageKind, SiteAdapter, SiteRegistry};
use crate::{KataError, Result};
use scraper::Html;
use std::collections::{HashSet, VecDeque};
use url::Url;

/// Counters accumulated over one crawl
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CrawlStats {
    /// Pages fetched over the network
    pub pages_fetched: u64,
    /// Problems handed to the sink
    pub problems_found: u64,
    /// Contest pages expanded into problem links
    pub contests_expanded: u64,
    /// URLs that failed and were skipped
    pub errors: u64,
}

/// What processing one URL produced
enum UrlOutcome {
    Problem,
    Contest(usize),
    Ignored,
}

/// Breadth-first crawler over contest sites
pub struct Crawler {
    fetcher: DocumentFetcher,
    registry: SiteRegistry,
    max_fetches: Option<u64>,
}

impl Crawler {
    /// Creates a crawler with the default site registry and no fetch bound
    pub fn new(fetcher: DocumentFetcher) -> Self {
        Self {
            fetcher,
            registry: SiteRegistry::default(),
            max_fetches: None,
        }
    }

    /// Replaces the site registry
    ///
    /// Integration tests use this to point an adapter at a local mock host.
    pub fn with_registry(mut self, registry: SiteRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Bounds the number of pages one crawl may fetch
    ///
    /// `None` (the default) crawls the full link graph.
    pub fn with_max_fetches(mut self, max_fetches: Option<u64>) -> Self {
        self.max_fetches = max_fetches;
        self
    }

    /// Crawls from a seed URL, handing every extracted problem to `sink`
    ///
    /// The queue and visited set live for this call only, so repeated calls
    /// start fresh.
    ///
    /// # Arguments
    ///
    /// * `seed` - Contest or problem URL to start from
    /// * `sink` - Receiver for extracted problems
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlStats)` - Counters for the finished crawl
    /// * `Err(KataError)` - Only when the seed URL itself does not parse
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn run() -> kata::Result<()> {
    /// use kata::crawler::{Crawler, DocumentFetcher};
    /// use kata::problem::Materializer;
    ///
    /// let crawler = Crawler::new(DocumentFetcher::new(None)?);
    /// let mut sink = Materializer::new("/tmp/problems");
    /// let stats = crawler
    ///     .crawl("https://atcoder.jp/contests/abc154/tasks", &mut sink)
    ///     .await?;
    /// println!("{} problems materialized", stats.problems_found);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn crawl(&self, seed: &str, sink: &mut dyn ProblemSink) -> Result<CrawlStats> {
        // The seed is the only URL whose parse failure is fatal
        Url::parse(seed).map_err(|source| KataError::InvalidUrl {
            url: seed.to_string(),
            source,
        })?;

        let mut queue: VecDeque<String> = VecDeque::new();
        let mut visited: HashSet<String> = HashSet::new();
        let mut stats = CrawlStats::default();
        queue.push_back(seed.to_string());

        while let Some(raw) = queue.pop_front() {
            // Duplicates are absorbed here, on dequeue, not on enqueue
            if !visited.insert(raw.clone()) {
                continue;
            }

            if let Some(limit) = self.max_fetches {
                if stats.pages_fetched >= limit {
                    tracing::warn!(
                        "Fetch limit of {} reached with {} URLs still pending",
                        limit,
                        queue.len() + 1
                    );
                    break;
                }
            }

            tracing::debug!("Processing URL: {}", raw);
            match self.process_url(&raw, &mut queue, sink, &mut stats).await {
                Ok(UrlOutcome::Problem) => stats.problems_found += 1,
                Ok(UrlOutcome::Contest(count)) => {
                    tracing::info!("Queued {} problem links from {}", count, raw);
                    stats.contests_expanded += 1;
                }
                Ok(UrlOutcome::Ignored) => {
                    tracing::debug!("Ignoring {}", raw);
                }
                Err(e) => {
                    tracing::error!("Error processing {}: {}", raw, e);
                    stats.errors += 1;
                }
            }
        }

        tracing::info!(
            "Crawl completed: {} pages fetched, {} problems, {} errors",
            stats.pages_fetched,
            stats.problems_found,
            stats.errors
        );
        Ok(stats)
    }

    /// Processes a single URL
    ///
    /// Parse, dispatch, fetch, classify, then either extract a problem or
    /// expand a contest into queued links. Every error returned here counts
    /// as one per-URL failure.
    async fn process_url(
        &self,
        raw: &str,
        queue: &mut VecDeque<String>,
        sink: &mut dyn ProblemSink,
        stats: &mut CrawlStats,
    ) -> Result<UrlOutcome> {
        let url = Url::parse(raw).map_err(|source| KataError::InvalidUrl {
            url: raw.to_string(),
            source,
        })?;

        // Host dispatch happens before any network traffic
        let kind = self.registry.detect(&url)?;

        let body = self.fetcher.fetch(&url).await?;
        stats.pages_fetched += 1;

        let adapter = kind.adapter(url.clone(), Html::parse_document(&body));
        match adapter.classify() {
            PageKind::Problem => {
                let problem = extract_problem(adapter.as_ref(), &url)?;
                sink.accept(&problem)?;
                Ok(UrlOutcome::Problem)
            }
            PageKind::Contest => {
                let links = adapter.related_problem_urls()?;
                let count = links.len();
                for link in &links {
                    queue.push_back(link.to_string());
                }
                Ok(UrlOutcome::Contest(count))
            }
            PageKind::Other => Ok(UrlOutcome::Ignored),
        }
    }
}

/// Pulls a full problem out of an adapter
///
/// Any extraction failure aborts the whole problem; nothing partial ever
/// reaches a sink.
fn extract_problem(adapter: &dyn SiteAdapter, url: &Url) -> Result<Problem> {
    Ok(Problem {
        url: url.clone(),
        site: adapter.site_name(),
        contest: adapter.contest_name()?,
        name: adapter.problem_name()?,
        samples: adapter.sample_cases()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crawl_stats_start_at_zero() {
        let stats = CrawlStats::default();
        assert_eq!(stats.pages_fetched, 0);
        assert_eq!(stats.problems_found, 0);
        assert_eq!(stats.contests_expanded, 0);
        assert_eq!(stats.errors, 0);
    }

    #[tokio::test]
    async fn test_unparseable_seed_is_fatal() {
        let crawler = Crawler::new(DocumentFetcher::new(None).unwrap());
        let mut sink = DropSink;

        let err = crawler.crawl("not a url", &mut sink).await.unwrap_err();
        assert!(matches!(err, KataError::InvalidUrl { .. }));
    }

    struct DropSink;

    impl ProblemSink for DropSink {
        fn accept(&mut self, _problem: &Problem) -> Result<()> {
            Ok(())
        }
    }
}
