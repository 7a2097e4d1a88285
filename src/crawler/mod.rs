//! Crawling: fetching contest-site pages and walking their link graph
//!
//! The [`DocumentFetcher`] wraps one HTTP client; the [`Crawler`] drives a
//! breadth-first traversal from a seed URL, handing every extracted problem
//! to a [`crate::problem::ProblemSink`].

mod coordinator;
mod fetcher;

pub use coordinator::{CrawlStats, Crawler};
pub use fetcher::DocumentFetcher;
