//! Problem model and materialization
//!
//! A [`Problem`] is what the crawler extracts from a problem page; the
//! [`Materializer`] is the production [`ProblemSink`] that writes it to the
//! on-disk layout consumed later by test discovery.

mod materializer;
mod types;

pub use materializer::{list_problem_dirs, Materializer, PROBLEM_MARKER};
pub use types::{Problem, SampleCase};

use crate::Result;

/// Receives problems discovered during a crawl
///
/// The crawler hands over each fully extracted problem exactly once, in
/// traversal order. A failing sink call counts as a per-URL error; it does
/// not stop the crawl.
pub trait ProblemSink {
    /// Accepts one fully extracted problem
    fn accept(&mut self, problem: &Problem) -> Result<()>;
}
