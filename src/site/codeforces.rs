//! Codeforces site adapter
//!
//! Codeforces paths do not encode the page kind reliably, so pages classify
//! by content: a page is a problem statement when both its contest and
//! problem names extract, and a contest listing when it links problems.
//! Extraction failures during classification just mean "not this kind of
//! page".

use crate::problem::SampleCase;
use crate::site::{pair_samples, PageKind, SiteAdapter};
use crate::{KataError, Result};
use scraper::{Html, Selector};
use url::Url;

const CONTEST_NAME_SELECTOR: &str = "div > table.rtable > tbody > tr > th.left > a";
const PROBLEM_NAME_SELECTOR: &str = "div.problem-statement div.header div.title";
const SAMPLE_SELECTOR: &str = "div.sample-test pre";
const PROBLEM_CELL_SELECTOR: &str = "td.id";
const PROBLEM_LINK_SELECTOR: &str = "a";

/// Adapter for codeforces.com
pub struct Codeforces {
    url: Url,
    document: Html,
}

impl Codeforces {
    pub fn new(url: Url, document: Html) -> Self {
        Self { url, document }
    }

    fn first_text(&self, selector: &Selector) -> Option<String> {
        self.document
            .select(selector)
            .next()
            .map(|element| element.text().collect::<String>().trim().to_string())
    }
}

impl SiteAdapter for Codeforces {
    fn site_name(&self) -> String {
        self.url.host_str().unwrap_or_default().to_string()
    }

    fn classify(&self) -> PageKind {
        if self.contest_name().is_ok() && self.problem_name().is_ok() {
            PageKind::Problem
        } else if self.related_problem_urls().is_ok() {
            PageKind::Contest
        } else {
            PageKind::Other
        }
    }

    fn contest_name(&self) -> Result<String> {
        let selector = Selector::parse(CONTEST_NAME_SELECTOR).unwrap();
        self.first_text(&selector)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| KataError::NotFound {
                what: "contest name",
                url: self.url.to_string(),
            })
    }

    fn problem_name(&self) -> Result<String> {
        let selector = Selector::parse(PROBLEM_NAME_SELECTOR).unwrap();
        self.first_text(&selector)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| KataError::NotFound {
                what: "problem name",
                url: self.url.to_string(),
            })
    }

    fn sample_cases(&self) -> Result<Vec<SampleCase>> {
        // Inside div.sample-test the input and output <pre> blocks alternate
        // in document order.
        let selector = Selector::parse(SAMPLE_SELECTOR).unwrap();
        let texts = self
            .document
            .select(&selector)
            .map(|element| element.text().collect::<String>());
        pair_samples(texts, &self.url)
    }

    fn related_problem_urls(&self) -> Result<Vec<Url>> {
        let cell_selector = Selector::parse(PROBLEM_CELL_SELECTOR).unwrap();
        let link_selector = Selector::parse(PROBLEM_LINK_SELECTOR).unwrap();

        let mut urls = Vec::new();
        for cell in self.document.select(&cell_selector) {
            if let Some(link) = cell.select(&link_selector).next() {
                if let Some(href) = link.value().attr("href") {
                    if let Ok(resolved) = self.url.join(href) {
                        urls.push(resolved);
                    }
                }
            }
        }

        if urls.is_empty() {
            return Err(KataError::NoUrls {
                url: self.url.to_string(),
            });
        }
        Ok(urls)
    }
}
