//! AtCoder site adapter
//!
//! AtCoder URLs are regular enough that pages classify by path shape alone:
//! `/contests/<id>/tasks` is a contest's task list and
//! `/contests/<id>/tasks/<task>` is a single problem statement. Samples sit
//! in the task statement as alternating `<pre>` blocks.

use crate::problem::SampleCase;
use crate::site::{pair_samples, PageKind, SiteAdapter};
use crate::{KataError, Result};
use scraper::{Html, Selector};
use url::Url;

const CONTEST_NAME_SELECTOR: &str = ".contest-title";
const PROBLEM_NAME_SELECTOR: &str = "head > title";
const SAMPLE_SELECTOR: &str =
    "div#task-statement > span.lang > span.lang-ja > div.part > section > pre";
const TASK_ROW_SELECTOR: &str = "tbody > tr";
const TASK_LINK_SELECTOR: &str = "td > a";

/// Adapter for atcoder.jp
pub struct AtCoder {
    url: Url,
    document: Html,
}

impl AtCoder {
    pub fn new(url: Url, document: Html) -> Self {
        Self { url, document }
    }

    fn path_segments(&self) -> Vec<&str> {
        self.url
            .path_segments()
            .map(|segments| segments.collect())
            .unwrap_or_default()
    }

    fn first_text(&self, selector: &Selector) -> Option<String> {
        self.document
            .select(selector)
            .next()
            .map(|element| element.text().collect::<String>().trim().to_string())
    }
}

impl SiteAdapter for AtCoder {
    fn site_name(&self) -> String {
        self.url.host_str().unwrap_or_default().to_string()
    }

    fn classify(&self) -> PageKind {
        match self.path_segments().as_slice() {
            [_, _, "tasks"] => PageKind::Contest,
            [_, _, "tasks", task] if !task.is_empty() => PageKind::Problem,
            _ => PageKind::Other,
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
        let selector = Selector::parse(SAMPLE_SELECTOR).unwrap();
        let texts = self
            .document
            .select(&selector)
            .map(|element| element.text().collect::<String>());
        pair_samples(texts, &self.url)
    }

    fn related_problem_urls(&self) -> Result<Vec<Url>> {
        let row_selector = Selector::parse(TASK_ROW_SELECTOR).unwrap();
        let link_selector = Selector::parse(TASK_LINK_SELECTOR).unwrap();

        let mut urls = Vec::new();
        for row in self.document.select(&row_selector) {
            if let Some(link) = row.select(&link_selector).next() {
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
