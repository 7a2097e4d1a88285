use url::Url;

/// One sample input/expected-output pair attached to a problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleCase {
    /// Sample input text
    pub input: String,
    /// Expected output text
    pub output: String,
}

/// A single problem extracted from a contest site
///
/// Identified by (site, contest, name). Immutable once extracted; the
/// crawler builds it in one shot and never touches it again.
#[derive(Debug, Clone)]
pub struct Problem {
    /// URL of the problem page this was extracted from
    pub url: Url,
    /// Site identifier (the URL host)
    pub site: String,
    /// Contest the problem belongs to
    pub contest: String,
    /// Problem name within the contest
    pub name: String,
    /// Sample cases in page order
    pub samples: Vec<SampleCase>,
}
