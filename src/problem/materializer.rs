//! Problem directory materialization
//!
//! Problems land on disk as
//! `<root>/<site>/<contest>/<problem>/sample/sample_NN_in.txt` (and
//! `_out.txt`), with a `.problem.json` marker at the problem directory root
//! recording where the problem came from. Re-fetching a problem rewrites the
//! marker and the sample files.

use crate::problem::{Problem, ProblemSink};
use crate::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Marker file written into every problem directory
pub const PROBLEM_MARKER: &str = ".problem.json";

/// Subdirectory sample cases are written into
const SAMPLE_DIR: &str = "sample";

/// Contents of the `.problem.json` marker
#[derive(Debug, Serialize)]
struct ProblemMarker<'a> {
    url: &'a str,
    contest_name: &'a str,
    problem_name: &'a str,
    created_at: DateTime<Utc>,
}

/// Writes problems into the on-disk layout
pub struct Materializer {
    root: PathBuf,
}

impl Materializer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Creates the directory tree and sample files for one problem
    ///
    /// Prints one `Created <dir>` line per problem directory and returns the
    /// directory path.
    ///
    /// # Errors
    ///
    /// Any directory or file write failure surfaces as an IO error.
    pub fn materialize(&self, problem: &Problem) -> Result<PathBuf> {
        let dir = self.problem_dir(problem);
        fs::create_dir_all(&dir)?;

        let marker = ProblemMarker {
            url: problem.url.as_str(),
            contest_name: &problem.contest,
            problem_name: &problem.name,
            created_at: Utc::now(),
        };
        fs::write(
            dir.join(PROBLEM_MARKER),
            serde_json::to_string_pretty(&marker)?,
        )?;

        let sample_dir = dir.join(SAMPLE_DIR);
        fs::create_dir_all(&sample_dir)?;
        for (index, case) in problem.samples.iter().enumerate() {
            fs::write(
                sample_dir.join(format!("sample_{:02}_in.txt", index)),
                &case.input,
            )?;
            fs::write(
                sample_dir.join(format!("sample_{:02}_out.txt", index)),
                &case.output,
            )?;
        }

        println!("Created {}", dir.display());
        Ok(dir)
    }

    fn problem_dir(&self, problem: &Problem) -> PathBuf {
        self.root
            .join(sanitize(&problem.site))
            .join(sanitize(&problem.contest))
            .join(sanitize_problem(&problem.name))
    }
}

impl ProblemSink for Materializer {
    fn accept(&mut self, problem: &Problem) -> Result<()> {
        self.materialize(problem).map(|_| ())
    }
}

/// Makes a site or contest name safe as a path component
fn sanitize(name: &str) -> String {
    name.replace(' ', "").replace('/', "\\")
}

/// Problem names additionally drop dots and stars
fn sanitize_problem(name: &str) -> String {
    sanitize(name).replace('.', "_").replace('*', "")
}

/// Lists materialized problem directories under the root, sorted
///
/// The layout is exactly three levels deep (site/contest/problem), so this
/// walks three directory levels and nothing more. A missing root yields an
/// empty list.
pub fn list_problem_dirs(root: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for site in read_subdirs(root)? {
        for contest in read_subdirs(&site)? {
            dirs.extend(read_subdirs(&contest)?);
        }
    }
    dirs.sort();
    Ok(dirs)
}

fn read_subdirs(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut subdirs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            subdirs.push(entry.path());
        }
    }
    subdirs.sort();
    Ok(subdirs)
}
