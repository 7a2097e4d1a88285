//! Local judging: sample discovery, execution, and verdict reporting
//!
//! Discovery pairs `<name>_in.txt` / `<name>_out.txt` files under a
//! directory tree; the executor runs a user command against each pair and
//! classifies the result by exact output comparison; the report module
//! prints per-case blocks and the final tally.

mod discovery;
mod executor;
mod report;

pub use discovery::{discover_tests, TestFile, INPUT_SUFFIX, OUTPUT_SUFFIX};
pub use executor::{run_test, TestResult, Verdict};
pub use report::{print_result, print_summary};
