//! Verdict reporting
//!
//! Prints one block per test case and a final tally. On a wrong answer the
//! expected-output file is read back so both sides of the diff are shown.

use crate::judge::{TestResult, Verdict};
use crate::Result;
use colored::Colorize;
use std::borrow::Cow;
use std::path::Path;

const SEPARATOR: &str = "-----------------------------------------";

fn base_name(path: &Path) -> Cow<'_, str> {
    match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => path.to_string_lossy(),
    }
}

/// Prints the result block for one test case
///
/// # Arguments
///
/// * `result` - The result to display
///
/// # Returns
///
/// * `Ok(())` - Block printed
/// * `Err(KataError)` - The expected-output file could not be read back
pub fn print_result(result: &TestResult) -> Result<()> {
    println!("{}", SEPARATOR);
    println!("Name: {}", result.test.name);
    println!("Input: {}", base_name(&result.test.input_path));
    println!("Output: {}", base_name(&result.test.output_path));
    println!("[Time] {:?}", result.elapsed);

    let label = format!("[{}]", result.verdict);
    match result.verdict {
        Verdict::Accepted => {
            println!("{}", label.green().bold());
        }
        Verdict::WrongAnswer => {
            println!("{}", label.yellow().bold());
            let expected = std::fs::read_to_string(&result.test.output_path)?;
            println!("Actual:");
            println!("{}", result.stdout);
            println!("Expected:");
            println!("{}", expected);
        }
    }
    Ok(())
}

/// Prints the final tally after all test cases ran
///
/// # Arguments
///
/// * `accepted` - Number of tests with an `Accepted` verdict
/// * `attempted` - Number of tests that produced any verdict
pub fn print_summary(accepted: usize, attempted: usize) {
    println!("{}", SEPARATOR);
    println!("The test result is {} / {}", accepted, attempted);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::judge::TestFile;
    use std::fs;
    use std::time::Duration;
    use tempfile::TempDir;

    fn create_test_result(dir: &TempDir, verdict: Verdict, stdout: &str) -> TestResult {
        let input_path = dir.path().join("sample_00_in.txt");
        let output_path = dir.path().join("sample_00_out.txt");
        fs::write(&input_path, "1\n").unwrap();
        fs::write(&output_path, "2\n").unwrap();
        TestResult {
            test: TestFile {
                name: "sample_00".to_string(),
                input_path,
                output_path,
            },
            stdout: stdout.to_string(),
            elapsed: Duration::from_millis(12),
            verdict,
        }
    }

    #[test]
    fn test_print_accepted_result() {
        let dir = TempDir::new().unwrap();
        let result = create_test_result(&dir, Verdict::Accepted, "2\n");
        assert!(print_result(&result).is_ok());
    }

    #[test]
    fn test_print_wrong_answer_reads_expected_file() {
        let dir = TempDir::new().unwrap();
        let result = create_test_result(&dir, Verdict::WrongAnswer, "3\n");
        assert!(print_result(&result).is_ok());
    }

    #[test]
    fn test_print_wrong_answer_fails_without_expected_file() {
        let dir = TempDir::new().unwrap();
        let result = create_test_result(&dir, Verdict::WrongAnswer, "3\n");
        fs::remove_file(&result.test.output_path).unwrap();
        assert!(print_result(&result).is_err());
    }

    #[test]
    fn test_base_name_strips_directories() {
        assert_eq!(base_name(Path::new("/a/b/sample_00_in.txt")), "sample_00_in.txt");
        assert_eq!(base_name(Path::new("sample_00_in.txt")), "sample_00_in.txt");
    }
}
