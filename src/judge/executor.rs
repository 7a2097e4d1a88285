//! Test execution
//!
//! Each test runs the user command under `sh -c`, feeding the sample input
//! on stdin and capturing stdout, the same effect as
//! `cat input | sh -c command`. The verdict is an exact string comparison
//! against the expected-output file; elapsed wall-clock time is recorded but
//! never judged.

use crate::judge::TestFile;
use crate::{KataError, Result};
use std::fmt;
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Outcome of comparing actual and expected output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Actual output matched the expected output exactly
    Accepted,
    /// Outputs differed
    WrongAnswer,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Accepted => write!(f, "OK"),
            Verdict::WrongAnswer => write!(f, "Wrong Answer"),
        }
    }
}

/// Result of running one test case
#[derive(Debug, Clone)]
pub struct TestResult {
    /// The test that ran
    pub test: TestFile,
    /// Captured stdout of the command
    pub stdout: String,
    /// Wall-clock time from spawn to exit
    pub elapsed: Duration,
    /// Comparison verdict
    pub verdict: Verdict,
}

/// Runs `command` under `sh -c` against one test case
///
/// # Arguments
///
/// * `command` - Shell command, e.g. `./a.out` or `python3 main.py`
/// * `test` - The input/expected-output pair to run it against
///
/// # Errors
///
/// Fails with [`KataError::Execution`] when the shell cannot be spawned or
/// the command exits non-zero. A wrong answer is not an error; it comes back
/// as [`Verdict::WrongAnswer`].
pub async fn run_test(command: &str, test: &TestFile) -> Result<TestResult> {
    let input = tokio::fs::read(&test.input_path).await?;
    let expected = tokio::fs::read_to_string(&test.output_path).await?;

    let start = Instant::now();
    let mut child = Command::new("sh")
        .arg("-c")
        .arg(command)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|e| KataError::Execution {
            command: command.to_string(),
            message: format!("failed to spawn shell: {}", e),
        })?;

    let mut stdin = child.stdin.take().ok_or_else(|| KataError::Execution {
        command: command.to_string(),
        message: "stdin handle unavailable".to_string(),
    })?;
    let feed = async move {
        // The command may exit before reading all of stdin; its exit status
        // is the authoritative signal, so write errors are ignored.
        let _ = stdin.write_all(&input).await;
        let _ = stdin.shutdown().await;
    };

    // Feed stdin while collecting output so a full pipe cannot deadlock
    let (output, ()) = tokio::join!(child.wait_with_output(), feed);
    let elapsed = start.elapsed();

    let output = output.map_err(|e| KataError::Execution {
        command: command.to_string(),
        message: format!("failed to collect output: {}", e),
    })?;

    if !output.status.success() {
        return Err(KataError::Execution {
            command: command.to_string(),
            message: format!("exited with {}", output.status),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let verdict = if stdout == expected {
        Verdict::Accepted
    } else {
        Verdict::WrongAnswer
    };

    Ok(TestResult {
        test: test.clone(),
        stdout,
        elapsed,
        verdict,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_file(dir: &TempDir, name: &str, input: &str, output: &str) -> TestFile {
        let input_path = dir.path().join(format!("{}_in.txt", name));
        let output_path = dir.path().join(format!("{}_out.txt", name));
        fs::write(&input_path, input).unwrap();
        fs::write(&output_path, output).unwrap();
        TestFile {
            name: name.to_string(),
            input_path,
            output_path,
        }
    }

    #[tokio::test]
    async fn test_cat_matches_expected_output() {
        let dir = TempDir::new().unwrap();
        let test = create_test_file(&dir, "sample_00", "5\n", "5\n");

        let result = run_test("cat", &test).await.unwrap();
        assert_eq!(result.verdict, Verdict::Accepted);
        assert_eq!(result.stdout, "5\n");
    }

    #[tokio::test]
    async fn test_mismatch_is_wrong_answer_with_captured_output() {
        let dir = TempDir::new().unwrap();
        let test = create_test_file(&dir, "sample_00", "5\n", "6\n");

        let result = run_test("cat", &test).await.unwrap();
        assert_eq!(result.verdict, Verdict::WrongAnswer);
        assert_eq!(result.stdout, "5\n");
    }

    #[tokio::test]
    async fn test_comparison_is_exact() {
        let dir = TempDir::new().unwrap();
        // Trailing newline missing on the expected side
        let test = create_test_file(&dir, "sample_00", "5\n", "5");

        let result = run_test("cat", &test).await.unwrap();
        assert_eq!(result.verdict, Verdict::WrongAnswer);
    }

    #[tokio::test]
    async fn test_nonzero_exit_is_execution_error() {
        let dir = TempDir::new().unwrap();
        let test = create_test_file(&dir, "sample_00", "5\n", "5\n");

        let err = run_test("exit 7", &test).await.unwrap_err();
        assert!(matches!(err, KataError::Execution { .. }));
    }

    #[tokio::test]
    async fn test_unknown_command_is_execution_error() {
        let dir = TempDir::new().unwrap();
        let test = create_test_file(&dir, "sample_00", "5\n", "5\n");

        // The shell spawns fine and exits 127
        let err = run_test("kata-no-such-binary-xyz", &test).await.unwrap_err();
        assert!(matches!(err, KataError::Execution { .. }));
    }

    #[tokio::test]
    async fn test_command_ignoring_stdin_still_runs() {
        let dir = TempDir::new().unwrap();
        let test = create_test_file(&dir, "sample_00", "ignored input\n", "hi\n");

        let result = run_test("echo hi", &test).await.unwrap();
        assert_eq!(result.verdict, Verdict::Accepted);
    }

    #[tokio::test]
    async fn test_elapsed_time_is_recorded() {
        let dir = TempDir::new().unwrap();
        let test = create_test_file(&dir, "sample_00", "5\n", "5\n");

        let result = run_test("sleep 0.05 && cat", &test).await.unwrap();
        assert!(result.elapsed >= Duration::from_millis(50));
    }
}
