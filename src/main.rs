//! Kata main entry point
//!
//! This is the command-line interface for the kata competitive programming
//! workbench.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kata::config::{default_config_path, load_or_init};
use kata::judge::{discover_tests, print_result, print_summary, run_test};
use kata::problem::list_problem_dirs;
use kata::{Crawler, DocumentFetcher, Materializer, Verdict};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the contest-site session cookie
const SESSION_ENV: &str = "KATA_SESSION";

/// Kata: a competitive programming workbench
///
/// Kata fetches problems and their sample cases from supported contest
/// sites, stores them as a local directory tree, and judges solutions by
/// running a command against the saved samples.
#[derive(Parser, Debug)]
#[command(name = "kata")]
#[command(version)]
#[command(about = "A competitive programming workbench", long_about = None)]
struct Cli {
    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch every problem reachable from a contest or problem URL
    Fetch {
        /// Contest or problem page URL
        url: String,
    },
    /// Run a solution against the sample cases under the current directory
    Verify {
        /// Solution command, e.g. `./a.out` or `python3 main.py`
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
    /// List problems stored under the configured root
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    match cli.command {
        Command::Fetch { url } => handle_fetch(&url).await?,
        Command::Verify { command } => handle_verify(&command.join(" ")).await?,
        Command::List => handle_list()?,
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("kata=info,warn"),
            1 => EnvFilter::new("kata=debug,info"),
            2 => EnvFilter::new("kata=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles `kata fetch`: crawls out from the given URL and stores every
/// problem found along the way
async fn handle_fetch(url: &str) -> Result<()> {
    let config_path = default_config_path();
    let config = load_or_init(&config_path)
        .with_context(|| format!("failed to load configuration from {}", config_path.display()))?;

    let session = std::env::var(SESSION_ENV).ok();
    if session.is_some() {
        tracing::debug!("Using session cookie from {}", SESSION_ENV);
    }

    let fetcher = DocumentFetcher::new(session.as_deref())?;
    let crawler = Crawler::new(fetcher).with_max_fetches(config.max_fetches);
    let mut sink = Materializer::new(config.root_dir());

    let stats = crawler.crawl(url, &mut sink).await?;
    if stats.problems_found == 0 {
        tracing::warn!("No problems found at {}", url);
    }

    Ok(())
}

/// Handles `kata verify`: runs the command against every test case
/// discovered under the current directory
async fn handle_verify(command: &str) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to resolve the current directory")?;
    let tests = discover_tests(&cwd)?;
    if tests.is_empty() {
        println!("No test cases found under {}", cwd.display());
        return Ok(());
    }

    println!("Running {} test cases...", tests.len());
    let mut accepted = 0;
    let mut attempted = 0;
    for test in &tests {
        let result = match run_test(command, test).await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!("Error running {}: {}", test.name, e);
                continue;
            }
        };
        if let Err(e) = print_result(&result) {
            tracing::error!("Error reporting {}: {}", test.name, e);
            continue;
        }
        attempted += 1;
        if result.verdict == Verdict::Accepted {
            accepted += 1;
        }
    }
    print_summary(accepted, attempted);

    Ok(())
}

/// Handles `kata list`: prints the stored problem directories
fn handle_list() -> Result<()> {
    let config_path = default_config_path();
    let config = load_or_init(&config_path)
        .with_context(|| format!("failed to load configuration from {}", config_path.display()))?;
    for dir in list_problem_dirs(&config.root_dir())? {
        println!("{}", dir.display());
    }
    Ok(())
}
