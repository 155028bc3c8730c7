pub mod error {
    #[allow(unused_imports)]
    pub(crate) use anyhow::{anyhow, bail, ensure, Context as _};
    pub use anyhow::{Error, Result};
}

use std::path::Path;
use std::time::Duration;

use colored::Colorize as _;
use error::*;
use susy_webclient::{SusyClient, Url, MAX_TEST_INDEX};

use crate::config::TestConfig;
use crate::style;
use crate::testing::{compare, render, ProgramRunner, RunError};

/// Title-level outcome of one test index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestVerdict {
    pub test: u32,
    pub passed: bool,
}

/// Runs one test: fetches the fixture pair, executes the program with its
/// input, diffs the outputs and prints the report. Returns the title-level
/// verdict.
///
/// A program that cannot be started or that exceeds the time limit is a
/// reportable outcome, shown in the report like the program's own stderr.
/// Fetch failures propagate to the caller.
pub async fn run_single(
    cli: &SusyClient,
    base_url: &Url,
    program_file: impl AsRef<Path>,
    exercise: u32,
    test: u32,
    cfg: &TestConfig,
) -> Result<bool> {
    let program_file = program_file.as_ref();

    let testcase = cli
        .fetch_testcase(base_url, exercise, test)
        .await
        .with_context(|| {
            format!(
                "Failed to fetch test {:02} of exercise {:02}",
                test, exercise
            )
        })?;

    let runner = runner_for(cfg);
    log::info!("Running: {}", runner.command_line(program_file));

    let (obtained, stderr_text) = match runner.run(program_file, &testcase.input).await {
        Ok(output) => (output.stdout, output.stderr),
        Err(e @ (RunError::Launch { .. } | RunError::Timeout { .. })) => {
            (String::new(), format!("{:#}", Error::from(e)))
        }
        Err(RunError::Stream(e)) => {
            return Err(Error::from(e).context("Failed to communicate with subprocess"));
        }
    };

    let comparison = compare(&obtained, &testcase.expected);
    println!("{}\n", render(test, &comparison, &stderr_text));
    Ok(comparison.passed)
}

/// Always attempts tests 01 through 10, whatever availability count the judge
/// publishes. A test whose fixtures fail to download is reported on stderr and
/// the remaining indices still run. Prints a summary after the last test.
pub async fn run_all(
    cli: &SusyClient,
    base_url: &Url,
    program_file: impl AsRef<Path>,
    exercise: u32,
    cfg: &TestConfig,
) -> Result<Vec<TestVerdict>> {
    let program_file = program_file.as_ref();

    let mut verdicts = Vec::new();
    for test in 1..=MAX_TEST_INDEX {
        match run_single(cli, base_url, program_file, exercise, test, cfg).await {
            Ok(passed) => verdicts.push(TestVerdict { test, passed }),
            Err(e) => eprintln!("{}", format!("Teste {:02}: {:#}", test, e).bright_red()),
        }
    }

    style::print_test_summary(&verdicts, MAX_TEST_INDEX as usize);
    Ok(verdicts)
}

fn runner_for(cfg: &TestConfig) -> ProgramRunner {
    let mut runner = ProgramRunner::new().interpreter(&cfg.interpreter);
    if let Some(ms) = cfg.execution_time_limit_ms {
        runner = runner.execution_time_limit(Duration::from_millis(ms));
    }
    runner
}
