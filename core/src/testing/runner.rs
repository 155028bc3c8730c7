use std::{
    io,
    path::{Path, PathBuf},
    process::Stdio,
    time::Duration,
};

use tokio::{io::AsyncWriteExt as _, process::Command};

/// Captured streams and exit status of one program run.
///
/// The exit status is recorded for callers but takes no part in the verdict;
/// correctness is judged on stdout text alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

#[derive(thiserror::Error, Debug)]
pub enum RunError {
    #[error("Failed to spawn '{cmd}'")]
    Launch {
        cmd: String,

        #[source]
        source: io::Error,
    },

    #[error("Execution time limit exceeded ({}ms)", .limit.as_millis())]
    Timeout { limit: Duration },

    #[error("Failed to communicate with subprocess")]
    Stream(#[from] io::Error),
}

/// Runs a target program as `{interpreter} {program_file}` with piped stdio.
#[derive(Debug, Clone)]
pub struct ProgramRunner {
    interpreter: PathBuf,
    execution_time_limit: Option<Duration>,
}

impl ProgramRunner {
    pub const DEFAULT_INTERPRETER: &str = "python3";

    pub fn new() -> Self {
        Self {
            interpreter: Self::DEFAULT_INTERPRETER.into(),
            execution_time_limit: None,
        }
    }

    pub fn interpreter(mut self, interpreter: impl Into<PathBuf>) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    pub fn execution_time_limit(mut self, limit: Duration) -> Self {
        self.execution_time_limit = Some(limit);
        self
    }

    pub fn get_interpreter(&self) -> &Path {
        &self.interpreter
    }

    pub fn get_exec_time_limit(&self) -> Option<Duration> {
        self.execution_time_limit
    }

    pub fn command_line(&self, program_file: &Path) -> String {
        format!(
            "{} {}",
            self.interpreter.to_string_lossy(),
            program_file.to_string_lossy(),
        )
    }

    /// Feeds `input` to the program's stdin and captures stdout and stderr in
    /// full. A non-zero exit is not an error; failing to start the process or
    /// exceeding the time limit is. The pipes are closed on every exit path.
    pub async fn run(&self, program_file: &Path, input: &str) -> Result<ProcessOutput, RunError> {
        let mut proc = Command::new(&self.interpreter)
            .arg(program_file)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| RunError::Launch {
                cmd: self.command_line(program_file),
                source: e,
            })?;

        let mut stdin = proc.stdin.take().ok_or_else(|| pipe_error("stdin"))?;
        let mut stdout = proc.stdout.take().ok_or_else(|| pipe_error("stdout"))?;
        let mut stderr = proc.stderr.take().ok_or_else(|| pipe_error("stderr"))?;

        if let Err(e) = stdin.write_all(input.as_bytes()).await {
            // The program may exit without draining its stdin.
            if e.kind() != io::ErrorKind::BrokenPipe {
                return Err(RunError::Stream(e));
            }
        }
        drop(stdin); // close the pipe so the child sees EOF

        let mut stdout_buf = Vec::new();
        let mut stderr_buf = Vec::new();

        let res = {
            let drain_and_wait = async {
                tokio::try_join!(
                    tokio::io::copy(&mut stdout, &mut stdout_buf),
                    tokio::io::copy(&mut stderr, &mut stderr_buf),
                    proc.wait(),
                )
            };
            match self.execution_time_limit {
                Some(limit) => tokio::time::timeout(limit, drain_and_wait)
                    .await
                    .map_err(|_| limit),
                None => Ok(drain_and_wait.await),
            }
        };

        match res {
            Err(limit) => {
                proc.kill()
                    .await
                    .unwrap_or_else(|e| log::warn!("Failed to kill timed out process: {:#}", e));
                Err(RunError::Timeout { limit })
            }

            Ok(Err(e)) => Err(RunError::Stream(e)),

            Ok(Ok((_, _, exit_status))) => Ok(ProcessOutput {
                status: exit_status.code(),
                stdout: String::from_utf8_lossy(&stdout_buf).into(),
                stderr: String::from_utf8_lossy(&stderr_buf).into(),
            }),
        }
    }
}

impl Default for ProgramRunner {
    fn default() -> Self {
        Self::new()
    }
}

fn pipe_error(name: &str) -> RunError {
    RunError::Stream(io::Error::new(
        io::ErrorKind::BrokenPipe,
        format!("Failed to open {}", name),
    ))
}
