use std::path::PathBuf;

use anyhow::ensure;
use susy_core::{action, config::Config};
use susy_webclient::{ClientOptions, SusyClient, Url};

use crate::util;

#[derive(Debug, clap::Parser)]
#[command(author, version, about, long_about = None)]
pub struct GlobalArgs {
    /// Path to the program to be tested (e.g. lab04.py)
    pub program_file: PathBuf,

    /// Exercise number (e.g. 4 for lab04)
    pub exercise: u32,

    /// Test number; when omitted, runs tests 01 through 10
    pub test: Option<u32>,

    /// Judge base URL (the index page of the course offering)
    #[arg(long)]
    pub base_url: Option<Url>,

    /// Skip TLS certificate verification (the judge uses a self-signed cert)
    #[arg(long)]
    pub insecure: bool,

    /// Interpreter used to launch the program
    #[arg(long)]
    pub interpreter: Option<PathBuf>,

    /// Per-test execution time limit in milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,
}

pub type CmdResult = anyhow::Result<()>;

impl GlobalArgs {
    pub async fn exec(&self) -> CmdResult {
        let cfg = self.effective_config()?;

        ensure!(
            self.program_file.is_file(),
            "No such program file: {}",
            self.program_file.to_string_lossy()
        );

        let cli = SusyClient::new(ClientOptions {
            verify_tls: cfg.judge.verify_tls,
        });

        match self.test {
            Some(test) => {
                let _ = action::run_single(
                    &cli,
                    &cfg.judge.base_url,
                    &self.program_file,
                    self.exercise,
                    test,
                    &cfg.test,
                )
                .await?;
            }
            None => {
                let _ = action::run_all(
                    &cli,
                    &cfg.judge.base_url,
                    &self.program_file,
                    self.exercise,
                    &cfg.test,
                )
                .await?;
            }
        }
        Ok(())
    }

    /// Config file (if any) with command-line flags applied on top.
    fn effective_config(&self) -> anyhow::Result<Config> {
        let mut cfg = Config::from_file_finding_in_ancestors_or_default(util::current_dir())?;

        if let Some(url) = &self.base_url {
            cfg.judge.base_url = url.clone();
        }
        if self.insecure {
            cfg.judge.verify_tls = false;
        }
        if let Some(interpreter) = &self.interpreter {
            cfg.test.interpreter = interpreter.clone();
        }
        if let Some(ms) = self.timeout_ms {
            cfg.test.execution_time_limit_ms = Some(ms);
        }
        Ok(cfg)
    }
}
