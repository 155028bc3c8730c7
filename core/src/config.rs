use std::path::{Path, PathBuf};
use std::result::Result as StdResult;

use anyhow::Context as _;
use serde::Deserialize;
use susy_webclient::susy::urls::DEFAULT_BASE_URL;
use susy_webclient::Url;

use crate::testing::ProgramRunner;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    #[serde(skip)]
    pub source_config_file: Option<PathBuf>,
    pub judge: JudgeConfig,
    pub test: TestConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct JudgeConfig {
    pub base_url: Url,
    pub verify_tls: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TestConfig {
    pub interpreter: PathBuf,
    pub execution_time_limit_ms: Option<u64>,
}

impl Config {
    pub const FILENAME: &str = "susy.toml";

    pub fn from_toml(s: &str) -> StdResult<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn from_toml_file(filepath: PathBuf) -> anyhow::Result<Self> {
        let toml = std::fs::read_to_string(&filepath)
            .with_context(|| format!("Cannot read a file {:?}", filepath))?;
        let mut cfg = Self::from_toml(&toml)
            .with_context(|| format!("Invalid config TOML: {:?}", filepath))?;
        cfg.source_config_file = Some(filepath);
        Ok(cfg)
    }

    /// Find config file in ancestor dirs, including current dir.
    pub fn find_file_in_ancestors(cur_dir: impl AsRef<Path>) -> Option<PathBuf> {
        cur_dir
            .as_ref()
            .ancestors()
            .map(|dir| dir.join(Self::FILENAME))
            .find(|path| path.is_file())
    }

    /// Loads the nearest config file, or the built-in defaults when there is
    /// none; the tool works from any directory.
    pub fn from_file_finding_in_ancestors_or_default(
        cur_dir: impl AsRef<Path>,
    ) -> anyhow::Result<Self> {
        match Self::find_file_in_ancestors(cur_dir) {
            Some(path) => Self::from_toml_file(path),
            None => Ok(Self::default()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_config_file: None,
            judge: JudgeConfig::default(),
            test: TestConfig::default(),
        }
    }
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.clone(),
            verify_tls: true,
        }
    }
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            interpreter: ProgramRunner::DEFAULT_INTERPRETER.into(),
            execution_time_limit_ms: None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const EXAMPLE_TOML: &str = r#"
[judge]
base-url = "https://susy.ic.unicamp.br:9999/mc999"
verify-tls = false

[test]
interpreter = "python3.11"
execution-time-limit-ms = 2000
"#;

    #[test]
    fn example_toml_should_be_parsable() {
        let cfg = Config::from_toml(EXAMPLE_TOML).unwrap();

        let Config {
            source_config_file,
            judge,
            test,
        } = cfg;

        assert_eq!(source_config_file, None);
        assert_eq!(
            judge.base_url.as_str(),
            "https://susy.ic.unicamp.br:9999/mc999"
        );
        assert_eq!(judge.verify_tls, false);
        assert_eq!(test.interpreter, Path::new("python3.11"));
        assert_eq!(test.execution_time_limit_ms, Some(2000));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg = Config::from_toml("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.judge.base_url, *DEFAULT_BASE_URL);
        assert!(cfg.judge.verify_tls);
        assert_eq!(cfg.test.execution_time_limit_ms, None);

        let cfg = Config::from_toml("[judge]\nverify-tls = false\n").unwrap();
        assert_eq!(cfg.judge.verify_tls, false);
        assert_eq!(cfg.judge.base_url, Config::default().judge.base_url);
        assert_eq!(cfg.test, TestConfig::default());
    }
}
