//! Run configuration.
//!
//! Paths default to the layout of the controls repository and are resolved
//! once, before the pipeline starts.

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};
use crate::parser::LoaderOptions;
use crate::transform::RowPolicy;

/// Default input spreadsheet, relative to the working directory.
pub const DEFAULT_INPUT: &str = "controls/controls_catalog.csv";

/// Default output catalog, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "controls/controls_catalog.json";

/// Everything a pipeline run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub loader: LoaderOptions,
    pub row_policy: RowPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            loader: LoaderOptions::default(),
            row_policy: RowPolicy::Abort,
        }
    }
}

impl Config {
    /// Defaults with the command-line paths applied on top.
    pub fn from_args(input: Option<PathBuf>, output: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();
        if let Some(input) = input {
            config.input = non_empty(input, "--input")?;
        }
        if let Some(output) = output {
            config.output = non_empty(output, "--output")?;
        }
        Ok(config)
    }

    pub fn with_paths(mut self, input: impl AsRef<Path>, output: impl AsRef<Path>) -> Self {
        self.input = input.as_ref().to_path_buf();
        self.output = output.as_ref().to_path_buf();
        self
    }

    pub fn with_row_policy(mut self, policy: RowPolicy) -> Self {
        self.row_policy = policy;
        self
    }

    pub fn with_loader(mut self, loader: LoaderOptions) -> Self {
        self.loader = loader;
        self
    }
}

fn non_empty(path: PathBuf, flag: &'static str) -> ConfigResult<PathBuf> {
    if path.as_os_str().is_empty() {
        Err(ConfigError::MissingPath { flag })
    } else {
        Ok(path)
    }
}
