#[cfg(feature = "cli")]
pub mod cli;
pub mod usage;

use crate::core::ConfigProvider;
use crate::utils::error::{PipeError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_NAME: &str = "out.txt";
pub const DEFAULT_COMPRESSED_OUTPUT_NAME: &str = "out.txt.gz";

/// Process-wide settings resolved once at startup and handed to the planner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub base_path: PathBuf,
    pub output_name: String,
    pub compressed_output_name: String,
}

impl RuntimeConfig {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
            compressed_output_name: DEFAULT_COMPRESSED_OUTPUT_NAME.to_string(),
        }
    }

    /// `BASE_PATH` if set and non-empty, otherwise the directory holding the executable.
    pub fn from_env() -> Result<Self> {
        let base = match env::var_os("BASE_PATH") {
            Some(value) if !value.is_empty() => PathBuf::from(value),
            _ => executable_dir()?,
        };

        let base_path = std::path::absolute(&base).map_err(|e| PipeError::ConfigError {
            message: format!("cannot resolve BASE_PATH '{}': {}", base.display(), e),
        })?;

        Ok(Self::new(base_path))
    }

    /// `from_env` followed by validation; what the binaries call.
    pub fn load() -> Result<Self> {
        let config = Self::from_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Relative paths land under the base path; absolute paths are kept.
    pub fn resolve(&self, file: &str) -> PathBuf {
        self.base_path.join(file)
    }
}

fn executable_dir() -> Result<PathBuf> {
    let exe = env::current_exe().map_err(|e| PipeError::ConfigError {
        message: format!("cannot locate the running executable: {}", e),
    })?;

    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| PipeError::ConfigError {
            message: format!("executable '{}' has no parent directory", exe.display()),
        })
}

impl ConfigProvider for RuntimeConfig {
    fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn output_name(&self) -> &str {
        &self.output_name
    }

    fn compressed_output_name(&self) -> &str {
        &self.compressed_output_name
    }
}

impl Validate for RuntimeConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("output_name", &self.output_name)?;
        validate_non_empty_string("compressed_output_name", &self.compressed_output_name)?;
        Ok(())
    }
}

/// Which branch of the command line applies, checked in the same order the flags are documented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Help,
    File(String),
    Stdin,
    Invalid,
}

impl Mode {
    pub fn select(help: bool, file: Option<&str>, stdin: bool, positionals: &[String]) -> Self {
        if help {
            return Mode::Help;
        }
        // 空字串的 --file= 視同未指定
        if let Some(file) = file.filter(|f| !f.is_empty()) {
            return Mode::File(file.to_string());
        }
        if stdin || positionals.iter().any(|arg| arg == "-") {
            return Mode::Stdin;
        }
        Mode::Invalid
    }
}
