use crate::domain::model::{SinkKind, SourceKind, StageKind};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipeError {
    #[error("Cannot read source {source_kind}: {source}")]
    SourceUnavailable {
        source_kind: SourceKind,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write sink {sink}: {source}")]
    SinkUnavailable {
        sink: SinkKind,
        #[source]
        source: std::io::Error,
    },

    #[error("Stage '{stage}' failed: {source}")]
    StageFailure {
        stage: StageKind,
        #[source]
        source: std::io::Error,
    },

    #[error("Usage error: {message}")]
    UsageError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Output,
    Transform,
    Usage,
    Configuration,
}

impl PipeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PipeError::SourceUnavailable { .. } => ErrorCategory::Input,
            PipeError::SinkUnavailable { .. } => ErrorCategory::Output,
            PipeError::StageFailure { .. } => ErrorCategory::Transform,
            PipeError::UsageError { .. } => ErrorCategory::Usage,
            PipeError::ConfigError { .. } | PipeError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    /// sysexits(3) 退出碼
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Usage => 64,
            ErrorCategory::Transform => 65,
            ErrorCategory::Input => 66,
            ErrorCategory::Output => 73,
            ErrorCategory::Configuration => 78,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PipeError::SourceUnavailable { .. } => {
                "Check that the file exists under BASE_PATH and is readable"
            }
            PipeError::SinkUnavailable { .. } => {
                "Check write permissions for the output directory, or use --out"
            }
            PipeError::StageFailure {
                stage: StageKind::GzipDecompress,
                ..
            } => "Input is not valid gzip data; drop --decompress for plain text",
            PipeError::StageFailure { .. } => "Re-run with --verbose to see the stage chain",
            PipeError::UsageError { .. } => "Run with --help to see the available options",
            PipeError::ConfigError { .. } | PipeError::InvalidConfigValueError { .. } => {
                "Check the command-line flags and the BASE_PATH environment variable"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PipeError::SourceUnavailable {
                source_kind,
                source,
            } => format!("Unable to read {}: {}", source_kind, source),
            PipeError::SinkUnavailable { sink, source } => {
                format!("Unable to write {}: {}", sink, source)
            }
            PipeError::StageFailure { stage, source } => {
                format!("The {} step failed: {}", stage, source)
            }
            other => other.to_string(),
        }
    }

    /// Writes the failure to stderr; stdout may be carrying pipeline data.
    pub fn report(&self) {
        tracing::debug!(
            "Pipeline failed: {} (Category: {:?}, exit code {})",
            self,
            self.category(),
            self.exit_code()
        );
        eprintln!("❌ {}", self.user_friendly_message());
        eprintln!("💡 Suggestion: {}", self.recovery_suggestion());
    }
}

pub type Result<T> = std::result::Result<T, PipeError>;
