use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompileError {
    #[error("No .txt files found in {}", .dir.display())]
    NoInputFiles { dir: PathBuf },

    #[error("Cannot read input directory {}: {source}", .path.display())]
    InputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error writing output file {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value:?}): {reason}")]
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
    Config,
}

impl CompileError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CompileError::NoInputFiles { .. }
            | CompileError::InputDir { .. }
            | CompileError::FileRead { .. } => ErrorCategory::Input,
            CompileError::OutputWrite { .. } => ErrorCategory::Output,
            CompileError::IoError(_)
            | CompileError::ConfigError { .. }
            | CompileError::InvalidConfigValueError { .. } => ErrorCategory::Config,
        }
    }

    /// 給使用者看的修正建議
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CompileError::NoInputFiles { .. } => {
                "Check input_folder and make sure it contains .txt files"
            }
            CompileError::InputDir { .. } => "Make sure input_folder exists and is readable",
            CompileError::FileRead { .. } => "Check the file permissions",
            CompileError::OutputWrite { .. } => {
                "Make sure output_file points to a writable location"
            }
            CompileError::IoError(_) => "Check the configuration file path",
            CompileError::ConfigError { .. } | CompileError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and try again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CompileError>;
