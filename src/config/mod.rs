#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_one_of, validate_output_file, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "txt-compiler.toml";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// 編譯設定；預設讀取目前目錄並輸出到 ./compiled.txt，檔案之間加分隔線
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    pub input_folder: PathBuf,
    pub output_file: PathBuf,
    pub add_separators: bool,
    pub include_filenames: bool,
    pub include_hidden: bool,
    pub logging: Option<LoggingConfig>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<LogFormat>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            input_folder: PathBuf::from("./"),
            output_file: PathBuf::from("./compiled.txt"),
            add_separators: true,
            include_filenames: false,
            include_hidden: false,
            logging: None,
            monitoring: None,
        }
    }
}

impl CompilerConfig {
    /// 取得日誌等級
    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    /// 取得日誌格式
    pub fn log_format(&self) -> LogFormat {
        self.logging
            .as_ref()
            .and_then(|l| l.format)
            .unwrap_or_default()
    }

    /// 取得監控設定
    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for CompilerConfig {
    fn input_folder(&self) -> &Path {
        &self.input_folder
    }

    fn output_file(&self) -> &Path {
        &self.output_file
    }

    fn add_separators(&self) -> bool {
        self.add_separators
    }

    fn include_filenames(&self) -> bool {
        self.include_filenames
    }

    fn include_hidden(&self) -> bool {
        self.include_hidden
    }
}

impl Validate for CompilerConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_folder", &self.input_folder.to_string_lossy())?;
        validate_output_file("output_file", &self.output_file.to_string_lossy())?;

        if let Some(level) = self.log_level() {
            validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }

        Ok(())
    }
}
