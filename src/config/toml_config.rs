use super::{CompilerConfig, DEFAULT_CONFIG_FILE};
use crate::utils::error::{CompileError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};

impl CompilerConfig {
    /// 決定要讀取的配置檔：指定路徑優先，否則使用工作目錄下存在的預設檔
    pub fn resolve_path(path: Option<&Path>) -> Option<PathBuf> {
        match path {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                default_path.exists().then(|| default_path.to_path_buf())
            }
        }
    }

    /// 載入配置：指定路徑必須存在；未指定且沒有預設檔時使用內建預設值
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match Self::resolve_path(path) {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CompileError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CompileError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${NOTES_DIR})；未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CompileError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// Serializes the config back to TOML, e.g. to print the effective settings.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CompileError::ConfigError {
            message: format!("TOML serialization error: {}", e),
        })
    }
}
