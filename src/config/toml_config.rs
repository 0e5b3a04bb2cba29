use crate::config::list_config::ListConfig;
use crate::utils::error::{GogetError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use regex::Regex;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Optional settings file, e.g.
///
/// ```toml
/// list_paths = ["${HOME}/.config/goget.list"]
/// fetch_command = "go install"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub list_paths: Option<Vec<String>>,
    pub fetch_command: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| GogetError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| GogetError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HOME})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| GogetError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Overlays the file's settings onto `base`.
    pub fn apply(&self, base: ListConfig) -> Result<ListConfig> {
        let mut config = base;
        if let Some(paths) = &self.list_paths {
            config.candidates = paths.iter().map(PathBuf::from).collect();
        }
        if let Some(command) = &self.fetch_command {
            config = config.with_fetch_command(command)?;
        }
        Ok(config)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(paths) = &self.list_paths {
            if paths.is_empty() {
                return Err(GogetError::ValidationError {
                    field: "list_paths".to_string(),
                    reason: "list_paths cannot be an empty array".to_string(),
                });
            }
            for path in paths {
                validate_path("list_paths", path)?;
            }
        }
        if let Some(command) = &self.fetch_command {
            validate_non_empty_string("fetch_command", command)?;
        }
        Ok(())
    }
}
