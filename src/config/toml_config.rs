use super::GatewayConfig;
use crate::utils::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional local configuration file. Every present value overrides the environment.
///
/// ```toml
/// [gateway]
/// efs_folder = "./efs"
/// file_name = "data.xlsx"
/// write_file = true
/// read_file = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub gateway: GatewaySection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GatewaySection {
    pub read_file: Option<bool>,
    pub write_file: Option<bool>,
    pub write_read_logs: Option<bool>,
    pub copy_file: Option<bool>,
    pub efs_folder: Option<String>,
    pub file_name: Option<String>,
    pub new_file_name: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GatewayError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| GatewayError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn apply_to(&self, config: &mut GatewayConfig) {
        let section = &self.gateway;

        if let Some(v) = section.read_file {
            config.read_file = v;
        }
        if let Some(v) = section.write_file {
            config.write_file = v;
        }
        if let Some(v) = section.write_read_logs {
            config.write_read_logs = v;
        }
        if let Some(v) = section.copy_file {
            config.copy_file = v;
        }
        if let Some(v) = &section.efs_folder {
            config.efs_folder = v.clone();
        }
        if let Some(v) = &section.file_name {
            config.file_name = v.clone();
        }
        if let Some(v) = &section.new_file_name {
            config.new_file_name = v.clone();
        }
    }
}
