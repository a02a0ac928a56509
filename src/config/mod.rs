#[cfg(feature = "cli")]
pub mod cli;
pub mod env;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliArgs;
pub use toml_config::TomlConfig;

use crate::utils::error::Result;
use crate::utils::validation::{validate_present, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Options resolved once at the start of an invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GatewayConfig {
    pub read_file: bool,
    pub write_file: bool,
    pub write_read_logs: bool,
    pub copy_file: bool,
    pub efs_folder: String,
    pub file_name: String,
    pub new_file_name: String,
}

impl GatewayConfig {
    pub fn folder(&self) -> &Path {
        Path::new(&self.efs_folder)
    }

    /// The configured spreadsheet inside the folder.
    pub fn source_path(&self) -> PathBuf {
        self.folder().join(&self.file_name)
    }

    /// Target of a copy.
    pub fn destination_path(&self) -> PathBuf {
        self.folder().join(&self.new_file_name)
    }

    pub fn log_summary(&self) {
        tracing::info!("readFile => {}", self.read_file);
        tracing::info!("writeFile => {}", self.write_file);
        tracing::info!("writeReadLogs => {}", self.write_read_logs);
        tracing::info!("fileDirectory => {}", self.efs_folder);
        tracing::info!("fileName => {}", self.file_name);
        tracing::info!("newFileName => {}", self.new_file_name);
        tracing::info!("fullFilePath => {}", self.source_path().display());
        tracing::info!("copyFile => {}", self.copy_file);
    }
}

impl Validate for GatewayConfig {
    fn validate(&self) -> Result<()> {
        validate_present(env::EFS_FOLDER, &self.efs_folder)?;
        validate_present(env::FILE_NAME, &self.file_name)?;

        // 只有複製模式需要新檔名
        if self.copy_file {
            validate_present(env::NEW_FILE_NAME, &self.new_file_name)?;
        }

        tracing::debug!("✅ Gateway configuration validation passed");
        Ok(())
    }
}
