use super::{GatewayConfig, TomlConfig};
use crate::utils::error::Result;
use clap::Parser;

/// Local runner. Starts from the same environment variables the function reads,
/// then applies `--config`, then explicit flags.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "efs-sheet-gateway")]
#[command(about = "Write, read or copy an .xlsx spreadsheet in a mounted folder")]
pub struct CliArgs {
    /// Path to a TOML file with a [gateway] table
    #[arg(short, long)]
    pub config: Option<String>,

    /// Read the spreadsheet (readFile)
    #[arg(long)]
    pub read: bool,

    /// Write the sample spreadsheet (writeFile)
    #[arg(long)]
    pub write: bool,

    /// Copy fileName into newFileName (copyFile)
    #[arg(long)]
    pub copy: bool,

    /// Log every sheet and cell while reading (writeReadLogs)
    #[arg(long)]
    pub log_cells: bool,

    /// Folder holding the spreadsheets (efsFolder)
    #[arg(long)]
    pub dir: Option<String>,

    /// Spreadsheet to process (fileName)
    #[arg(long)]
    pub file_name: Option<String>,

    /// Copy target (newFileName)
    #[arg(long)]
    pub new_file_name: Option<String>,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliArgs {
    pub fn resolve(&self, mut config: GatewayConfig) -> Result<GatewayConfig> {
        if let Some(path) = &self.config {
            tracing::info!("📁 Loading configuration from: {}", path);
            TomlConfig::from_file(path)?.apply_to(&mut config);
        }

        // 命令列旗標只會開啟，不會關閉
        config.read_file |= self.read;
        config.write_file |= self.write;
        config.copy_file |= self.copy;
        config.write_read_logs |= self.log_cells;

        if let Some(dir) = &self.dir {
            config.efs_folder = dir.clone();
        }
        if let Some(name) = &self.file_name {
            config.file_name = name.clone();
        }
        if let Some(name) = &self.new_file_name {
            config.new_file_name = name.clone();
        }

        Ok(config)
    }

    pub fn into_config(self) -> Result<GatewayConfig> {
        self.resolve(GatewayConfig::from_env())
    }
}
