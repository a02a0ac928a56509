use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Failed to create directory {}: {source}", .path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to write workbook {}: {message}", .path.display())]
    FileWrite { path: PathBuf, message: String },

    #[error("Failed to read workbook {}: {message}", .path.display())]
    WorkbookRead { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl GatewayError {
    /// Configuration problems, as opposed to file or codec failures.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            GatewayError::ConfigError { .. }
                | GatewayError::MissingConfigError { .. }
                | GatewayError::InvalidConfigValueError { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GatewayError::DirectoryCreation { path, .. } => {
                format!("Could not create the working directory {}", path.display())
            }
            GatewayError::FileNotFound { path } => {
                format!("Spreadsheet {} does not exist", path.display())
            }
            GatewayError::FileWrite { path, .. } => {
                format!("Could not write spreadsheet {}", path.display())
            }
            GatewayError::WorkbookRead { path, .. } => {
                format!("Could not parse spreadsheet {}", path.display())
            }
            GatewayError::IoError(_) => "A file system operation failed".to_string(),
            GatewayError::ConfigError { message } => format!("Invalid configuration: {}", message),
            GatewayError::MissingConfigError { field } => {
                format!("Configuration value '{}' is required", field)
            }
            GatewayError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GatewayError::DirectoryCreation { .. } => {
                "Check that the mount point exists and the function role can write to it"
            }
            GatewayError::FileNotFound { .. } => {
                "Run once with writeFile=true or upload the spreadsheet to the folder first"
            }
            GatewayError::FileWrite { .. } => {
                "Check free space, permissions and that sheet names are valid (max 31 chars)"
            }
            GatewayError::WorkbookRead { .. } => "Make sure the file is a valid .xlsx workbook",
            GatewayError::IoError(_) => "Check permissions on the mounted folder",
            GatewayError::ConfigError { .. }
            | GatewayError::MissingConfigError { .. }
            | GatewayError::InvalidConfigValueError { .. } => {
                "Set efsFolder, fileName (and newFileName when copyFile=true)"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
