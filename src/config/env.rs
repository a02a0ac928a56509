use super::GatewayConfig;
use std::env;

pub const READ_FILE: &str = "readFile";
pub const WRITE_FILE: &str = "writeFile";
pub const WRITE_READ_LOGS: &str = "writeReadLogs";
pub const COPY_FILE: &str = "copyFile";
pub const EFS_FOLDER: &str = "efsFolder";
pub const FILE_NAME: &str = "fileName";
pub const NEW_FILE_NAME: &str = "newFileName";

/// `true` only for a case-insensitive "true"; anything else, or nothing, is false.
pub fn parse_flag(value: Option<&str>) -> bool {
    value
        .map(|v| v.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

impl GatewayConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |key: &str| parse_flag(lookup(key).as_deref());
        let text = |key: &str| lookup(key).unwrap_or_default();

        Self {
            read_file: flag(READ_FILE),
            write_file: flag(WRITE_FILE),
            write_read_logs: flag(WRITE_READ_LOGS),
            copy_file: flag(COPY_FILE),
            efs_folder: text(EFS_FOLDER),
            file_name: text(FILE_NAME),
            new_file_name: text(NEW_FILE_NAME),
        }
    }
}
