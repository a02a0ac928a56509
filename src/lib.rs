pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliArgs;

pub use adapters::XlsxWorkbook;
pub use config::GatewayConfig;
pub use crate::core::{Outcome, SheetTable, SpreadsheetGateway};
pub use utils::error::{GatewayError, Result};
