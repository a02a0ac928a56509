pub mod gateway;

pub use crate::domain::model::{Outcome, SheetTable};
pub use crate::domain::ports::{WorkbookSink, WorkbookSource};
pub use crate::utils::error::Result;
pub use gateway::{DispatchReport, SpreadsheetGateway};
