use crate::domain::model::SheetGrid;
use crate::utils::error::Result;
use std::path::Path;

/// Parses a spreadsheet file into its sheets, in workbook order.
pub trait WorkbookSource {
    fn load(&self, path: &Path) -> Result<Vec<SheetGrid>>;
}

/// Serializes sheets into a new spreadsheet file, replacing any existing one.
pub trait WorkbookSink {
    fn save(&self, path: &Path, sheets: &[SheetGrid]) -> Result<()>;
}
