//! `.xlsx` codec: calamine for parsing, rust_xlsxwriter for writing.

use std::path::Path;

use calamine::{open_workbook, Data, Range, Reader, Xlsx, XlsxError};
use rust_xlsxwriter::Workbook;

use crate::domain::model::{CellValue, GridRow, SheetGrid};
use crate::domain::ports::{WorkbookSink, WorkbookSource};
use crate::utils::error::{GatewayError, Result};

#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxWorkbook;

impl XlsxWorkbook {
    pub fn new() -> Self {
        Self
    }

    /// Populated cells only; `None` for blanks so they are not counted as cells.
    fn cell_value(cell: &Data) -> Option<CellValue> {
        match cell {
            Data::Empty => None,
            Data::String(s) => Some(CellValue::Text(s.clone())),
            Data::Float(f) => Some(CellValue::Number(*f)),
            Data::Int(i) => Some(CellValue::Number(*i as f64)),
            other => Some(CellValue::Text(other.to_string())),
        }
    }

    /// Cells from the first to the last populated one. Blanks in between read
    /// back as empty text, which is how an empty string cell is stored.
    fn row_cells(row: &[Data]) -> Vec<CellValue> {
        let first = row.iter().position(|c| !matches!(c, Data::Empty));
        let last = row.iter().rposition(|c| !matches!(c, Data::Empty));

        match (first, last) {
            (Some(first), Some(last)) => row[first..=last]
                .iter()
                .map(|c| Self::cell_value(c).unwrap_or_else(|| CellValue::text("")))
                .collect(),
            _ => Vec::new(),
        }
    }

    fn grid_from_range(name: String, range: &Range<Data>) -> SheetGrid {
        let (start_row, _) = range.start().unwrap_or((0, 0));
        let mut grid = SheetGrid::new(name);

        for (offset, row) in range.rows().enumerate() {
            let cells = Self::row_cells(row);
            // 沒有任何儲存格的列不是實體列
            if cells.is_empty() {
                continue;
            }
            grid.rows.push(GridRow {
                index: start_row + offset as u32,
                cells,
            });
        }

        grid
    }
}

impl WorkbookSource for XlsxWorkbook {
    fn load(&self, path: &Path) -> Result<Vec<SheetGrid>> {
        if !path.exists() {
            return Err(GatewayError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let mut workbook: Xlsx<_> =
            open_workbook(path).map_err(|e: XlsxError| GatewayError::WorkbookRead {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        tracing::debug!("Opened workbook {}", path.display());

        let sheet_names = workbook.sheet_names().to_vec();
        let mut grids = Vec::with_capacity(sheet_names.len());

        for name in sheet_names {
            let range = workbook
                .worksheet_range(&name)
                .map_err(|e| GatewayError::WorkbookRead {
                    path: path.to_path_buf(),
                    message: format!("sheet '{}': {}", name, e),
                })?;
            grids.push(Self::grid_from_range(name, &range));
        }

        Ok(grids)
    }
}

impl WorkbookSink for XlsxWorkbook {
    fn save(&self, path: &Path, sheets: &[SheetGrid]) -> Result<()> {
        let write_error = |message: String| GatewayError::FileWrite {
            path: path.to_path_buf(),
            message,
        };

        let mut workbook = Workbook::new();
        tracing::debug!("Initialized a new workbook");

        for sheet in sheets {
            let worksheet = workbook.add_worksheet();
            worksheet
                .set_name(sheet.name.as_str())
                .map_err(|e| write_error(format!("sheet '{}': {}", sheet.name, e)))?;

            for row in &sheet.rows {
                for (col, cell) in row.cells.iter().enumerate() {
                    let col = u16::try_from(col).map_err(|_| {
                        write_error(format!("row {} has too many columns", row.index))
                    })?;
                    let written = match cell {
                        // xlsx 沒有空字串儲存格，留下空位讓欄位位置不變
                        CellValue::Text(s) if s.is_empty() => continue,
                        CellValue::Text(s) => worksheet.write_string(row.index, col, s.as_str()),
                        CellValue::Number(n) => worksheet.write_number(row.index, col, *n),
                    };
                    written.map_err(|e| write_error(e.to_string()))?;
                }
            }
            tracing::debug!("Populated sheet: {}", sheet.name);
        }

        workbook
            .save(path)
            .map_err(|e| write_error(e.to_string()))?;

        Ok(())
    }
}
