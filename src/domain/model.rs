use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const SAMPLE_SHEET_NAME: &str = "Sample Data";

pub const DIRECTORY_ERROR_RESPONSE: &str = "\\n!! Error while creating directory !!";
pub const SUCCESS_RESPONSE: &str = "Processed successfully";

/// A scalar cell as the codec sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Text(String),
    Number(f64),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// String form stored in a `SheetTable`. Integral numbers drop the `.0`.
    pub fn render(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    format!("{:.0}", n)
                } else {
                    n.to_string()
                }
            }
        }
    }

    /// Form written to the read log: numbers keep their float rendering (`1.0`),
    /// unlike `render` which stores `1`.
    pub fn log_value(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => format!("{:?}", n),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridRow {
    /// 0-based row number inside the sheet
    pub index: u32,
    pub cells: Vec<CellValue>,
}

/// One named sheet with its physical rows, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetGrid {
    pub name: String,
    pub rows: Vec<GridRow>,
}

impl SheetGrid {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, cells: Vec<CellValue>) {
        let index = self.rows.last().map(|r| r.index + 1).unwrap_or(0);
        self.rows.push(GridRow { index, cells });
    }

    pub fn physical_row_count(&self) -> usize {
        self.rows.len()
    }
}

pub type SheetRows = BTreeMap<u32, Vec<String>>;

/// Sheet name -> row index -> cell texts. Built fresh by every read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SheetTable {
    sheets: BTreeMap<String, SheetRows>,
}

impl SheetTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_sheet(&mut self, name: impl Into<String>, rows: SheetRows) {
        self.sheets.insert(name.into(), rows);
    }

    pub fn sheet(&self, name: &str) -> Option<&SheetRows> {
        self.sheets.get(name)
    }

    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.sheets.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &SheetRows)> {
        self.sheets.iter()
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Lays the table out as text-only grids. Rows are renumbered from 0 in
    /// ascending key order; cells keep their sequence order.
    pub fn to_grids(&self) -> Vec<SheetGrid> {
        self.sheets
            .iter()
            .map(|(name, rows)| {
                let mut grid = SheetGrid::new(name.clone());
                for cells in rows.values() {
                    grid.push_row(cells.iter().map(CellValue::text).collect());
                }
                grid
            })
            .collect()
    }
}

/// The demo sheet emitted in fresh-write mode.
pub fn sample_sheet() -> SheetGrid {
    let mut sheet = SheetGrid::new(SAMPLE_SHEET_NAME);
    sheet.push_row(vec![
        CellValue::text("ID"),
        CellValue::text("NAME"),
        CellValue::text("LASTNAME"),
    ]);

    let people = [
        (1.0, "Amit", "Shukla"),
        (2.0, "Lokesh", "Gupta"),
        (3.0, "John", "Adwards"),
        (4.0, "Brian", "Schultz"),
    ];
    for (id, name, last_name) in people {
        sheet.push_row(vec![
            CellValue::Number(id),
            CellValue::text(name),
            CellValue::text(last_name),
        ]);
    }

    sheet
}

/// What one invocation did, as seen by the invocation surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    DirectoryUnavailable { message: String },
    Copied { destination: String },
    Processed {
        wrote: bool,
        read_sheets: Option<usize>,
        /// Set when a read/write step failed; the failure is logged, not surfaced.
        failure: Option<String>,
    },
}

impl Outcome {
    pub fn response(&self) -> &'static str {
        match self {
            Outcome::DirectoryUnavailable { .. } => DIRECTORY_ERROR_RESPONSE,
            Outcome::Copied { .. } => "",
            Outcome::Processed { .. } => SUCCESS_RESPONSE,
        }
    }
}
