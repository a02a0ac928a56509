use crate::config::GatewayConfig;
use crate::domain::model::{sample_sheet, Outcome, SheetRows, SheetTable};
use crate::domain::ports::{WorkbookSink, WorkbookSource};
use crate::utils::error::{GatewayError, Result};
use crate::utils::validation::Validate;
use std::fs;
use std::path::{Path, PathBuf};

/// What `dispatch` got through before it returned.
#[derive(Debug, Default)]
pub struct DispatchReport {
    pub copied_to: Option<PathBuf>,
    pub wrote: bool,
    pub table: Option<SheetTable>,
}

/// Copy / write / read against a single mounted folder.
///
/// Holds no per-request state: a `SheetTable` only lives for the call that
/// read it.
pub struct SpreadsheetGateway<W> {
    workbook: W,
}

impl<W: WorkbookSource + WorkbookSink> SpreadsheetGateway<W> {
    pub fn new(workbook: W) -> Self {
        Self { workbook }
    }

    pub fn workbook(&self) -> &W {
        &self.workbook
    }

    pub fn ensure_directory(&self, dir: &Path) -> Result<()> {
        if dir.is_dir() {
            tracing::info!("!! Directory Available !!");
            return Ok(());
        }

        tracing::info!("!! Directory Unavailable !!");
        tracing::info!("!! Creating Directory !!");
        fs::create_dir_all(dir).map_err(|source| GatewayError::DirectoryCreation {
            path: dir.to_path_buf(),
            source,
        })?;
        tracing::info!("!! Created Directory !!");

        Ok(())
    }

    /// Parses every sheet into a `SheetTable`, storing each cell as text.
    ///
    /// With `write_read_logs`, numeric cells are logged by their numeric value
    /// (`1.0`) even though the stored text is their rendering (`1`).
    pub fn read(&self, path: &Path, write_read_logs: bool) -> Result<SheetTable> {
        tracing::debug!("Reading workbook {}", path.display());
        let grids = self.workbook.load(path)?;

        let mut table = SheetTable::new();
        for grid in grids {
            if write_read_logs {
                tracing::info!("Sheet Name: {}", grid.name);
                tracing::info!("Row Count: {}", grid.physical_row_count());
            }

            let mut rows = SheetRows::new();
            for row in grid.rows {
                let mut texts = Vec::with_capacity(row.cells.len());
                for cell in &row.cells {
                    if write_read_logs {
                        tracing::info!(row = row.index, "{}\t", cell.log_value());
                    }
                    texts.push(cell.render());
                }
                rows.insert(row.index, texts);
            }

            table.insert_sheet(grid.name, rows);
        }

        tracing::debug!("Read {} sheet(s) from {}", table.len(), path.display());
        Ok(table)
    }

    /// Writes `table` as text cells, or the demo sheet when there is no table.
    pub fn write(&self, path: &Path, table: Option<&SheetTable>) -> Result<()> {
        let sheets = match table {
            Some(table) => table.to_grids(),
            None => {
                tracing::debug!("No sheet data given, writing the sample sheet");
                vec![sample_sheet()]
            }
        };

        self.workbook.save(path, &sheets)?;
        tracing::debug!("Wrote {} sheet(s) to {}", sheets.len(), path.display());
        Ok(())
    }

    pub fn copy(&self, source: &Path, destination: &Path, write_read_logs: bool) -> Result<()> {
        let table = self.read(source, write_read_logs)?;
        self.write(destination, Some(&table))
    }

    /// Runs the copy/write/read policy, recording progress in `report`.
    pub fn dispatch(&self, config: &GatewayConfig, report: &mut DispatchReport) -> Result<()> {
        let source = config.source_path();
        let mut file_exists = source.is_file();
        if file_exists {
            tracing::info!("File is available: {}", source.display());
        } else {
            tracing::info!("File is unavailable: {}", source.display());
        }

        if config.copy_file {
            let destination = config.destination_path();
            self.copy(&source, &destination, config.write_read_logs)?;
            tracing::info!("File copied successfully: {}", destination.display());
            report.copied_to = Some(destination);
            return Ok(());
        }

        if config.write_file {
            self.write(&source, None)?;
            report.wrote = true;
            file_exists = true;
            tracing::info!("File written successfully: {}", source.display());
        }

        if file_exists && config.read_file {
            let table = self.read(&source, config.write_read_logs)?;
            tracing::info!("File read successfully: {}", source.display());
            report.table = Some(table);
        }

        Ok(())
    }

    /// Top-level invocation contract. Only a directory failure changes the
    /// response; any other failure is logged and reported as success.
    pub fn run(&self, config: &GatewayConfig) -> Outcome {
        config.log_summary();

        if let Err(e) = self.ensure_directory(config.folder()) {
            tracing::error!("!! Error while creating directory !! {}", e);
            return Outcome::DirectoryUnavailable {
                message: e.to_string(),
            };
        }

        let mut report = DispatchReport::default();
        let failure = match self.dispatch(config, &mut report) {
            Ok(()) => None,
            Err(e) => {
                tracing::error!("Exception while performing file operations: {}", e);
                tracing::error!("Details: {:?}", e);
                Some(e.to_string())
            }
        };

        if let Some(destination) = report.copied_to {
            return Outcome::Copied {
                destination: destination.display().to_string(),
            };
        }

        Outcome::Processed {
            wrote: report.wrote,
            read_sheets: report.table.as_ref().map(SheetTable::len),
            failure,
        }
    }

    /// Validates the configuration, then runs. Configuration errors are the only
    /// thing returned as `Err`.
    pub fn handle(&self, config: &GatewayConfig) -> Result<Outcome> {
        config.validate()?;
        Ok(self.run(config))
    }
}
