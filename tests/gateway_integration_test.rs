use anyhow::Result;
use efs_sheet_gateway::domain::model::SheetRows;
use efs_sheet_gateway::{GatewayConfig, Outcome, SheetTable, SpreadsheetGateway, XlsxWorkbook};
use tempfile::TempDir;

fn gateway() -> SpreadsheetGateway<XlsxWorkbook> {
    SpreadsheetGateway::new(XlsxWorkbook::new())
}

fn config_in(folder: &std::path::Path) -> GatewayConfig {
    GatewayConfig {
        efs_folder: folder.to_str().unwrap().to_string(),
        file_name: "data.xlsx".to_string(),
        new_file_name: "copy.xlsx".to_string(),
        ..Default::default()
    }
}

fn rows(data: &[&[&str]]) -> SheetRows {
    data.iter()
        .enumerate()
        .map(|(i, cells)| (i as u32, cells.iter().map(|c| c.to_string()).collect()))
        .collect()
}

#[test]
fn test_write_then_read_sample_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut config = config_in(&temp_dir.path().join("efs"));
    config.write_file = true;
    config.read_file = true;
    config.write_read_logs = true;

    let outcome = gateway().handle(&config)?;

    assert_eq!(
        outcome,
        Outcome::Processed {
            wrote: true,
            read_sheets: Some(1),
            failure: None,
        }
    );
    assert_eq!(outcome.response(), "Processed successfully");
    assert!(config.source_path().is_file());

    let table = gateway().read(&config.source_path(), false)?;
    assert_eq!(table.sheet_names().collect::<Vec<_>>(), vec!["Sample Data"]);
    assert_eq!(
        table.sheet("Sample Data").unwrap(),
        &rows(&[
            &["ID", "NAME", "LASTNAME"],
            &["1", "Amit", "Shukla"],
            &["2", "Lokesh", "Gupta"],
            &["3", "John", "Adwards"],
            &["4", "Brian", "Schultz"],
        ])
    );
    Ok(())
}

#[test]
fn test_copy_round_trips_sheet_table() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = GatewayConfig {
        copy_file: true,
        ..config_in(temp_dir.path())
    };

    let mut original = SheetTable::new();
    original.insert_sheet(
        "Customers",
        rows(&[&["id", "name"], &["c-1", "Ada"], &["c-2", "Grace"]]),
    );
    original.insert_sheet("Orders", rows(&[&["o-1", "c-2", "widget", "x"]]));
    gateway().write(&config.source_path(), Some(&original))?;

    let outcome = gateway().handle(&config)?;
    assert_eq!(outcome.response(), "");
    assert!(matches!(outcome, Outcome::Copied { .. }));

    let copied = gateway().read(&config.destination_path(), false)?;
    assert_eq!(copied, original);

    // 原始檔案不應被修改
    let source = gateway().read(&config.source_path(), false)?;
    assert_eq!(source, original);
    Ok(())
}

#[test]
fn test_empty_sheet_is_kept() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("empty.xlsx");

    let mut table = SheetTable::new();
    table.insert_sheet("Blank", SheetRows::new());
    table.insert_sheet("Filled", rows(&[&["a"]]));
    gateway().write(&path, Some(&table))?;

    let read_back = gateway().read(&path, true)?;
    assert_eq!(read_back.len(), 2);
    assert!(read_back.sheet("Blank").unwrap().is_empty());
    assert_eq!(read_back.sheet("Filled").unwrap().len(), 1);
    Ok(())
}

#[test]
fn test_missing_directory_is_created_before_write() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let folder = temp_dir.path().join("mnt").join("efs");
    let mut config = config_in(&folder);
    config.write_file = true;

    assert!(!folder.exists());
    gateway().handle(&config)?;

    assert!(folder.is_dir());
    assert!(config.source_path().is_file());
    Ok(())
}

#[test]
fn test_directory_failure_returns_literal_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let blocker = temp_dir.path().join("blocker");
    std::fs::write(&blocker, b"plain file")?;

    let mut config = config_in(&blocker.join("efs"));
    config.write_file = true;

    let outcome = gateway().handle(&config)?;
    assert!(matches!(outcome, Outcome::DirectoryUnavailable { .. }));
    assert_eq!(outcome.response(), "\\n!! Error while creating directory !!");
    Ok(())
}

#[test]
fn test_corrupt_file_read_is_swallowed() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut config = config_in(temp_dir.path());
    config.read_file = true;
    std::fs::write(config.source_path(), b"this is not a zip archive")?;

    let outcome = gateway().handle(&config)?;
    assert_eq!(outcome.response(), "Processed successfully");
    match outcome {
        Outcome::Processed {
            wrote,
            read_sheets,
            failure,
        } => {
            assert!(!wrote);
            assert_eq!(read_sheets, None);
            assert!(failure.is_some());
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    Ok(())
}

#[test]
fn test_copy_of_missing_source_still_reports_success() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = GatewayConfig {
        copy_file: true,
        ..config_in(temp_dir.path())
    };

    let outcome = gateway().handle(&config)?;
    assert_eq!(outcome.response(), "Processed successfully");
    assert!(!config.destination_path().exists());
    Ok(())
}

#[test]
fn test_copy_onto_same_file_name() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = GatewayConfig {
        copy_file: true,
        new_file_name: "data.xlsx".to_string(),
        ..config_in(temp_dir.path())
    };

    let mut original = SheetTable::new();
    original.insert_sheet("Only", rows(&[&["x", "y"], &["1", "2"]]));
    gateway().write(&config.source_path(), Some(&original))?;

    let outcome = gateway().handle(&config)?;
    assert_eq!(outcome.response(), "");

    let rewritten = gateway().read(&config.source_path(), false)?;
    assert_eq!(rewritten, original);
    Ok(())
}

#[test]
fn test_whitespace_file_name_is_accepted() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = GatewayConfig {
        write_file: true,
        file_name: " ".to_string(),
        ..config_in(temp_dir.path())
    };

    let outcome = gateway().handle(&config)?;
    assert_eq!(outcome.response(), "Processed successfully");
    assert!(temp_dir.path().join(" ").is_file());
    Ok(())
}

#[test]
fn test_copy_keeps_interior_empty_cells() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = GatewayConfig {
        copy_file: true,
        ..config_in(temp_dir.path())
    };

    let mut original = SheetTable::new();
    original.insert_sheet(
        "Gaps",
        rows(&[&["a", "", "c"], &["d", "", "", "g"], &["h"]]),
    );
    gateway().write(&config.source_path(), Some(&original))?;

    gateway().handle(&config)?;

    let copied = gateway().read(&config.destination_path(), false)?;
    assert_eq!(copied, original);
    Ok(())
}

#[test]
fn test_leading_and_trailing_empty_cells_are_dropped() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("edges.xlsx");

    let mut table = SheetTable::new();
    table.insert_sheet("Edges", rows(&[&["", "b", ""], &["", ""], &["z"]]));
    gateway().write(&path, Some(&table))?;

    let read_back = gateway().read(&path, false)?;
    let sheet = read_back.sheet("Edges").unwrap();

    // 空字串無法存成儲存格：首尾的空白會消失，全空的列不是實體列
    assert_eq!(sheet.len(), 2);
    assert_eq!(sheet[&0u32], vec!["b"]);
    assert!(!sheet.contains_key(&1u32));
    assert_eq!(sheet[&2u32], vec!["z"]);
    Ok(())
}
