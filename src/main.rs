use clap::Parser;
use efs_sheet_gateway::utils::logger;
use efs_sheet_gateway::{CliArgs, Outcome, SpreadsheetGateway, XlsxWorkbook};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting efs-sheet-gateway CLI");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    let json = args.json;
    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            // 設定錯誤為 1，讀不到設定檔等系統錯誤為 3
            std::process::exit(if e.is_config_error() { 1 } else { 3 });
        }
    };

    let gateway = SpreadsheetGateway::new(XlsxWorkbook::new());
    let outcome = match gateway.handle(&config) {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        match outcome.response() {
            "" => println!("<empty>"),
            response => println!("{}", response),
        }
    }

    match &outcome {
        Outcome::DirectoryUnavailable { message } => {
            eprintln!("❌ {}", message);
            std::process::exit(2);
        }
        Outcome::Processed {
            failure: Some(failure),
            ..
        } => {
            // 與函式行為一致：失敗只記錄，不改變結果
            tracing::warn!("⚠️ A file operation failed and was ignored: {}", failure);
        }
        _ => {}
    }

    Ok(())
}
