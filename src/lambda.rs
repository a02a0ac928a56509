#[cfg(feature = "lambda")]
use efs_sheet_gateway::utils::logger;
#[cfg(feature = "lambda")]
use efs_sheet_gateway::{GatewayConfig, SpreadsheetGateway, XlsxWorkbook};
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

/// The payload is opaque and ignored; all behavior comes from the environment.
#[cfg(feature = "lambda")]
async fn function_handler(event: LambdaEvent<serde_json::Value>) -> Result<String, Error> {
    tracing::info!(request_id = %event.context.request_id, "Starting sheet gateway invocation");

    let config = GatewayConfig::from_env();

    // 檔案 I/O 會阻塞，移到 blocking 執行緒
    let outcome = tokio::task::spawn_blocking(move || {
        SpreadsheetGateway::new(XlsxWorkbook::new()).handle(&config)
    })
    .await?
    .map_err(|e| {
        tracing::error!("❌ {} ({})", e, e.recovery_suggestion());
        Box::new(e) as Box<dyn std::error::Error + Send + Sync>
    })?;

    tracing::info!("Sheet gateway invocation finished: {:?}", outcome);
    Ok(outcome.response().to_string())
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    run(service_fn(function_handler)).await
}
