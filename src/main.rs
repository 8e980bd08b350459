use ballot_bridge::utils::logger;
use ballot_bridge::{app, CliConfig};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting ballot-bridge");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = app::run(&config).await {
        tracing::error!("❌ ballot-bridge failed: {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    Ok(())
}
