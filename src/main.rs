use clap::Parser;
use discount_scraper::core::ConfigProvider;
use discount_scraper::utils::logger;
use discount_scraper::{CliConfig, DiscountPipeline, ScrapeEngine, ScrapeError};

// 單執行緒 runtime：各階段依序 await，沒有並行
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting discount-scraper");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => exit_with(e),
    };

    let pipeline = match DiscountPipeline::new(config) {
        Ok(pipeline) => pipeline,
        Err(e) => exit_with(e),
    };
    tracing::info!("Target page: {}", pipeline.config().url());
    if pipeline.config().timeout().is_none() {
        tracing::debug!("No request timeout configured");
    }

    let engine = ScrapeEngine::new(pipeline);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match engine.run(&mut out).await {
        Ok(summary) => {
            tracing::info!(
                "✅ Reported {} of {} products ({} skipped)",
                summary.reported,
                summary.containers,
                summary.skipped
            );
        }
        Err(e) => exit_with(e),
    }
}

fn exit_with(e: ScrapeError) -> ! {
    tracing::error!("❌ Scrape failed: {} (Category: {:?})", e, e.category());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(e.category().exit_code());
}
