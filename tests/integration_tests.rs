use anyhow::Result;
use discount_scraper::{DiscountPipeline, ScrapeConfig, ScrapeEngine, ScrapeError};
use httpmock::prelude::*;

const SALE_PAGE: &str = include_str!("fixtures/soodus.html");

async fn serve_sale_page(server: &MockServer) -> httpmock::Mock<'_> {
    server
        .mock_async(|when, then| {
            when.method(GET).path("/soodus-2/");
            then.status(200)
                .header("Content-Type", "text/html; charset=utf-8")
                .body(SALE_PAGE);
        })
        .await
}

fn discounts(report: &str) -> Vec<i64> {
    report
        .lines()
        .filter_map(|line| line.strip_prefix("Discount Percentage: "))
        .map(|value| value.trim_end_matches('%').parse().unwrap())
        .collect()
}

#[tokio::test]
async fn test_end_to_end_report() -> Result<()> {
    let server = MockServer::start_async().await;
    let page_mock = serve_sale_page(&server).await;

    let pipeline = DiscountPipeline::new(ScrapeConfig::new(server.url("/soodus-2/")))?;
    let engine = ScrapeEngine::new(pipeline);
    let mut out = Vec::new();

    let summary = engine.run(&mut out).await?;

    page_mock.assert_async().await;
    assert_eq!(summary.containers, 6);
    assert_eq!(summary.skipped, 2);
    assert_eq!(summary.reported, 4);

    let report = String::from_utf8(out)?;
    assert_eq!(discounts(&report), vec![50, 50, 10, 5]);
    assert_eq!(report.matches("-------------------------\n").count(), 4);

    // 折扣相同時維持頁面上的順序
    let ramen = report.find("Title: Ramen").unwrap();
    let tempura = report.find("Title: Tempura").unwrap();
    assert!(ramen < tempura);

    assert!(report.contains("Title: Lõhe nigiri\nDescription: Kaks tükki värsket lõhet\nDiscount Percentage: 10%\n"));
    assert!(!report.contains("Gyoza"));
    assert!(!report.contains("Mochi"));
    assert!(!report.contains("Kontakt"));
    Ok(())
}

#[tokio::test]
async fn test_not_found_produces_no_report() -> Result<()> {
    let server = MockServer::start_async().await;
    let page_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/soodus-2/");
            then.status(404).body("<html><body>Not found</body></html>");
        })
        .await;

    let pipeline = DiscountPipeline::new(ScrapeConfig::new(server.url("/soodus-2/")))?;
    let engine = ScrapeEngine::new(pipeline);
    let mut out = Vec::new();

    let result = engine.run(&mut out).await;

    page_mock.assert_async().await;
    match result {
        Err(ScrapeError::StatusError { status, url }) => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/soodus-2/"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
    assert!(out.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_connection_refused_is_fatal() -> Result<()> {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
        listener.local_addr()?.port()
    };

    let pipeline = DiscountPipeline::new(ScrapeConfig::new(format!("http://127.0.0.1:{}/", port)))?;
    let engine = ScrapeEngine::new(pipeline);
    let mut out = Vec::new();

    let result = engine.run(&mut out).await;

    assert!(matches!(result, Err(ScrapeError::HttpError(_))));
    assert!(out.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_repeated_runs_are_identical() -> Result<()> {
    let server = MockServer::start_async().await;
    let page_mock = serve_sale_page(&server).await;

    let pipeline = DiscountPipeline::new(ScrapeConfig::new(server.url("/soodus-2/")))?;
    let engine = ScrapeEngine::new(pipeline);

    let mut first = Vec::new();
    engine.run(&mut first).await?;
    let mut second = Vec::new();
    engine.run(&mut second).await?;

    page_mock.assert_hits_async(2).await;
    assert_eq!(first, second);
    Ok(())
}

#[tokio::test]
async fn test_page_without_listings_prints_nothing() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/empty");
            then.status(200).body("<html><body><p>Hetkel soodustusi pole</p></body></html>");
        })
        .await;

    let pipeline = DiscountPipeline::new(ScrapeConfig::new(server.url("/empty")))?;
    let engine = ScrapeEngine::new(pipeline);
    let mut out = Vec::new();

    let summary = engine.run(&mut out).await?;

    assert_eq!(summary.containers, 0);
    assert_eq!(summary.reported, 0);
    assert!(out.is_empty());
    Ok(())
}

#[cfg(feature = "cli")]
#[tokio::test]
async fn test_config_file_points_at_local_fixture() -> Result<()> {
    use clap::Parser;
    use discount_scraper::CliConfig;
    use tempfile::TempDir;

    let server = MockServer::start_async().await;
    let page_mock = serve_sale_page(&server).await;

    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("scraper.toml");
    tokio::fs::write(
        &config_path,
        format!(
            "[source]\nurl = \"{}\"\ntimeout_seconds = 10\n",
            server.url("/soodus-2/")
        ),
    )
    .await?;

    let cli = CliConfig::try_parse_from([
        "discount-scraper",
        "--config",
        config_path.to_str().unwrap(),
    ])?;
    let config = cli.resolve()?;

    let engine = ScrapeEngine::new(DiscountPipeline::new(config)?);
    let mut out = Vec::new();
    let summary = engine.run(&mut out).await?;

    page_mock.assert_async().await;
    assert_eq!(summary.reported, 4);
    Ok(())
}
