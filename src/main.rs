use futures::FutureExt;
use log::{error, info};
use morescraper::{Page, Runner, ScrapeConfig, ScraperResult, WebDriverPage};
use std::panic::{self, AssertUnwindSafe};

#[tokio::main]
async fn main() -> ScraperResult<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .filter_module("selectors", log::LevelFilter::Warn)
        .filter_module("html5ever", log::LevelFilter::Error)
        .parse_default_env()
        .init();

    let config = ScrapeConfig::new()?;
    let runner = Runner::new(config.clone())?;
    let page = WebDriverPage::connect(&config).await?;

    // The session is closed before a panic in the run is allowed to unwind further.
    let outcome = AssertUnwindSafe(runner.run(&page)).catch_unwind().await;

    if let Err(e) = page.close().await {
        error!("Failed to close browser session: {}", e);
    }
    let report = match outcome {
        Ok(report) => report,
        Err(panic) => panic::resume_unwind(panic),
    };

    let stats = runner.stats();
    stats.print_summary();

    if !report.all_saved() {
        let failed: Vec<&str> = report
            .categories
            .iter()
            .filter(|c| !c.saved())
            .map(|c| c.name.as_str())
            .collect();
        error!("Categories not saved: {}", failed.join(", "));
    } else {
        info!("All {} categories saved", report.categories.len());
    }

    Ok(())
}
