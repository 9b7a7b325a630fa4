use super::cookies::dismiss_cookie_banner;
use super::config::ScrapeConfig;
use super::{BrowserError, ScraperResult};
use crate::browser::{Locator, Page};
use crate::parser::ProductParser;
use crate::stats::StatsTracker;
use log::{debug, info, warn};
use std::time::Duration;
use tokio::time::sleep;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationState {
    Checking,
    Clicking,
    Recovering,
    /// Enough cards are rendered.
    Done,
    /// The load-more control stopped showing up before the target was met.
    Aborted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationReport {
    pub state: PaginationState,
    pub expected: usize,
    pub loaded: usize,
    pub clicks: usize,
    pub recoveries: usize,
}

impl PaginationReport {
    pub fn converged(&self) -> bool {
        self.state == PaginationState::Done
    }
}

/// Clicks "load more" until the page renders the expected number of cards.
pub struct PaginationDriver<'a> {
    parser: &'a ProductParser,
    load_more: Locator,
    cookie_button: Locator,
    load_more_timeout: Duration,
    cookie_timeout: Duration,
    settle_delay: Duration,
    stats: &'a StatsTracker,
}

impl<'a> PaginationDriver<'a> {
    pub fn new(config: &ScrapeConfig, parser: &'a ProductParser, stats: &'a StatsTracker) -> Self {
        Self {
            parser,
            load_more: config.page_selectors.load_more.clone(),
            cookie_button: config.page_selectors.cookie_button.clone(),
            load_more_timeout: config.load_more_timeout,
            cookie_timeout: config.cookie_timeout,
            settle_delay: config.settle_delay,
            stats,
        }
    }

    pub async fn run(&self, page: &dyn Page, expected: usize) -> ScraperResult<PaginationReport> {
        let mut state = PaginationState::Checking;
        let mut loaded = 0;
        let mut clicks = 0;
        let mut recoveries = 0;

        loop {
            state = match state {
                PaginationState::Checking => {
                    loaded = self.parser.count_cards(&page.source().await?);
                    debug!("{} of {} products rendered", loaded, expected);

                    if loaded >= expected {
                        PaginationState::Done
                    } else {
                        match page.wait_clickable(&self.load_more, self.load_more_timeout).await {
                            Ok(()) => PaginationState::Clicking,
                            Err(BrowserError::Timeout { .. }) => PaginationState::Aborted,
                            Err(e) => return Err(e.into()),
                        }
                    }
                }
                PaginationState::Clicking => match page.click(&self.load_more).await {
                    Ok(()) => {
                        clicks += 1;
                        self.stats.record_load_more_click();
                        sleep(self.settle_delay).await;
                        PaginationState::Checking
                    }
                    Err(BrowserError::ClickIntercepted { message, .. }) => {
                        debug!("Load-more click intercepted: {}", message);
                        PaginationState::Recovering
                    }
                    Err(e) => return Err(e.into()),
                },
                PaginationState::Recovering => {
                    recoveries += 1;
                    dismiss_cookie_banner(page, &self.cookie_button, self.cookie_timeout, self.stats)
                        .await;
                    sleep(self.settle_delay).await;
                    PaginationState::Checking
                }
                PaginationState::Done | PaginationState::Aborted => break,
            };
        }

        if state == PaginationState::Aborted {
            warn!(
                "Load-more control disappeared; loaded {} of {} products",
                loaded, expected
            );
        } else {
            info!("Loaded {} products after {} clicks", loaded, clicks);
        }

        Ok(PaginationReport {
            state,
            expected,
            loaded,
            clicks,
            recoveries,
        })
    }
}
