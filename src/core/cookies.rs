use crate::browser::{Locator, Page};
use crate::stats::StatsTracker;
use log::{debug, warn};
use std::time::Duration;

/// What happened when trying to close the cookie banner. Neither variant
/// stops the scrape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CookieOutcome {
    Dismissed,
    Recovered { reason: String },
}

impl CookieOutcome {
    pub fn is_dismissed(&self) -> bool {
        matches!(self, CookieOutcome::Dismissed)
    }
}

/// Best-effort: waits for the banner's close control and clicks it.
pub async fn dismiss_cookie_banner(
    page: &dyn Page,
    button: &Locator,
    timeout: Duration,
    stats: &StatsTracker,
) -> CookieOutcome {
    let attempt = async {
        page.wait_clickable(button, timeout).await?;
        page.click(button).await
    };

    match attempt.await {
        Ok(()) => {
            debug!("Closed cookie banner via {}", button);
            stats.record_cookie_dismissed();
            CookieOutcome::Dismissed
        }
        Err(e) => {
            warn!("Cookie banner not dismissed: {}", e);
            stats.record_cookie_recovery();
            CookieOutcome::Recovered {
                reason: e.to_string(),
            }
        }
    }
}
