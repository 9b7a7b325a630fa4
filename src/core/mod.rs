mod config;
mod cookies;
mod errors;
mod pagination;
mod runner;

pub use config::{PageSelectors, ScrapeConfig, DEFAULT_BASE_URL, DEFAULT_WEBDRIVER_URL};
pub use cookies::{dismiss_cookie_banner, CookieOutcome};
pub use errors::{BrowserError, BrowserResult, ExtractionError, ScraperError, ScraperResult};
pub use pagination::{PaginationDriver, PaginationReport, PaginationState};
pub use runner::{CategoryOutcome, CategoryReport, RunReport, Runner, SkippedCard};
