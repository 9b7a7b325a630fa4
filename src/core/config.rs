use crate::browser::Locator;
use crate::models::CategoryTarget;
use crate::parser::ProductSelectors;
use crate::{ScraperError, ScraperResult};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://webscraper.io/test-sites/e-commerce/more/";
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:9515";

/// Controls the scraper interacts with besides the product cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSelectors {
    pub cookie_button: Locator,
    pub load_more: Locator,
}

impl Default for PageSelectors {
    fn default() -> Self {
        Self {
            cookie_button: Locator::Id("closeCookieBanner".to_string()),
            load_more: Locator::ClassName("btn-primary".to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub webdriver_url: String,
    pub headless: bool,
    pub base_url: Url,
    pub output_dir: PathBuf,
    pub cookie_timeout: Duration,
    pub load_more_timeout: Duration,
    pub poll_interval: Duration,
    /// Pause after a click so freshly loaded cards get rendered.
    pub settle_delay: Duration,
    pub page_selectors: PageSelectors,
    pub product_selectors: ProductSelectors,
    pub categories: Vec<CategoryTarget>,
}

impl ScrapeConfig {
    /// Defaults for the demo shop with the bundled category table.
    pub fn new() -> ScraperResult<Self> {
        Ok(Self {
            webdriver_url: DEFAULT_WEBDRIVER_URL.to_string(),
            headless: true,
            base_url: Url::parse(DEFAULT_BASE_URL)?,
            output_dir: PathBuf::from("."),
            cookie_timeout: Duration::from_secs(10),
            load_more_timeout: Duration::from_secs(10),
            poll_interval: Duration::from_millis(500),
            settle_delay: Duration::from_secs(1),
            page_selectors: PageSelectors::default(),
            product_selectors: ProductSelectors::default(),
            categories: CategoryTarget::defaults()?,
        })
    }

    pub fn with_webdriver_url(mut self, url: impl Into<String>) -> Self {
        self.webdriver_url = url.into();
        self
    }

    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    pub fn with_base_url(mut self, base_url: &str) -> ScraperResult<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ScraperError::ConfigError(format!("{} cannot be a base URL", base_url)));
        }
        self.base_url = base_url;
        Ok(self)
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_timeouts(mut self, cookie: Duration, load_more: Duration) -> Self {
        self.cookie_timeout = cookie;
        self.load_more_timeout = load_more;
        self
    }

    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_page_selectors(mut self, selectors: PageSelectors) -> Self {
        self.page_selectors = selectors;
        self
    }

    pub fn with_product_selectors(mut self, selectors: ProductSelectors) -> Self {
        self.product_selectors = selectors;
        self
    }

    pub fn with_categories(mut self, categories: Vec<CategoryTarget>) -> Self {
        self.categories = categories;
        self
    }

    pub fn category_url(&self, target: &CategoryTarget) -> ScraperResult<Url> {
        Ok(self.base_url.join(&target.path)?)
    }
}
