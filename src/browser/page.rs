use crate::core::BrowserResult;
use async_trait::async_trait;
use std::fmt;
use std::time::Duration;
use url::Url;

/// How to find an interactive control on the rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Locator {
    Id(String),
    ClassName(String),
    Css(String),
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Id(id) => write!(f, "#{}", id),
            Locator::ClassName(class) => write!(f, ".{}", class),
            Locator::Css(css) => write!(f, "{}", css),
        }
    }
}

/// A live browser tab. Every scraping step talks to the browser through
/// this trait so the steps can run against a scripted page in tests.
#[async_trait]
pub trait Page: Send + Sync {
    async fn goto(&self, url: &Url) -> BrowserResult<()>;

    /// Current rendered HTML, including content added by scripts.
    async fn source(&self) -> BrowserResult<String>;

    /// Waits until an element matching `locator` is clickable.
    /// Returns [`BrowserError::Timeout`](crate::core::BrowserError::Timeout)
    /// if none shows up in time.
    async fn wait_clickable(&self, locator: &Locator, timeout: Duration) -> BrowserResult<()>;

    async fn click(&self, locator: &Locator) -> BrowserResult<()>;

    /// Ends the browser session. Further calls on the page fail.
    async fn close(&self) -> BrowserResult<()>;
}
