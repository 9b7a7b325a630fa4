use super::page::{Locator, Page};
use crate::core::{BrowserError, BrowserResult, ScrapeConfig};
use async_trait::async_trait;
use log::{debug, info, warn};
use std::time::Duration;
use thirtyfour::error::WebDriverErrorInner;
use thirtyfour::prelude::*;
use tokio::sync::Mutex;
use url::Url;

impl From<WebDriverError> for BrowserError {
    fn from(err: WebDriverError) -> Self {
        BrowserError::Command(err.to_string())
    }
}

fn click_error(locator: &Locator, err: WebDriverError) -> BrowserError {
    match err.as_inner() {
        WebDriverErrorInner::ElementClickIntercepted(_) => BrowserError::ClickIntercepted {
            locator: locator.to_string(),
            message: err.to_string(),
        },
        _ => BrowserError::Command(err.to_string()),
    }
}

fn by(locator: &Locator) -> By {
    match locator {
        Locator::Id(id) => By::Id(id.as_str()),
        Locator::ClassName(class) => By::ClassName(class.as_str()),
        Locator::Css(css) => By::Css(css.as_str()),
    }
}

/// A Chrome tab driven over the WebDriver protocol (chromedriver).
pub struct WebDriverPage {
    driver: Mutex<Option<WebDriver>>,
    poll_interval: Duration,
}

impl WebDriverPage {
    pub async fn connect(config: &ScrapeConfig) -> BrowserResult<Self> {
        let mut caps = DesiredCapabilities::chrome();
        if config.headless {
            caps.set_headless()
                .map_err(|e| BrowserError::Session(e.to_string()))?;
        }

        info!("Starting WebDriver session at {}", config.webdriver_url);
        let driver = WebDriver::new(config.webdriver_url.as_str(), caps)
            .await
            .map_err(|e| BrowserError::Session(e.to_string()))?;

        Ok(Self {
            driver: Mutex::new(Some(driver)),
            poll_interval: config.poll_interval,
        })
    }

    async fn driver(&self) -> BrowserResult<WebDriver> {
        self.driver
            .lock()
            .await
            .clone()
            .ok_or_else(|| BrowserError::Session("session already closed".to_string()))
    }
}

#[async_trait]
impl Page for WebDriverPage {
    async fn goto(&self, url: &Url) -> BrowserResult<()> {
        debug!("Navigating to {}", url);
        self.driver().await?.goto(url.as_str()).await?;
        Ok(())
    }

    async fn source(&self) -> BrowserResult<String> {
        Ok(self.driver().await?.source().await?)
    }

    async fn wait_clickable(&self, locator: &Locator, timeout: Duration) -> BrowserResult<()> {
        let element = self
            .driver()
            .await?
            .query(by(locator))
            .wait(timeout, self.poll_interval)
            .and_clickable()
            .first_opt()
            .await?;

        match element {
            Some(_) => Ok(()),
            None => Err(BrowserError::Timeout {
                locator: locator.to_string(),
            }),
        }
    }

    async fn click(&self, locator: &Locator) -> BrowserResult<()> {
        // Same filter as `wait_clickable`, so a hidden twin earlier in the DOM is skipped.
        let element = self
            .driver()
            .await?
            .query(by(locator))
            .nowait()
            .and_clickable()
            .first()
            .await?;
        element.click().await.map_err(|e| click_error(locator, e))
    }

    async fn close(&self) -> BrowserResult<()> {
        match self.driver.lock().await.take() {
            Some(driver) => {
                info!("Closing WebDriver session");
                driver.quit().await?;
                Ok(())
            }
            None => {
                warn!("WebDriver session was already closed");
                Ok(())
            }
        }
    }
}
