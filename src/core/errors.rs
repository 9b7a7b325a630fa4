use crate::storage::StorageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("Browser error: {0}")]
    BrowserError(#[from] BrowserError),

    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("Invalid selector `{0}`")]
    SelectorError(String),

    #[error("URL parsing error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type ScraperResult<T> = Result<T, ScraperError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BrowserError {
    #[error("Timed out waiting for {locator} to become clickable")]
    Timeout { locator: String },

    #[error("Click on {locator} was intercepted: {message}")]
    ClickIntercepted { locator: String, message: String },

    #[error("WebDriver session error: {0}")]
    Session(String),

    #[error("WebDriver command failed: {0}")]
    Command(String),
}

pub type BrowserResult<T> = Result<T, BrowserError>;

/// Reasons a single product card could not be turned into a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("No element matches `{selector}`")]
    MissingElement { selector: String },

    #[error("Element `{selector}` has no `{attribute}` attribute")]
    MissingAttribute { selector: String, attribute: String },

    #[error("Price `{raw}` is not a valid non-negative number")]
    InvalidPrice { raw: String },

    #[error("Review count `{raw}` does not start with a number")]
    InvalidReviewCount { raw: String },
}
