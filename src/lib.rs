pub mod browser;
pub mod core;
pub mod models;
pub mod parser;
pub mod stats;
pub mod storage;

pub use crate::core::{Runner, ScrapeConfig};
pub use crate::core::{ScraperError, ScraperResult};
pub use browser::{Locator, Page, WebDriverPage};
pub use models::{CategoryTarget, Product};
pub use parser::ProductParser;
pub use stats::StatsTracker;
pub use storage::CsvStorage;
