use crate::browser::Page;
use crate::core::config::ScrapeConfig;
use crate::core::cookies::{dismiss_cookie_banner, CookieOutcome};
use crate::core::pagination::{PaginationDriver, PaginationReport};
use crate::core::{ExtractionError, ScraperResult};
use crate::models::{CategoryTarget, Product};
use crate::parser::ProductParser;
use crate::stats::StatsTracker;
use crate::storage::{CsvStorage, SaveOutcome};
use log::{debug, error, info, warn};
use std::sync::Arc;

/// A card that was left out of the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedCard {
    /// Position among the page's cards, starting at 0.
    pub index: usize,
    pub error: ExtractionError,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CategoryOutcome {
    Scraped {
        cookie: CookieOutcome,
        pagination: PaginationReport,
        products: usize,
        skipped: Vec<SkippedCard>,
        save: SaveOutcome,
    },
    Failed {
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryReport {
    pub name: String,
    pub outcome: CategoryOutcome,
}

impl CategoryReport {
    pub fn saved(&self) -> bool {
        matches!(&self.outcome, CategoryOutcome::Scraped { save, .. } if save.is_saved())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    pub categories: Vec<CategoryReport>,
}

impl RunReport {
    pub fn category(&self, name: &str) -> Option<&CategoryReport> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn all_saved(&self) -> bool {
        self.categories.iter().all(CategoryReport::saved)
    }
}

struct Listing {
    cookie: CookieOutcome,
    pagination: PaginationReport,
    products: Vec<Product>,
    skipped: Vec<SkippedCard>,
}

/// Scrapes every configured category, one after another, on a single page.
pub struct Runner {
    config: ScrapeConfig,
    parser: ProductParser,
    storage: CsvStorage,
    stats: Arc<StatsTracker>,
}

impl Runner {
    pub fn new(config: ScrapeConfig) -> ScraperResult<Self> {
        info!("Initializing runner with {} categories", config.categories.len());
        let parser = ProductParser::new(config.product_selectors.clone())?;
        let storage = CsvStorage::new(&config.output_dir)?;

        Ok(Self {
            config,
            parser,
            storage,
            stats: Arc::new(StatsTracker::new()),
        })
    }

    pub fn stats(&self) -> Arc<StatsTracker> {
        Arc::clone(&self.stats)
    }

    /// Runs all categories. A failing category is recorded in the report and
    /// the next one is attempted.
    pub async fn run(&self, page: &dyn Page) -> RunReport {
        let mut report = RunReport::default();

        for target in &self.config.categories {
            self.stats.record_category_started();
            let outcome = match self.scrape_listing(page, target).await {
                Ok(listing) => self.persist(target, listing),
                Err(e) => {
                    error!("Failed to scrape {}: {}", target.name, e);
                    self.stats.record_category_failed();
                    CategoryOutcome::Failed {
                        reason: e.to_string(),
                    }
                }
            };

            report.categories.push(CategoryReport {
                name: target.name.clone(),
                outcome,
            });
        }

        self.stats.finish();
        report
    }

    async fn scrape_listing(&self, page: &dyn Page, target: &CategoryTarget) -> ScraperResult<Listing> {
        let url = self.config.category_url(target)?;
        info!("Scraping {} from {}", target.name, url);

        page.goto(&url).await?;
        let cookie = dismiss_cookie_banner(
            page,
            &self.config.page_selectors.cookie_button,
            self.config.cookie_timeout,
            &self.stats,
        )
        .await;

        let pagination = PaginationDriver::new(&self.config, &self.parser, &self.stats)
            .run(page, target.expected_count)
            .await?;
        if !pagination.converged() {
            self.stats.record_incomplete_pagination();
        }

        let html = page.source().await?;
        let mut products = Vec::new();
        let mut skipped = Vec::new();
        for (index, card) in self.parser.parse_listing(&html).into_iter().enumerate() {
            match card {
                Ok(product) => products.push(product),
                Err(error) => {
                    warn!("Skipping card {} on {}: {}", index, target.name, error);
                    skipped.push(SkippedCard { index, error });
                }
            }
        }
        debug!(
            "Extracted {} products from {} ({} skipped)",
            products.len(),
            target.name,
            skipped.len()
        );
        self.stats.record_invalid_cards(skipped.len());

        Ok(Listing {
            cookie,
            pagination,
            products,
            skipped,
        })
    }

    fn persist(&self, target: &CategoryTarget, listing: Listing) -> CategoryOutcome {
        let rows = listing.products.len();
        let save = match self.storage.save(&target.name, &listing.products) {
            Ok(path) => {
                info!("Saved {} products to {}", rows, path.display());
                println!("Saved {} products to {}", rows, target.file_name());
                self.stats.record_category_saved(rows);
                SaveOutcome::Saved { path, rows }
            }
            Err(e) => {
                let path = self.storage.path_for(&target.name);
                error!("Failed to write {}: {}", path.display(), e);
                self.stats.record_failed_save();
                SaveOutcome::Failed {
                    path,
                    reason: e.to_string(),
                }
            }
        };

        CategoryOutcome::Scraped {
            cookie: listing.cookie,
            pagination: listing.pagination,
            products: rows,
            skipped: listing.skipped,
            save,
        }
    }
}
