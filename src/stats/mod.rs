use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct ScrapingStats {
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub categories_attempted: usize,
    pub categories_saved: usize,
    pub categories_failed: usize,
    pub incomplete_paginations: usize,
    pub products_saved: usize,
    pub invalid_cards: usize,
    pub load_more_clicks: usize,
    pub cookie_dismissals: usize,
    pub cookie_recoveries: usize,
    pub failed_saves: usize,
}

#[derive(Debug, Clone)]
pub struct StatsTracker {
    stats: Arc<RwLock<ScrapingStats>>,
}

impl StatsTracker {
    pub fn new() -> Self {
        Self {
            stats: Arc::new(RwLock::new(ScrapingStats {
                start_time: Utc::now(),
                end_time: None,
                categories_attempted: 0,
                categories_saved: 0,
                categories_failed: 0,
                incomplete_paginations: 0,
                products_saved: 0,
                invalid_cards: 0,
                load_more_clicks: 0,
                cookie_dismissals: 0,
                cookie_recoveries: 0,
                failed_saves: 0,
            })),
        }
    }

    pub fn record_category_started(&self) {
        self.stats.write().categories_attempted += 1;
    }

    pub fn record_category_saved(&self, products: usize) {
        let mut stats = self.stats.write();
        stats.categories_saved += 1;
        stats.products_saved += products;
    }

    pub fn record_category_failed(&self) {
        self.stats.write().categories_failed += 1;
    }

    pub fn record_incomplete_pagination(&self) {
        self.stats.write().incomplete_paginations += 1;
    }

    pub fn record_invalid_cards(&self, count: usize) {
        self.stats.write().invalid_cards += count;
    }

    pub fn record_load_more_click(&self) {
        self.stats.write().load_more_clicks += 1;
    }

    pub fn record_cookie_dismissed(&self) {
        self.stats.write().cookie_dismissals += 1;
    }

    pub fn record_cookie_recovery(&self) {
        self.stats.write().cookie_recoveries += 1;
    }

    pub fn record_failed_save(&self) {
        self.stats.write().failed_saves += 1;
    }

    pub fn finish(&self) {
        self.stats.write().end_time = Some(Utc::now());
    }

    pub fn elapsed(&self) -> Duration {
        let stats = self.stats.read();
        stats
            .end_time
            .unwrap_or_else(Utc::now)
            .signed_duration_since(stats.start_time)
    }

    pub fn get_stats(&self) -> ScrapingStats {
        self.stats.read().clone()
    }

    pub fn print_summary(&self) {
        let duration = self.elapsed();
        let stats = self.stats.read();

        println!("\nScraping Statistics:");
        println!("===================");
        println!("Duration: {} seconds", duration.num_seconds());
        println!(
            "Categories: {} attempted, {} saved, {} failed",
            stats.categories_attempted, stats.categories_saved, stats.categories_failed
        );
        println!("Products Saved: {}", stats.products_saved);
        println!("Load-more Clicks: {}", stats.load_more_clicks);
        println!(
            "Cookie Banner: {} dismissed, {} recovered",
            stats.cookie_dismissals, stats.cookie_recoveries
        );

        if stats.incomplete_paginations > 0 {
            println!("Incomplete Listings: {}", stats.incomplete_paginations);
        }
        if stats.invalid_cards > 0 {
            println!("Skipped Cards: {}", stats.invalid_cards);
        }
        if stats.failed_saves > 0 {
            println!("Failed Saves: {}", stats.failed_saves);
        }
    }
}

impl Default for StatsTracker {
    fn default() -> Self {
        Self::new()
    }
}
