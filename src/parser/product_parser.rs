use super::selectors::ProductSelectors;
use crate::core::ExtractionError;
use crate::models::Product;
use crate::{ScraperError, ScraperResult};
use log::trace;
use scraper::{ElementRef, Html, Selector};

pub type CardResult = Result<Product, ExtractionError>;

const NBSP: char = '\u{a0}';

/// Turns product-card markup into [`Product`] records.
///
/// Selectors are compiled once; the parser is cheap to reuse across pages.
#[derive(Debug, Clone)]
pub struct ProductParser {
    selectors: ProductSelectors,
    card: Selector,
    title: Selector,
    description: Selector,
    price: Selector,
    star: Selector,
    review_count: Selector,
}

fn compile(selector: &str) -> ScraperResult<Selector> {
    Selector::parse(selector).map_err(|_| ScraperError::SelectorError(selector.to_string()))
}

impl ProductParser {
    pub fn new(selectors: ProductSelectors) -> ScraperResult<Self> {
        Ok(Self {
            card: compile(&selectors.card)?,
            title: compile(&selectors.title)?,
            description: compile(&selectors.description)?,
            price: compile(&selectors.price)?,
            star: compile(&selectors.star)?,
            review_count: compile(&selectors.review_count)?,
            selectors,
        })
    }

    pub fn selectors(&self) -> &ProductSelectors {
        &self.selectors
    }

    /// Number of product cards currently present in a rendered page.
    pub fn count_cards(&self, html: &str) -> usize {
        Html::parse_document(html).select(&self.card).count()
    }

    /// Extracts every card of a page in document order. A malformed card
    /// only costs its own entry.
    pub fn parse_listing(&self, html: &str) -> Vec<CardResult> {
        let document = Html::parse_document(html);
        document
            .select(&self.card)
            .map(|card| self.parse_card(card))
            .collect()
    }

    /// Parses the markup of a single card.
    pub fn parse_fragment(&self, html: &str) -> CardResult {
        let fragment = Html::parse_fragment(html);
        self.parse_card(fragment.root_element())
    }

    pub fn parse_card(&self, card: ElementRef<'_>) -> CardResult {
        let title = self.title(card)?;
        let description = self.required_text(card, &self.description, &self.selectors.description)?;
        let price = self.price(card)?;
        let rating = card.select(&self.star).count() as u32;
        let num_of_reviews = self.num_of_reviews(card)?;

        trace!("Parsed card `{}`: price={} rating={}", title, price, rating);

        Ok(Product {
            title,
            description: description.replace(NBSP, " "),
            price,
            rating,
            num_of_reviews,
        })
    }

    fn title(&self, card: ElementRef<'_>) -> Result<String, ExtractionError> {
        let element = card
            .select(&self.title)
            .next()
            .ok_or_else(|| ExtractionError::MissingElement {
                selector: self.selectors.title.clone(),
            })?;

        element
            .value()
            .attr(&self.selectors.title_attribute)
            .map(str::to_string)
            .ok_or_else(|| ExtractionError::MissingAttribute {
                selector: self.selectors.title.clone(),
                attribute: self.selectors.title_attribute.clone(),
            })
    }

    fn required_text(
        &self,
        card: ElementRef<'_>,
        selector: &Selector,
        source: &str,
    ) -> Result<String, ExtractionError> {
        card.select(selector)
            .next()
            .map(|e| e.text().collect::<String>())
            .ok_or_else(|| ExtractionError::MissingElement {
                selector: source.to_string(),
            })
    }

    fn price(&self, card: ElementRef<'_>) -> Result<f64, ExtractionError> {
        let raw = self.required_text(card, &self.price, &self.selectors.price)?;
        let cleaned = raw.replace('$', "");

        match cleaned.trim().parse::<f64>() {
            Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
            _ => Err(ExtractionError::InvalidPrice { raw }),
        }
    }

    // Absent element means no reviews yet.
    fn num_of_reviews(&self, card: ElementRef<'_>) -> Result<u32, ExtractionError> {
        let Some(element) = card.select(&self.review_count).next() else {
            return Ok(0);
        };

        let raw = element.text().collect::<String>();
        let count = raw
            .split_whitespace()
            .next()
            .and_then(|token| token.parse::<u32>().ok());

        count.ok_or(ExtractionError::InvalidReviewCount { raw })
    }
}

impl Default for ProductParser {
    fn default() -> Self {
        Self::new(ProductSelectors::default()).expect("default product selectors are valid")
    }
}
