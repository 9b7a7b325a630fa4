/// CSS selectors describing a product card and its fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSelectors {
    pub card: String,
    pub title: String,
    pub title_attribute: String,
    pub description: String,
    pub price: String,
    pub star: String,
    pub review_count: String,
}

impl Default for ProductSelectors {
    fn default() -> Self {
        Self {
            card: ".thumbnail".to_string(),
            title: ".title".to_string(),
            title_attribute: "title".to_string(),
            description: ".description".to_string(),
            price: ".price".to_string(),
            star: ".ws-icon.ws-icon-star".to_string(),
            review_count: ".review-count".to_string(),
        }
    }
}
