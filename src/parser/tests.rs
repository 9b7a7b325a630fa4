use super::*;
use crate::core::ExtractionError;
use crate::models::Product;

fn card(title: Option<&str>, description: &str, price: &str, stars: usize, reviews: Option<&str>) -> String {
    let title_tag = match title {
        Some(title) => format!(r#"<a href="/product/1" class="title" title="{0}">{0}</a>"#, title),
        None => r#"<a href="/product/1" class="title">untitled</a>"#.to_string(),
    };
    let review_tag = reviews
        .map(|text| format!(r#"<p class="review-count float-end">{}</p>"#, text))
        .unwrap_or_default();
    let star_tags = r#"<span class="ws-icon ws-icon-star"></span>"#.repeat(stars);

    format!(
        r#"<div class="thumbnail">
            <div class="caption">
                <h4 class="price float-end card-title pull-right">{price}</h4>
                <h4>{title_tag}</h4>
                <p class="description card-text">{description}</p>
            </div>
            <div class="ratings">
                {review_tag}
                <p data-rating="{stars}">{star_tags}</p>
            </div>
        </div>"#
    )
}

fn page(cards: &[String]) -> String {
    format!(
        r#"<html><body><div class="row">{}</div>
        <a class="btn btn-primary ecomerce-items-scroll-more">More</a></body></html>"#,
        cards.join("\n")
    )
}

#[test]
fn test_literal_nokia_card() {
    let parser = ProductParser::default();
    let html = card(
        Some("Nokia X"),
        "Andoid,&nbsp;neon green",
        "$299.00",
        3,
        Some("21 reviews"),
    );

    let product = parser.parse_fragment(&html).unwrap();

    assert_eq!(
        product,
        Product {
            title: "Nokia X".to_string(),
            description: "Andoid, neon green".to_string(),
            price: 299.0,
            rating: 3,
            num_of_reviews: 21,
        }
    );
}

#[test]
fn test_title_comes_from_attribute_not_text() {
    let parser = ProductParser::default();
    let html = r#"<div class="thumbnail">
        <a class="title" title="Asus VivoBook X441NA-GA190">Asus VivoBook X441NA...</a>
        <p class="description">Chocolate Black</p>
        <h4 class="price">$295.99</h4>
    </div>"#;

    let product = parser.parse_fragment(html).unwrap();
    assert_eq!(product.title, "Asus VivoBook X441NA-GA190");
    assert_eq!(product.price, 295.99);
}

#[test]
fn test_every_nbsp_is_normalized() {
    let parser = ProductParser::default();
    let html = card(Some("Tab"), "7\"&nbsp;IPS,&nbsp;&nbsp;8GB\u{a0}Wi-Fi", "$69.99", 1, None);

    let product = parser.parse_fragment(&html).unwrap();
    assert_eq!(product.description, "7\" IPS,  8GB Wi-Fi");
    assert!(!product.description.contains('\u{a0}'));
}

#[test]
fn test_missing_review_count_defaults_to_zero() {
    let parser = ProductParser::default();
    let product = parser
        .parse_fragment(&card(Some("Iphone"), "Black", "$899.99", 1, None))
        .unwrap();

    assert_eq!(product.num_of_reviews, 0);
}

#[test]
fn test_rating_counts_star_icons() {
    let parser = ProductParser::default();

    let none = parser
        .parse_fragment(&card(Some("A"), "a", "$1.00", 0, Some("0 reviews")))
        .unwrap();
    let full = parser
        .parse_fragment(&card(Some("B"), "b", "$1.00", 5, Some("5 reviews")))
        .unwrap();

    assert_eq!(none.rating, 0);
    assert_eq!(full.rating, 5);
}

#[test]
fn test_star_selector_needs_both_classes() {
    let parser = ProductParser::default();
    let html = r#"<div class="thumbnail">
        <a class="title" title="Half"></a>
        <p class="description">x</p>
        <h4 class="price">$10</h4>
        <span class="ws-icon ws-icon-star"></span>
        <span class="ws-icon ws-icon-star"></span>
        <span class="ws-icon ws-icon-star-empty"></span>
        <span class="ws-icon"></span>
    </div>"#;

    assert_eq!(parser.parse_fragment(html).unwrap().rating, 2);
}

#[test]
fn test_price_keeps_full_precision() {
    let parser = ProductParser::default();
    let product = parser
        .parse_fragment(&card(Some("Dell"), "d", "$1139.54", 4, Some("7 reviews")))
        .unwrap();

    assert_eq!(product.price, 1139.54);
}

#[test]
fn test_unparseable_price_fails() {
    let parser = ProductParser::default();
    let result = parser.parse_fragment(&card(Some("X"), "x", "$N/A", 2, None));

    assert_eq!(
        result,
        Err(ExtractionError::InvalidPrice {
            raw: "$N/A".to_string()
        })
    );
}

#[test]
fn test_missing_title_attribute_fails() {
    let parser = ProductParser::default();
    let result = parser.parse_fragment(&card(None, "x", "$1.00", 2, None));

    assert!(matches!(
        result,
        Err(ExtractionError::MissingAttribute { ref attribute, .. }) if attribute == "title"
    ));
}

#[test]
fn test_missing_description_fails() {
    let parser = ProductParser::default();
    let html = r#"<div class="thumbnail"><a class="title" title="T"></a><h4 class="price">$1</h4></div>"#;

    assert_eq!(
        parser.parse_fragment(html),
        Err(ExtractionError::MissingElement {
            selector: ".description".to_string()
        })
    );
}

#[test]
fn test_non_numeric_review_count_fails() {
    let parser = ProductParser::default();
    let result = parser.parse_fragment(&card(Some("X"), "x", "$1.00", 2, Some("many reviews")));

    assert!(matches!(result, Err(ExtractionError::InvalidReviewCount { .. })));
}

#[test]
fn test_listing_keeps_dom_order_and_isolates_bad_cards() {
    let parser = ProductParser::default();
    let html = page(&[
        card(Some("First"), "one", "$10.00", 1, Some("1 reviews")),
        card(Some("Broken"), "two", "$soon", 2, Some("2 reviews")),
        card(Some("Third"), "three", "$30.50", 3, None),
    ]);

    let results = parser.parse_listing(&html);

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().title, "First");
    assert!(results[1].is_err());
    assert_eq!(results[2].as_ref().unwrap().price, 30.5);
    assert_eq!(parser.count_cards(&html), 3);
}

#[test]
fn test_count_cards_on_empty_page() {
    let parser = ProductParser::default();
    assert_eq!(parser.count_cards(&page(&[])), 0);
    assert!(parser.parse_listing(&page(&[])).is_empty());
}

#[test]
fn test_invalid_selector_is_rejected() {
    let selectors = ProductSelectors {
        card: "div[".to_string(),
        ..ProductSelectors::default()
    };

    match ProductParser::new(selectors) {
        Err(crate::ScraperError::SelectorError(selector)) => assert_eq!(selector, "div["),
        other => panic!("unexpected result: {:?}", other.map(|_| ())),
    }
}
