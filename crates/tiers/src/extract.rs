// ABOUTME: Pricing tier extraction from subscription page HTML.
// ABOUTME: Walks grouping and package containers with CSS selectors and derives monthly/yearly prices.

//! Package extraction.
//!
//! The page layout this module understands:
//!
//! ```html
//! <div class="row-subscriptions">
//!   <div class="package">
//!     <div class="header"><h3>Option 1</h3></div>
//!     <div class="package-description">Description 1</div>
//!     <div class="package-price">
//!       <span class="price-big">£108.00</span> Per Year
//!       <p>Save £11.90 on the monthly price</p>
//!     </div>
//!   </div>
//! </div>
//! ```
//!
//! Missing pieces never fail extraction: title, description and price fall
//! back to empty strings and the discount to `None`. The only error is an
//! empty price once a frequency has been detected; a price with no readable
//! amount gives `NaN` derived prices instead.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::error::Result;
use crate::frequency::classify_frequency;
use crate::models::{Frequency, Package};
use crate::price::parse_price;

const MONTHS_PER_YEAR: f64 = 12.0;

fn compile(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid built-in selector {:?}: {}", css, e))
}

static GROUPING: Lazy<Selector> = Lazy::new(|| compile(".row-subscriptions"));
static PACKAGE: Lazy<Selector> = Lazy::new(|| compile(".package"));
static TITLE: Lazy<Selector> = Lazy::new(|| compile(".header h3"));
static DESCRIPTION: Lazy<Selector> = Lazy::new(|| compile(".package-description"));
static PRICE: Lazy<Selector> = Lazy::new(|| compile(".package-price .price-big"));
static PRICE_BLOCK: Lazy<Selector> = Lazy::new(|| compile(".package-price"));
static DISCOUNT: Lazy<Selector> = Lazy::new(|| compile(".package-price p"));

/// Extracts every package on the page, in document order.
///
/// Groupings are visited in order and, within each, packages in order.
pub fn extract_packages(html: &str) -> Result<Vec<Package>> {
    let document = Html::parse_document(html);
    let mut packages = Vec::new();

    for grouping in document.select(&GROUPING) {
        for element in grouping.select(&PACKAGE) {
            packages.push(build_package(element)?);
        }
    }

    debug!(count = packages.len(), "extracted packages");
    Ok(packages)
}

fn build_package(element: ElementRef<'_>) -> Result<Package> {
    let option_title = select_text(element, &TITLE).unwrap_or_default();
    let description = select_text(element, &DESCRIPTION).unwrap_or_default();
    let price = select_text(element, &PRICE).unwrap_or_default();
    let price_block = select_text(element, &PRICE_BLOCK).unwrap_or_default();
    let discount = select_text(element, &DISCOUNT).filter(|text| !text.is_empty());

    let frequency = classify_frequency(&price_block);
    let (yearly_price, monthly_price) = match frequency {
        Some(Frequency::Monthly) => {
            let monthly = parse_price(&price)?;
            (Some(monthly * MONTHS_PER_YEAR), Some(monthly))
        }
        Some(Frequency::Yearly) => {
            let yearly = parse_price(&price)?;
            (Some(yearly), Some(yearly / MONTHS_PER_YEAR))
        }
        None => {
            warn!(title = %option_title, price = %price, "no billing frequency found for package");
            (None, None)
        }
    };

    debug!(
        title = %option_title,
        price = %price,
        frequency = ?frequency,
        "built package"
    );

    Ok(Package {
        option_title,
        description,
        price,
        frequency,
        discount,
        yearly_price,
        monthly_price,
    })
}

/// Concatenated, trimmed text of every descendant matching `selector`.
///
/// Returns `None` when nothing matches, which lets callers tell an absent
/// element apart from an empty one.
fn select_text(element: ElementRef<'_>, selector: &Selector) -> Option<String> {
    let mut matches = element.select(selector).peekable();
    matches.peek()?;

    let text: String = matches.flat_map(|el| el.text()).collect();
    Some(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE_HTML: &str = r#"
        <div class="row-subscriptions">
          <div class="package">
            <div class="header"><h3>Option 1</h3></div>
            <div class="package-description">Description 1</div>
            <div class="package-price"><span class="price-big">£108.00</span> Per Year
                    <p>Save £11.90 on the monthly price</p>
            </div>
          </div>
          <div class="package">
            <div class="header"><h3>Option 2</h3></div>
            <div class="package-description">Description 2</div>
            <div class="package-price"><span class="price-big">£15.99</span> Per Month</div>
          </div>
        </div>
    "#;

    #[test]
    fn test_extracts_in_document_order() {
        let packages = extract_packages(SAMPLE_HTML).unwrap();
        let titles: Vec<_> = packages.iter().map(|p| p.option_title.as_str()).collect();
        assert_eq!(titles, vec!["Option 1", "Option 2"]);
    }

    #[test]
    fn test_yearly_package_fields() {
        let packages = extract_packages(SAMPLE_HTML).unwrap();
        assert_eq!(
            packages[0],
            Package {
                option_title: "Option 1".to_string(),
                description: "Description 1".to_string(),
                price: "£108.00".to_string(),
                frequency: Some(Frequency::Yearly),
                discount: Some("Save £11.90 on the monthly price".to_string()),
                yearly_price: Some(108.0),
                monthly_price: Some(9.0),
            }
        );
    }

    #[test]
    fn test_monthly_package_fields() {
        let packages = extract_packages(SAMPLE_HTML).unwrap();
        assert_eq!(
            packages[1],
            Package {
                option_title: "Option 2".to_string(),
                description: "Description 2".to_string(),
                price: "£15.99".to_string(),
                frequency: Some(Frequency::Monthly),
                discount: None,
                yearly_price: Some(191.88),
                monthly_price: Some(15.99),
            }
        );
    }

    #[test]
    fn test_missing_sub_elements_degrade_to_empty() {
        let html = r#"
            <div class="row-subscriptions">
              <div class="package">
                <div class="package-price">Call us</div>
              </div>
            </div>
        "#;

        let packages = extract_packages(html).unwrap();
        assert_eq!(
            packages,
            vec![Package {
                option_title: String::new(),
                description: String::new(),
                price: String::new(),
                ..Default::default()
            }]
        );
    }

    #[test]
    fn test_undetected_frequency_keeps_raw_price() {
        let html = r#"
            <div class="row-subscriptions">
              <div class="package">
                <div class="header"><h3>Lifetime</h3></div>
                <div class="package-price"><span class="price-big">£250.00</span> One Off</div>
              </div>
            </div>
        "#;

        let packages = extract_packages(html).unwrap();
        assert_eq!(packages[0].price, "£250.00");
        assert_eq!(packages[0].frequency, None);
        assert_eq!(packages[0].yearly_price, None);
        assert_eq!(packages[0].monthly_price, None);
    }

    #[test]
    fn test_empty_discount_paragraph_is_absent() {
        let html = r#"
            <div class="row-subscriptions">
              <div class="package">
                <div class="package-price"><span class="price-big">£5.00</span> Per Month<p>  </p></div>
              </div>
            </div>
        "#;

        let packages = extract_packages(html).unwrap();
        assert_eq!(packages[0].discount, None);
    }

    #[test]
    fn test_empty_price_with_frequency_is_an_error() {
        let html = r#"
            <div class="row-subscriptions">
              <div class="package">
                <div class="package-price">Per Month</div>
              </div>
            </div>
        "#;

        let err = extract_packages(html).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_malformed_price_does_not_drop_neighbours() {
        let html = r#"
            <div class="row-subscriptions">
              <div class="package">
                <div class="header"><h3>Standard</h3></div>
                <div class="package-price"><span class="price-big">£15.99</span> Per Month</div>
              </div>
              <div class="package">
                <div class="header"><h3>Promo</h3></div>
                <div class="package-price"><span class="price-big">£9.99*</span> Per Month</div>
              </div>
              <div class="package">
                <div class="header"><h3>Enterprise</h3></div>
                <div class="package-price"><span class="price-big">POA</span> Per Year</div>
              </div>
            </div>
        "#;

        let packages = extract_packages(html).unwrap();
        assert_eq!(packages.len(), 3);
        assert_eq!(packages[0].monthly_price, Some(15.99));
        assert_eq!(packages[1].price, "£9.99*");
        assert_eq!(packages[1].monthly_price, Some(9.99));
        assert_eq!(packages[2].frequency, Some(Frequency::Yearly));
        assert!(packages[2].yearly_price.unwrap().is_nan());
        assert!(packages[2].monthly_price.unwrap().is_nan());
    }

    #[test]
    fn test_packages_outside_groupings_are_ignored() {
        let html = r#"
            <div class="package">
              <div class="package-price"><span class="price-big">£1.00</span> Per Month</div>
            </div>
        "#;

        assert!(extract_packages(html).unwrap().is_empty());
    }

    #[test]
    fn test_select_text_trims_and_concatenates() {
        let document = Html::parse_fragment("<div><p> a </p><p>b </p></div>");
        let root = document.root_element();
        let p = compile("p");
        assert_eq!(select_text(root, &p), Some("a b".to_string()));
        assert_eq!(select_text(root, &compile("span")), None);
    }
}
