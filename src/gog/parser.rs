//! HTML price extraction for GOG product pages.

use scraper::{Html, Selector};
use std::sync::LazyLock;
use tracing::debug;

// The single price element GOG renders on a product page.
static FINAL_AMOUNT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".product-actions-price__final-amount").unwrap());

/// Extraction rule for turning a raw product page into an optional price.
///
/// The selector-based rule below is coupled to GOG's markup; keeping it
/// behind this trait lets the orchestration stay untouched when the page
/// structure changes.
pub trait ExtractPrice: Send + Sync {
    /// Returns the displayed price, or `None` when the page carries no
    /// priced listing for the requested region.
    fn extract(&self, html: &str) -> Option<f64>;
}

/// Default extractor reading `.product-actions-price__final-amount`.
#[derive(Debug, Default)]
pub struct FinalAmountExtractor;

impl ExtractPrice for FinalAmountExtractor {
    fn extract(&self, html: &str) -> Option<f64> {
        let document = Html::parse_document(html);

        let element = document.select(&FINAL_AMOUNT).next()?;
        let text = element.text().collect::<String>();
        let text = text.trim();

        // "0.00" is GOG's sentinel for "not sold in this region".
        if text.is_empty() || text == "0.00" {
            debug!("no priced listing (text: {:?})", text);
            return None;
        }

        parse_amount(text)
    }
}

/// Parses a displayed amount like "59.99", "$59.99" or "59.99 USD".
fn parse_amount(text: &str) -> Option<f64> {
    let cleaned: String = text.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();

    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse().ok()
}
