//! Data types returned by price lookups.

use serde::{Deserialize, Serialize};

/// One successful per-region price lookup.
///
/// `country` is the region code the price was fetched under; `price` is the
/// displayed USD amount. Observations are immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceObservation {
    pub country: String,
    pub price: f64,
}
