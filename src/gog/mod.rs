//! GOG storefront integration: regions, HTTP client, price extraction,
//! and URL handling.

pub mod client;
pub mod models;
pub mod parser;
pub mod regions;
pub mod urls;

pub use client::{GogClient, GogFetch};
pub use models::PriceObservation;
pub use parser::{ExtractPrice, FinalAmountExtractor};
pub use regions::REGIONS;
pub use urls::GameUrl;
