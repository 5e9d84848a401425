//! gog-price-checker - Regional price lookup service for GOG game listings
//!
//! Fetches the displayed price of a single game across every supported
//! storefront region in parallel, with TLS fingerprint emulation for
//! reliable scraping, and serves the aggregate as JSON.

pub mod aggregate;
pub mod cache;
pub mod config;
pub mod gog;
pub mod server;

pub use cache::PriceCache;
pub use config::Config;
pub use gog::client::{GogClient, GogFetch};
pub use gog::models::PriceObservation;
pub use gog::regions::REGIONS;
pub use gog::urls::GameUrl;
