//! Fan-out/fan-in price aggregation across all storefront regions.

use crate::gog::client::GogFetch;
use crate::gog::models::PriceObservation;
use crate::gog::regions::REGIONS;
use futures::stream::{FuturesUnordered, StreamExt};
use thiserror::Error;
use tracing::{debug, info};

/// No region produced a priced observation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Price not found in any region")]
pub struct NotFoundError;

/// Looks up `path` once per region, concurrently, and collects every
/// priced observation.
///
/// Completes only after all region lookups have finished; observations are
/// appended in completion order. Per-region transport errors are swallowed
/// and treated the same as an unpriced region.
pub async fn collect_prices(
    client: &dyn GogFetch,
    path: &str,
) -> Result<Vec<PriceObservation>, NotFoundError> {
    let mut lookups: FuturesUnordered<_> = REGIONS
        .iter()
        .map(|&region| async move {
            match client.lookup(path, region).await {
                Ok(observation) => observation,
                Err(e) => {
                    debug!("{}: lookup failed: {:#}", region, e);
                    None
                }
            }
        })
        .collect();

    let mut observations = Vec::new();
    while let Some(result) = lookups.next().await {
        if let Some(observation) = result {
            observations.push(observation);
        }
    }

    info!("{}: {} of {} regions priced", path, observations.len(), REGIONS.len());

    if observations.is_empty() {
        return Err(NotFoundError);
    }

    Ok(observations)
}
