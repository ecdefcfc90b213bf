//! Valuation feature slice: loads the fitted price model with its location vocabulary at
//! startup and answers location listing and price estimation requests.

pub mod artifact;
pub mod dto;
mod error;
pub mod estimator;
pub mod model;
#[cfg(feature = "server")]
pub mod server;
pub mod vocabulary;

pub use crate::artifact::ArtifactLoader;
pub use crate::error::{ValuationError, ValuationErrorExt};
pub use crate::estimator::{PriceEstimator, PriceQuery};

use homeval_kernel::domain::config::ValuationConfig;
use homeval_kernel::domain::registry::InitializedSlice;

/// Valuation feature state
#[homeval_derive::homeval_slice]
pub struct Valuation {
    pub estimator: PriceEstimator,
}

/// Initialize the valuation feature.
///
/// Reads the artifacts named by `config`; the service must not start if this fails.
///
/// # Errors
/// Propagates any [`ValuationError`] raised while loading or validating the artifacts.
pub async fn init(config: &ValuationConfig) -> Result<InitializedSlice, ValuationError> {
    let estimator = ArtifactLoader::from_config(config).load().await?;

    tracing::info!("Valuation slice initialized");

    Ok(InitializedSlice::new(Valuation::new(ValuationInner { estimator })))
}
