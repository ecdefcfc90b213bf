//! Startup loading of the model and column artifacts.

use crate::error::{ValuationError, ValuationErrorExt};
use crate::estimator::PriceEstimator;
use crate::model::LinearModel;
use crate::vocabulary::FeatureLayout;
use homeval_kernel::domain::config::{UnknownLocationPolicy, ValuationConfig};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// `columns.json`: the model's input columns in order.
#[derive(Debug, Deserialize)]
struct ColumnsArtifact {
    data_columns: Vec<String>,
}

/// Reads and cross-checks the persisted artifacts.
#[derive(Debug, Clone)]
pub struct ArtifactLoader {
    model_path: PathBuf,
    columns_path: PathBuf,
    unknown_location: UnknownLocationPolicy,
}

impl ArtifactLoader {
    #[must_use]
    pub fn new(model_path: impl Into<PathBuf>, columns_path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: model_path.into(),
            columns_path: columns_path.into(),
            unknown_location: UnknownLocationPolicy::default(),
        }
    }

    #[must_use]
    pub fn from_config(config: &ValuationConfig) -> Self {
        Self::new(config.model_path(), config.columns_path())
            .unknown_location(config.unknown_location)
    }

    #[must_use]
    pub const fn unknown_location(mut self, policy: UnknownLocationPolicy) -> Self {
        self.unknown_location = policy;
        self
    }

    /// Loads both artifacts and builds the estimator.
    ///
    /// # Errors
    /// * [`ValuationError::Io`] if a file cannot be read.
    /// * [`ValuationError::Decode`] if a file is not the expected JSON.
    /// * [`ValuationError::Artifact`] if the files disagree or contain invalid values.
    pub async fn load(&self) -> Result<PriceEstimator, ValuationError> {
        let columns: ColumnsArtifact = read_json(&self.columns_path).await?;
        let model: LinearModel = read_json(&self.model_path).await?;

        let estimator = build(&columns.data_columns, model, self.unknown_location)
            .context(format!("{} / {}", self.columns_path.display(), self.model_path.display()))?;

        info!(
            columns = estimator.layout().width(),
            locations = estimator.locations().len(),
            policy = ?self.unknown_location,
            "Artifacts loaded"
        );
        Ok(estimator)
    }
}

/// Builds an estimator from in-memory artifact documents.
///
/// # Errors
/// Same as [`ArtifactLoader::load`], minus IO.
pub fn from_slices(
    columns: &[u8],
    model: &[u8],
    unknown_location: UnknownLocationPolicy,
) -> Result<PriceEstimator, ValuationError> {
    let columns: ColumnsArtifact =
        serde_json::from_slice(columns).context("Failed to decode columns")?;
    let model: LinearModel = serde_json::from_slice(model).context("Failed to decode model")?;
    build(&columns.data_columns, model, unknown_location)
}

fn build(
    columns: &[String],
    model: LinearModel,
    unknown_location: UnknownLocationPolicy,
) -> Result<PriceEstimator, ValuationError> {
    let layout = FeatureLayout::from_columns(columns)?;
    PriceEstimator::new(layout, model.validated()?, unknown_location)
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ValuationError> {
    debug!(path = %path.display(), "Reading artifact");

    let bytes = tokio::fs::read(path)
        .await
        .context(format!("Failed to read {}", path.display()))?;
    serde_json::from_slice(&bytes).context(format!("Failed to decode {}", path.display()))
}
