use crate::error::ValuationError;
use serde::Deserialize;
use std::fmt::Debug;

/// A fitted regression that maps a feature vector to a price.
pub trait PriceModel: Debug + Send + Sync {
    /// Number of features the model expects.
    fn dimension(&self) -> usize;

    /// Evaluates the model.
    ///
    /// # Errors
    /// Returns [`ValuationError::Model`] if `features` has the wrong length.
    fn predict(&self, features: &[f64]) -> Result<f64, ValuationError>;
}

/// Ordinary least squares fit: `intercept + Σ coefficients[i] * features[i]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinearModel {
    intercept: f64,
    coefficients: Vec<f64>,
}

impl LinearModel {
    /// # Errors
    /// Returns [`ValuationError::Artifact`] if any parameter is NaN or infinite.
    pub fn new(intercept: f64, coefficients: Vec<f64>) -> Result<Self, ValuationError> {
        Self { intercept, coefficients }.validated()
    }

    pub(crate) fn validated(self) -> Result<Self, ValuationError> {
        if !self.intercept.is_finite() {
            return Err(ValuationError::artifact("Intercept is not a finite number"));
        }
        if let Some(index) = self.coefficients.iter().position(|c| !c.is_finite()) {
            return Err(ValuationError::artifact(format!(
                "Coefficient {index} is not a finite number"
            )));
        }
        Ok(self)
    }

    #[must_use]
    pub const fn intercept(&self) -> f64 {
        self.intercept
    }

    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }
}

impl PriceModel for LinearModel {
    fn dimension(&self) -> usize {
        self.coefficients.len()
    }

    fn predict(&self, features: &[f64]) -> Result<f64, ValuationError> {
        if features.len() != self.coefficients.len() {
            return Err(ValuationError::Model {
                message: format!(
                    "Expected {} features, got {}",
                    self.coefficients.len(),
                    features.len()
                )
                .into(),
                context: None,
            });
        }

        Ok(self
            .coefficients
            .iter()
            .zip(features)
            .fold(self.intercept, |acc, (weight, value)| weight.mul_add(*value, acc)))
    }
}
