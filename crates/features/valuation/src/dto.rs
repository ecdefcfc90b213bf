//! Request and response bodies of the valuation endpoints.

use crate::error::ValuationError;
use crate::estimator::PriceQuery;
use homeval_derive::api_model;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Known locations, in model column order.
#[api_model]
pub struct LocationNamesResponse {
    pub locations: Vec<String>,
}

/// Prediction input. Numeric fields accept JSON numbers or numeric strings.
#[api_model(deny_unknown_fields = false)]
pub struct PredictHomePriceRequest {
    /// Built-up area in square feet
    pub total_sqft: NumericInput,
    /// Location name as listed by `/get_location_names`
    pub location: String,
    /// Bedrooms
    pub bhk: NumericInput,
    /// Bathrooms
    pub bath: NumericInput,
}

/// Estimated price in lakh.
#[api_model]
pub struct EstimatedPriceResponse {
    pub estimated_price: f64,
}

/// Body of every error response.
#[api_model]
pub struct ErrorResponse {
    pub error: String,
}

/// A number sent either as a JSON number or as a string such as `"1000"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for NumericInput {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl fmt::Display for NumericInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "'{s}'"),
        }
    }
}

impl NumericInput {
    fn number(&self, field: &str) -> Result<f64, ValuationError> {
        let value = match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok(),
        };

        value.filter(|v| v.is_finite()).ok_or_else(|| {
            ValuationError::invalid_input(format!("{field} must be a number, got {self}"))
        })
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn count(&self, field: &str) -> Result<u32, ValuationError> {
        let value = self.number(field)?;
        if value.fract() != 0.0 || value < 0.0 || value > f64::from(u32::MAX) {
            return Err(ValuationError::invalid_input(format!(
                "{field} must be a non-negative whole number, got {self}"
            )));
        }

        Ok(value as u32)
    }
}

impl TryFrom<PredictHomePriceRequest> for PriceQuery {
    type Error = ValuationError;

    fn try_from(request: PredictHomePriceRequest) -> Result<Self, Self::Error> {
        let location = request.location.trim();
        if location.is_empty() {
            return Err(ValuationError::invalid_input("location must not be blank"));
        }

        let total_sqft = request.total_sqft.number("total_sqft")?;
        if total_sqft <= 0.0 {
            return Err(ValuationError::invalid_input(format!(
                "total_sqft must be greater than zero, got {total_sqft}"
            )));
        }

        Ok(Self {
            location: location.to_owned(),
            total_sqft,
            bhk: request.bhk.count("bhk")?,
            bath: request.bath.count("bath")?,
        })
    }
}
