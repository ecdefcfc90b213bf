use crate::error::ValuationError;
use crate::model::PriceModel;
use crate::vocabulary::FeatureLayout;
use homeval_kernel::domain::config::UnknownLocationPolicy;
use tracing::{debug, warn};

/// A validated prediction request.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuery {
    pub location: String,
    /// Built-up area in square feet, finite and positive.
    pub total_sqft: f64,
    pub bhk: u32,
    pub bath: u32,
}

/// Vocabulary, layout and model bundled into the read-only prediction service.
#[derive(Debug)]
pub struct PriceEstimator {
    layout: FeatureLayout,
    model: Box<dyn PriceModel>,
    unknown_location: UnknownLocationPolicy,
}

impl PriceEstimator {
    /// # Errors
    /// Returns [`ValuationError::Artifact`] when the model does not take one input per column.
    pub fn new(
        layout: FeatureLayout,
        model: impl PriceModel + 'static,
        unknown_location: UnknownLocationPolicy,
    ) -> Result<Self, ValuationError> {
        if model.dimension() != layout.width() {
            return Err(ValuationError::artifact(format!(
                "Model expects {} features but the column list has {}",
                model.dimension(),
                layout.width()
            )));
        }

        Ok(Self { layout, model: Box::new(model), unknown_location })
    }

    /// Known location names in artifact order.
    #[must_use]
    pub fn locations(&self) -> &[String] {
        self.layout.locations().names()
    }

    #[must_use]
    pub const fn layout(&self) -> &FeatureLayout {
        &self.layout
    }

    #[must_use]
    pub const fn unknown_location(&self) -> UnknownLocationPolicy {
        self.unknown_location
    }

    /// Estimated price (lakh), rounded to two decimals and never negative.
    ///
    /// # Errors
    /// * [`ValuationError::UnknownLocation`] when the location is unknown and the policy rejects it.
    /// * [`ValuationError::Model`] when the model output is not a finite number.
    pub fn estimate(&self, query: &PriceQuery) -> Result<f64, ValuationError> {
        let column = match self.layout.locations().column_of(&query.location) {
            Some(column) => Some(column),
            None => match self.unknown_location {
                UnknownLocationPolicy::Reject => {
                    return Err(ValuationError::UnknownLocation {
                        message: query.location.trim().to_owned().into(),
                        context: None,
                    });
                },
                UnknownLocationPolicy::Baseline => {
                    warn!(location = %query.location, "Unknown location, using baseline encoding");
                    None
                },
            },
        };

        let features = self.layout.encode(query, column);
        let raw = self.model.predict(&features)?;
        let price = round_price(raw);
        if !raw.is_finite() || !price.is_finite() {
            return Err(ValuationError::Model {
                message: format!("Prediction is not finite ({raw})").into(),
                context: None,
            });
        }

        debug!(raw, price, "Model evaluated");
        Ok(price)
    }
}

/// Values at or above 1e15 carry no fractional digits, so they are not scaled.
const ROUNDING_LIMIT: f64 = 1e15;

fn round_price(raw: f64) -> f64 {
    let rounded = if raw.abs() < ROUNDING_LIMIT {
        (raw * 100.0).round() / 100.0
    } else {
        raw
    };
    if rounded > 0.0 { rounded } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LinearModel;

    fn estimator(policy: UnknownLocationPolicy) -> PriceEstimator {
        let layout = FeatureLayout::from_columns(&["total_sqft", "bath", "bhk", "Hebbal", "Whitefield"])
            .expect("layout");
        let model = LinearModel::new(-20.0, vec![0.08, 1.5, -1.2, 12.34, -3.0]).expect("model");
        PriceEstimator::new(layout, model, policy).expect("estimator")
    }

    fn query(location: &str, total_sqft: f64) -> PriceQuery {
        PriceQuery { location: location.to_owned(), total_sqft, bhk: 2, bath: 2 }
    }

    #[test]
    fn known_location_sets_its_column() {
        let price = estimator(UnknownLocationPolicy::Reject)
            .estimate(&query("hebbal", 1000.0))
            .expect("estimate");
        // -20 + 80 + 3 - 2.4 + 12.34
        assert!((price - 72.94).abs() < 1e-9);
    }

    #[test]
    fn unknown_location_follows_policy() {
        let err = estimator(UnknownLocationPolicy::Reject)
            .estimate(&query("Atlantis", 1000.0))
            .unwrap_err();
        assert!(matches!(err, ValuationError::UnknownLocation { .. }));
        assert!(err.is_client_error());

        let price = estimator(UnknownLocationPolicy::Baseline)
            .estimate(&query("Atlantis", 1000.0))
            .expect("baseline estimate");
        assert!((price - 60.6).abs() < 1e-9);
    }

    #[test]
    fn negative_predictions_are_clamped() {
        let price = estimator(UnknownLocationPolicy::Reject)
            .estimate(&query("Whitefield", 10.0))
            .expect("estimate");
        assert!(price.abs() < f64::EPSILON);
        assert!(price.is_sign_positive());
    }

    #[test]
    fn dimension_mismatch_is_rejected() {
        let layout = FeatureLayout::from_columns(&["total_sqft", "bath", "bhk"]).expect("layout");
        let model = LinearModel::new(0.0, vec![1.0, 1.0]).expect("model");
        assert!(PriceEstimator::new(layout, model, UnknownLocationPolicy::Reject).is_err());
    }

    #[test]
    fn rounding_keeps_two_decimals() {
        assert!((round_price(12.3456) - 12.35).abs() < 1e-9);
        assert!((round_price(-0.001)).abs() < f64::EPSILON);
    }

    #[test]
    fn rounding_huge_values_stays_finite() {
        let raw = 8.13e306;
        assert!(round_price(raw).is_finite());
        assert!((round_price(raw) - raw).abs() <= f64::EPSILON * raw);
        assert!(round_price(f64::INFINITY).is_infinite());
    }

    #[test]
    fn huge_area_yields_finite_price() {
        let price = estimator(UnknownLocationPolicy::Reject)
            .estimate(&query("Hebbal", 1e308))
            .expect("estimate");
        assert!(price.is_finite() && price > 0.0);
    }

    #[test]
    fn overflowing_prediction_is_a_model_error() {
        for coefficient in [10.0, -10.0] {
            let layout =
                FeatureLayout::from_columns(&["total_sqft", "bath", "bhk"]).expect("layout");
            let model = LinearModel::new(0.0, vec![coefficient, 0.0, 0.0]).expect("model");
            let estimator = PriceEstimator::new(layout, model, UnknownLocationPolicy::Baseline)
                .expect("estimator");

            let err = estimator.estimate(&query("anywhere", 1e308)).unwrap_err();
            assert!(matches!(err, ValuationError::Model { .. }));
            assert!(!err.is_client_error());
        }
    }
}
