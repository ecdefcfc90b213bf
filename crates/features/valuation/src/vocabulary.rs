//! Column layout of the fitted model and the location vocabulary derived from it.

use crate::error::ValuationError;
use crate::estimator::PriceQuery;
use fxhash::FxHashMap;

pub const TOTAL_SQFT_COLUMN: &str = "total_sqft";
pub const BATH_COLUMN: &str = "bath";
pub const BHK_COLUMN: &str = "bhk";

/// Canonical lookup key for a location name.
#[must_use]
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Known locations, in artifact order, with a case-insensitive index to their model column.
#[derive(Debug, Clone, Default)]
pub struct LocationVocabulary {
    names: Vec<String>,
    columns: FxHashMap<String, usize>,
}

impl LocationVocabulary {
    /// Location names exactly as stored in the artifact.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Model column for `name`, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn column_of(&self, name: &str) -> Option<usize> {
        self.columns.get(&normalize(name)).copied()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.column_of(name).is_some()
    }

    fn insert(&mut self, name: &str, column: usize) -> Result<(), ValuationError> {
        let key = normalize(name);
        if key.is_empty() {
            return Err(ValuationError::artifact(format!("Column {column} has a blank name")));
        }
        if let Some(previous) = self.columns.insert(key, column) {
            return Err(ValuationError::artifact(format!(
                "Location '{name}' appears twice (columns {previous} and {column})"
            )));
        }
        self.names.push(name.to_owned());
        Ok(())
    }
}

/// Positions of the numeric inputs within the model's feature vector.
#[derive(Debug, Clone)]
pub struct FeatureLayout {
    width: usize,
    total_sqft: usize,
    bath: usize,
    bhk: usize,
    locations: LocationVocabulary,
}

impl FeatureLayout {
    /// Splits the artifact's ordered column list into numeric columns and location columns.
    ///
    /// # Errors
    /// Returns [`ValuationError::Artifact`] when a numeric column is missing or repeated, or when
    /// a location name is blank or duplicated.
    pub fn from_columns<S: AsRef<str>>(columns: &[S]) -> Result<Self, ValuationError> {
        let mut total_sqft = None;
        let mut bath = None;
        let mut bhk = None;
        let mut locations = LocationVocabulary::default();

        for (index, column) in columns.iter().enumerate() {
            let column = column.as_ref();
            let slot = match normalize(column).as_str() {
                TOTAL_SQFT_COLUMN => &mut total_sqft,
                BATH_COLUMN => &mut bath,
                BHK_COLUMN => &mut bhk,
                _ => {
                    locations.insert(column, index)?;
                    continue;
                },
            };
            if slot.replace(index).is_some() {
                return Err(ValuationError::artifact(format!("Column '{column}' appears twice")));
            }
        }

        let required = |slot: Option<usize>, name: &str| {
            slot.ok_or_else(|| ValuationError::artifact(format!("Missing '{name}' column")))
        };

        Ok(Self {
            width: columns.len(),
            total_sqft: required(total_sqft, TOTAL_SQFT_COLUMN)?,
            bath: required(bath, BATH_COLUMN)?,
            bhk: required(bhk, BHK_COLUMN)?,
            locations,
        })
    }

    /// Number of model inputs.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn locations(&self) -> &LocationVocabulary {
        &self.locations
    }

    /// Builds the feature vector: numeric columns filled, the location column (if any) one-hot.
    #[must_use]
    pub fn encode(&self, query: &PriceQuery, location_column: Option<usize>) -> Vec<f64> {
        let mut features = vec![0.0; self.width];
        features[self.total_sqft] = query.total_sqft;
        features[self.bath] = f64::from(query.bath);
        features[self.bhk] = f64::from(query.bhk);
        if let Some(column) = location_column.filter(|column| *column < self.width) {
            features[column] = 1.0;
        }
        features
    }
}
