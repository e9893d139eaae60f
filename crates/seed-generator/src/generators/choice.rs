//! Categorical value generators.

use crate::error::GeneratorError;
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Pick one value uniformly from `values`.
pub fn one_of<'a, T, R: Rng>(rng: &mut R, values: &'a [T]) -> Result<&'a T, GeneratorError> {
    values
        .choose(rng)
        .ok_or_else(|| GeneratorError::InvalidRange("empty choice set".to_string()))
}

/// Return `true` with the given probability.
pub fn chance<R: Rng>(rng: &mut R, probability: f64) -> Result<bool, GeneratorError> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(GeneratorError::InvalidRange(format!(
            "probability {probability} is outside [0, 1]"
        )));
    }
    Ok(rng.random_bool(probability))
}

/// Weighted categorical distribution over a fixed table.
///
/// Weights need not sum to 1. A category listed more than once is drawn
/// with the combined weight of its entries.
#[derive(Debug, Clone)]
pub struct WeightedChoice<T> {
    values: Vec<T>,
    index: WeightedIndex<f64>,
}

impl<T> WeightedChoice<T> {
    /// Build the distribution from `(value, weight)` pairs.
    pub fn new<I>(table: I) -> Result<Self, GeneratorError>
    where
        I: IntoIterator<Item = (T, f64)>,
    {
        let (values, weights): (Vec<T>, Vec<f64>) = table.into_iter().unzip();
        if values.is_empty() {
            return Err(GeneratorError::InvalidRange(
                "empty weight table".to_string(),
            ));
        }

        let index = WeightedIndex::new(&weights)
            .map_err(|e| GeneratorError::InvalidRange(format!("invalid weights: {e}")))?;

        Ok(Self { values, index })
    }

    /// Draw one value.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> &T {
        &self.values[self.index.sample(rng)]
    }
}

/// Draw one value from a weighted table.
///
/// Convenience for one-off draws; build a [`WeightedChoice`] once when
/// sampling the same table repeatedly.
pub fn weighted<T: Clone, R: Rng>(rng: &mut R, table: &[(T, f64)]) -> Result<T, GeneratorError> {
    let choice = WeightedChoice::new(table.iter().cloned())?;
    Ok(choice.sample(rng).clone())
}
