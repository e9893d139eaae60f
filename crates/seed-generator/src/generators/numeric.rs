//! Numeric value generators.

use crate::error::GeneratorError;
use rand::Rng;
use rust_decimal::Decimal;

/// Generate a random integer in the given range (inclusive).
pub fn int_range<R: Rng>(rng: &mut R, min: i64, max: i64) -> Result<i64, GeneratorError> {
    if min > max {
        return Err(GeneratorError::InvalidRange(format!(
            "integer range [{min}, {max}] is empty"
        )));
    }
    Ok(rng.random_range(min..=max))
}

/// Generate a random float in the given range (inclusive).
pub fn float_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> Result<f64, GeneratorError> {
    if !(min.is_finite() && max.is_finite()) || min > max {
        return Err(GeneratorError::InvalidRange(format!(
            "float range [{min}, {max}] is empty or unbounded"
        )));
    }
    Ok(rng.random_range(min..=max))
}

/// Generate a random currency amount in the given range.
///
/// The amount is rounded to cents and always carries a scale of 2, so
/// `12.5` comes back as `12.50`. Rounding never leaves `[min, max]`.
pub fn currency_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> Result<Decimal, GeneratorError> {
    let value = float_range(rng, min, max)?;

    let lowest = (min * 100.0).ceil() as i64;
    let highest = (max * 100.0).floor() as i64;
    if lowest > highest {
        return Err(GeneratorError::InvalidRange(format!(
            "currency range [{min}, {max}] contains no whole cent"
        )));
    }

    let cents = ((value * 100.0).round() as i64).clamp(lowest, highest);
    Ok(Decimal::new(cents, 2))
}
