//! Attribute sampler: individual value generators.
//!
//! Every function takes its bounds, choice set or weights explicitly along
//! with the RNG to draw from, and returns one value per call. Invalid input
//! (low > high, an empty choice set, unusable weights) is reported as
//! [`GeneratorError::InvalidRange`](crate::GeneratorError::InvalidRange).

pub mod choice;
pub mod date;
pub mod numeric;
pub mod text;

pub use choice::{chance, one_of, weighted, WeightedChoice};
pub use date::{date_range, trailing_window};
pub use numeric::{currency_range, float_range, int_range};
pub use text::{optional, truncate_chars};
