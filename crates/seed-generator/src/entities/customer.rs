//! Customer generator.

use crate::error::GeneratorError;
use crate::generators::{one_of, text};
use rand::Rng;
use seed_core::{Country, Customer, Segment};

/// Generate one customer.
pub fn generate_customer<R: Rng>(rng: &mut R) -> Result<Customer, GeneratorError> {
    Ok(Customer {
        name: text::person_name(rng),
        email: text::email(rng),
        segment: *one_of(rng, &Segment::ALL)?,
        country: *one_of(rng, &Country::ALL)?,
    })
}

/// Generate a batch of `count` customers.
pub fn generate_customers<R: Rng>(
    rng: &mut R,
    count: usize,
) -> Result<Vec<Customer>, GeneratorError> {
    (0..count).map(|_| generate_customer(rng)).collect()
}
