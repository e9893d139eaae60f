//! Order generator.

use crate::error::GeneratorError;
use crate::generators::{
    currency_range, date_range, one_of, optional, text, trailing_window, WeightedChoice,
};
use chrono::NaiveDate;
use rand::Rng;
use seed_core::{CustomerId, Order, OrderStatus};

/// Inclusive order total bounds.
pub const TOTAL_AMOUNT_RANGE: (f64, f64) = (50.0, 5000.0);

/// Orders are dated within this many days before the reference date.
pub const ORDER_WINDOW_DAYS: u64 = 365;

/// Status distribution: most orders are delivered.
pub const ORDER_STATUS_WEIGHTS: [(OrderStatus, f64); 4] = [
    (OrderStatus::Delivered, 0.7),
    (OrderStatus::Pending, 0.1),
    (OrderStatus::Cancelled, 0.1),
    (OrderStatus::Processing, 0.1),
];

/// Probability that an order has a shipping address.
const SHIPPING_ADDRESS_PROBABILITY: f64 = 0.8;

/// Generate a batch of `count` orders for the given customers.
///
/// Each order picks its customer uniformly from `customer_ids`, so one
/// customer may own many orders. `order_date` falls within the
/// [`ORDER_WINDOW_DAYS`] days ending at `reference_date`.
pub fn generate_orders<R: Rng>(
    rng: &mut R,
    customer_ids: &[CustomerId],
    count: usize,
    reference_date: NaiveDate,
) -> Result<Vec<Order>, GeneratorError> {
    if customer_ids.is_empty() {
        return Err(GeneratorError::MissingDependency(
            "orders need at least one customer identity".to_string(),
        ));
    }

    let statuses = WeightedChoice::new(ORDER_STATUS_WEIGHTS)?;
    let (start, end) = trailing_window(reference_date, ORDER_WINDOW_DAYS)?;

    (0..count)
        .map(|_| -> Result<Order, GeneratorError> {
            Ok(Order {
                customer_id: *one_of(rng, customer_ids)?,
                order_date: date_range(rng, start, end)?,
                total_amount: currency_range(rng, TOTAL_AMOUNT_RANGE.0, TOTAL_AMOUNT_RANGE.1)?,
                status: *statuses.sample(rng),
                shipping_address: optional(rng, SHIPPING_ADDRESS_PROBABILITY, text::street_address)?,
            })
        })
        .collect()
}
