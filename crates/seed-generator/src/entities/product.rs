//! Product generator.

use crate::error::GeneratorError;
use crate::generators::{chance, currency_range, int_range, one_of, optional, text};
use rand::Rng;
use seed_core::{Category, Product, DESCRIPTION_MAX_CHARS, PRODUCT_NAME_MAX_CHARS};

/// Inclusive price bounds.
pub const PRICE_RANGE: (f64, f64) = (10.0, 2000.0);

/// Inclusive stock bounds.
pub const STOCK_RANGE: (i64, i64) = (0, 500);

/// Probability that a product name carries a company suffix.
const COMPANY_SUFFIX_PROBABILITY: f64 = 0.5;

/// Probability that a product has a description.
const DESCRIPTION_PROBABILITY: f64 = 0.7;

const FALLBACK_TERMS: &[&str] = &["Product"];

/// Base name terms for a category, looked up by category label.
///
/// Unknown labels fall back to a generic "Product".
pub fn base_terms(category: &str) -> &'static [&'static str] {
    match category {
        "Electronics" => &[
            "Laptop",
            "Monitor",
            "Keyboard",
            "Mouse",
            "Webcam",
            "Headphones",
            "Speaker",
        ],
        "Software" => &[
            "Project Management Tool",
            "Analytics Platform",
            "CRM System",
            "IDE License",
        ],
        "Hardware" => &[
            "Server",
            "Router",
            "Switch",
            "Cable",
            "Adapter",
            "Storage Drive",
        ],
        "Services" => &["Consulting", "Training", "Support Plan", "Maintenance"],
        "Accessories" => &["Case", "Bag", "Stand", "Mount", "Charger"],
        "Books" => &["Programming Guide", "Technical Manual", "Design Book"],
        _ => FALLBACK_TERMS,
    }
}

/// Generate one product.
pub fn generate_product<R: Rng>(rng: &mut R) -> Result<Product, GeneratorError> {
    let category = *one_of(rng, &Category::ALL)?;
    let base = *one_of(rng, base_terms(category.as_str()))?;

    let name = if chance(rng, COMPANY_SUFFIX_PROBABILITY)? {
        format!("{base} {}", text::company_name(rng))
    } else {
        base.to_string()
    };

    let stock_quantity = int_range(rng, STOCK_RANGE.0, STOCK_RANGE.1)? as i32;

    Ok(Product {
        name: text::truncate_chars(&name, PRODUCT_NAME_MAX_CHARS),
        category,
        price: currency_range(rng, PRICE_RANGE.0, PRICE_RANGE.1)?,
        stock_quantity,
        description: optional(rng, DESCRIPTION_PROBABILITY, |rng| {
            text::paragraph(rng, DESCRIPTION_MAX_CHARS)
        })?,
    })
}

/// Generate a batch of `count` products.
pub fn generate_products<R: Rng>(
    rng: &mut R,
    count: usize,
) -> Result<Vec<Product>, GeneratorError> {
    (0..count).map(|_| generate_product(rng)).collect()
}
