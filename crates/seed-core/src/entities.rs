//! Entity records and their categorical attributes.
//!
//! Records are plain values. The only cross-entity reference is
//! [`Order::customer_id`], which holds an identity assigned by the store when
//! the customer batch was inserted.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Store-assigned customer identity (`customers.id`).
///
/// Wide enough for both `SERIAL` and `BIGSERIAL` keys.
pub type CustomerId = i64;

/// Maximum product name length, in characters.
pub const PRODUCT_NAME_MAX_CHARS: usize = 100;

/// Maximum product description length, in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 200;

/// Customer segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Segment {
    #[serde(rename = "SMB")]
    Smb,
    Enterprise,
    Individual,
}

impl Segment {
    pub const ALL: [Segment; 3] = [Segment::Smb, Segment::Enterprise, Segment::Individual];

    pub fn as_str(&self) -> &'static str {
        match self {
            Segment::Smb => "SMB",
            Segment::Enterprise => "Enterprise",
            Segment::Individual => "Individual",
        }
    }
}

/// Customer country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Country {
    #[serde(rename = "USA")]
    Usa,
    #[serde(rename = "UK")]
    Uk,
    Canada,
    Germany,
    France,
    Australia,
    India,
    Singapore,
}

impl Country {
    pub const ALL: [Country; 8] = [
        Country::Usa,
        Country::Uk,
        Country::Canada,
        Country::Germany,
        Country::France,
        Country::Australia,
        Country::India,
        Country::Singapore,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Country::Usa => "USA",
            Country::Uk => "UK",
            Country::Canada => "Canada",
            Country::Germany => "Germany",
            Country::France => "France",
            Country::Australia => "Australia",
            Country::India => "India",
            Country::Singapore => "Singapore",
        }
    }
}

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Electronics,
    Software,
    Hardware,
    Services,
    Accessories,
    Books,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Electronics,
        Category::Software,
        Category::Hardware,
        Category::Services,
        Category::Accessories,
        Category::Books,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Software => "Software",
            Category::Hardware => "Hardware",
            Category::Services => "Services",
            Category::Accessories => "Accessories",
            Category::Books => "Books",
        }
    }
}

/// Order fulfilment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OrderStatus {
    Pending,
    Delivered,
    Cancelled,
    Processing,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
        OrderStatus::Processing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Processing => "Processing",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(Segment, Country, Category, OrderStatus);

/// A synthetic customer, before the store assigns its identity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub segment: Segment,
    pub country: Country,
}

/// A synthetic catalog product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    /// At most [`PRODUCT_NAME_MAX_CHARS`] characters.
    pub name: String,
    pub category: Category,
    /// Scale 2, within `[10.00, 2000.00]`.
    pub price: Decimal,
    pub stock_quantity: i32,
    /// At most [`DESCRIPTION_MAX_CHARS`] characters when present.
    pub description: Option<String>,
}

/// A synthetic single-line order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub customer_id: CustomerId,
    pub order_date: NaiveDate,
    /// Scale 2, within `[50.00, 5000.00]`.
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub shipping_address: Option<String>,
}
