//! Aggregate summary of a seeded store.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Aggregates read back from the store after a committed run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// `COUNT(*)` of customers
    pub customers: u64,
    /// `COUNT(*)` of products
    pub products: u64,
    /// `COUNT(*)` of orders
    pub orders: u64,
    /// `SUM(total_amount)` over all orders
    pub total_revenue: Decimal,
    /// Orders with status `Delivered`
    pub delivered_orders: u64,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Customers: {}", self.customers)?;
        writeln!(f, "Products: {}", self.products)?;
        writeln!(f, "Orders: {}", self.orders)?;
        writeln!(f, "Total Revenue: ${}", format_currency(self.total_revenue))?;
        write!(f, "Delivered Orders: {}", self.delivered_orders)
    }
}

/// Format an amount with two decimals and comma thousands separators.
pub fn format_currency(amount: Decimal) -> String {
    let formatted = format!("{:.2}", amount.round_dp(2));
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}{grouped}.{fraction}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(Decimal::new(0, 0)), "0.00");
        assert_eq!(format_currency(Decimal::new(5000, 2)), "50.00");
        assert_eq!(format_currency(Decimal::new(123456789, 2)), "1,234,567.89");
        assert_eq!(format_currency(Decimal::new(100000000, 2)), "1,000,000.00");
        assert_eq!(format_currency(Decimal::new(-123456, 2)), "-1,234.56");
    }

    #[test]
    fn test_display() {
        let summary = RunSummary {
            customers: 5,
            products: 3,
            orders: 10,
            total_revenue: Decimal::new(1234567, 2),
            delivered_orders: 7,
        };

        assert_eq!(
            summary.to_string(),
            "Customers: 5\nProducts: 3\nOrders: 10\nTotal Revenue: $12,345.67\nDelivered Orders: 7"
        );
    }
}
