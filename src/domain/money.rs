//! Monetary types for vehicle and option pricing.

use rust_decimal::Decimal;

/// Price represented as a Decimal so sums of list prices stay exact.
pub type Price = Decimal;

/// Format a price the way the configurator displays it: a leading `$`,
/// no thousands separators, no forced decimal places.
#[must_use]
pub fn format_price(price: Price) -> String {
    format!("${price}")
}
