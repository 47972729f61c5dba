use std::str::FromStr;

use bigdecimal::{BigDecimal, ParseBigDecimalError, RoundingMode};
use num_traits::Zero;
use serde::{Deserialize, Serialize, Serializer};

/// Number of decimals every [`Price`] is held at.
pub const PRICE_SCALE: i64 = 2;

/// Represents the authenticated storefront account identifier.
/// Embedded in every cart request to scope it to the user's cart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Creates a new UserId from any type that can be converted into a String.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Catalog product identifier, as issued by the product service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A monetary amount rounded half-up to two decimals.
///
/// Displays and serializes as a string with exactly two decimals
/// (`"500.00"`), which is the shape the cart summary exposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Price(BigDecimal);

impl Price {
    pub fn new(amount: BigDecimal) -> Self {
        Self(amount.with_scale_round(PRICE_SCALE, RoundingMode::HalfUp))
    }

    pub fn zero() -> Self {
        Self::new(BigDecimal::zero())
    }
}

impl Default for Price {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<BigDecimal> for Price {
    fn from(amount: BigDecimal) -> Self {
        Self::new(amount)
    }
}

impl FromStr for Price {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigDecimal::from_str(s).map(Self::new)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_user_id_from_str() {
        let user_id = UserId::new("64f1c2a9e4b0a1d2c3e4f5a6");
        assert_eq!(user_id.as_str(), "64f1c2a9e4b0a1d2c3e4f5a6");
    }

    #[test]
    fn should_display_user_id() {
        let user_id = UserId::new("test-user");
        assert_eq!(format!("{}", user_id), "test-user");
    }

    #[test]
    fn should_compare_product_ids_for_equality() {
        assert_eq!(ProductId::new("p1"), ProductId::from("p1"));
        assert_ne!(ProductId::new("p1"), ProductId::new("p2"));
    }

    #[test]
    fn should_format_whole_amount_with_two_decimals() {
        let price = Price::new(BigDecimal::from(500));
        assert_eq!(price.to_string(), "500.00");
    }

    #[test]
    fn should_round_half_up_to_two_decimals() {
        let price: Price = "19.995".parse().unwrap();
        assert_eq!(price.to_string(), "20.00");

        let price: Price = "19.994".parse().unwrap();
        assert_eq!(price.to_string(), "19.99");
    }

    #[test]
    fn should_pad_amounts_below_one() {
        let price: Price = "0.5".parse().unwrap();
        assert_eq!(price.to_string(), "0.50");

        let price: Price = "0.07".parse().unwrap();
        assert_eq!(price.to_string(), "0.07");
    }

    #[test]
    fn should_format_zero() {
        assert_eq!(Price::zero().to_string(), "0.00");
        assert_eq!(Price::default(), Price::zero());
    }

    #[test]
    fn should_format_negative_amounts() {
        let price: Price = "-3.1".parse().unwrap();
        assert_eq!(price.to_string(), "-3.10");
    }

    #[test]
    fn should_compare_prices_regardless_of_input_scale() {
        let a: Price = "250".parse().unwrap();
        let b: Price = "250.000".parse().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn should_keep_two_decimals_for_large_amounts() {
        let price: Price = "1234567.8".parse().unwrap();
        assert_eq!(price.to_string(), "1234567.80");
    }

    #[test]
    fn should_serialize_price_as_string() {
        let price: Price = "12.3".parse().unwrap();
        assert_eq!(serde_json::to_string(&price).unwrap(), "\"12.30\"");
    }
}
