use bigdecimal::BigDecimal;
use num_traits::Zero;
use serde::Serialize;

use super::errors::CartError;
use crate::domain::shared::value_objects::{Price, ProductId};

/// Smallest quantity a line item may hold.
pub const MIN_QUANTITY: u32 = 1;

/// The catalog attributes a cart line carries for its product.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartProduct {
    pub id: ProductId,
    pub name: String,
    pub sale_price: BigDecimal,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartItem {
    pub product: CartProduct,
    pub quantity: u32,
}

impl CartItem {
    pub fn new(product: CartProduct, quantity: u32) -> Self {
        Self { product, quantity }
    }

    /// Unrounded `quantity × salePrice`.
    pub fn line_total(&self) -> BigDecimal {
        &self.product.sale_price * BigDecimal::from(self.quantity)
    }
}

/// Sum of every line total, rounded once at the end. An empty cart is 0.00.
pub fn total_price(items: &[CartItem]) -> Price {
    let sum = items
        .iter()
        .fold(BigDecimal::zero(), |acc, item| acc + item.line_total());
    Price::new(sum)
}

/// Rejects quantities below [`MIN_QUANTITY`].
pub fn validate_quantity(quantity: u32) -> Result<u32, CartError> {
    if quantity < MIN_QUANTITY {
        return Err(CartError::InvalidQuantity(quantity));
    }
    Ok(quantity)
}
