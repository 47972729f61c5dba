use bigdecimal::BigDecimal;

use crate::domain::cart::model::CartItem;
use crate::domain::cart::state::CartState;

/// Snapshot fetched elsewhere (e.g. right after sign-in).
pub struct SetCartItemsParams {
    pub items: Vec<CartItem>,
    pub total_quantity: usize,
    pub total_price: BigDecimal,
}

/// Synchronous seeding of the cart state; no remote call.
pub trait SetCartItemsUseCase: Send + Sync {
    fn execute(&self, params: SetCartItemsParams) -> CartState;
}
