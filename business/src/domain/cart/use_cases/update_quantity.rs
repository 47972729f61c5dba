use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::state::CartState;
use crate::domain::shared::value_objects::ProductId;

/// `quantity` is the new absolute quantity, not a delta.
pub struct UpdateQuantityParams {
    pub product_id: ProductId,
    pub quantity: u32,
}

#[async_trait]
pub trait UpdateQuantityUseCase: Send + Sync {
    async fn execute(&self, params: UpdateQuantityParams) -> Result<CartState, CartError>;
}
