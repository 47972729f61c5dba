use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::state::CartState;
use crate::domain::shared::value_objects::ProductId;

pub struct DeleteCartItemParams {
    pub product_id: ProductId,
}

#[async_trait]
pub trait DeleteCartItemUseCase: Send + Sync {
    async fn execute(&self, params: DeleteCartItemParams) -> Result<CartState, CartError>;
}
