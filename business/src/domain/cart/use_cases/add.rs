use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::state::CartState;
use crate::domain::shared::value_objects::ProductId;

pub struct AddToCartParams {
    pub product_id: ProductId,
    pub quantity: u32,
}

#[async_trait]
pub trait AddToCartUseCase: Send + Sync {
    async fn execute(&self, params: AddToCartParams) -> Result<CartState, CartError>;
}
