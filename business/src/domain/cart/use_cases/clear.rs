use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::state::CartState;

#[async_trait]
pub trait ClearCartUseCase: Send + Sync {
    async fn execute(&self) -> Result<CartState, CartError>;
}
