use async_trait::async_trait;

use super::model::CartItem;
use crate::domain::errors::RemoteError;
use crate::domain::shared::value_objects::{ProductId, UserId};

/// Service port for the remote cart API.
///
/// Every mutating call answers with the authoritative, server-ordered list
/// of line items for the user's cart.
#[async_trait]
pub trait CartService: Send + Sync {
    async fn add_item(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<Vec<CartItem>, RemoteError>;

    async fn list_items(&self, user_id: &UserId) -> Result<Vec<CartItem>, RemoteError>;

    async fn update_quantity(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<Vec<CartItem>, RemoteError>;

    /// A missing list in the response is reported as an empty cart.
    async fn delete_item(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
    ) -> Result<Vec<CartItem>, RemoteError>;

    async fn delete_all(&self, user_id: &UserId) -> Result<(), RemoteError>;
}
