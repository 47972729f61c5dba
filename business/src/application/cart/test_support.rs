use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use mockall::mock;

use crate::application::session::store::SessionStore;
use crate::domain::cart::model::{CartItem, CartProduct};
use crate::domain::cart::services::CartService;
use crate::domain::errors::RemoteError;
use crate::domain::logger::Logger;
use crate::domain::notifier::Notifier;
use crate::domain::shared::value_objects::{ProductId, UserId};

mock! {
    pub CartApi {}

    #[async_trait]
    impl CartService for CartApi {
        async fn add_item(&self, user_id: &UserId, product_id: &ProductId, quantity: u32) -> Result<Vec<CartItem>, RemoteError>;
        async fn list_items(&self, user_id: &UserId) -> Result<Vec<CartItem>, RemoteError>;
        async fn update_quantity(&self, user_id: &UserId, product_id: &ProductId, quantity: u32) -> Result<Vec<CartItem>, RemoteError>;
        async fn delete_item(&self, user_id: &UserId, product_id: &ProductId) -> Result<Vec<CartItem>, RemoteError>;
        async fn delete_all(&self, user_id: &UserId) -> Result<(), RemoteError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

mock! {
    pub Notify {}

    impl Notifier for Notify {
        fn success(&self, message: &str);
        fn error(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn quiet_notifier() -> Arc<dyn Notifier> {
    let mut notifier = MockNotify::new();
    notifier.expect_success().returning(|_| ());
    notifier.expect_error().returning(|_| ());
    Arc::new(notifier)
}

pub fn test_user_id() -> UserId {
    UserId::new("test-user-id")
}

pub fn signed_in_session() -> Arc<SessionStore> {
    Arc::new(SessionStore::signed_in(test_user_id()))
}

pub fn item(id: &str, sale_price: &str, quantity: u32) -> CartItem {
    CartItem::new(
        CartProduct {
            id: ProductId::new(id),
            name: format!("Product {}", id),
            sale_price: BigDecimal::from_str(sale_price).unwrap(),
            image: None,
        },
        quantity,
    )
}

/// Cart API whose requests never complete.
pub struct HangingCartApi;

#[async_trait]
impl CartService for HangingCartApi {
    async fn add_item(&self, _: &UserId, _: &ProductId, _: u32) -> Result<Vec<CartItem>, RemoteError> {
        std::future::pending().await
    }
    async fn list_items(&self, _: &UserId) -> Result<Vec<CartItem>, RemoteError> {
        std::future::pending().await
    }
    async fn update_quantity(&self, _: &UserId, _: &ProductId, _: u32) -> Result<Vec<CartItem>, RemoteError> {
        std::future::pending().await
    }
    async fn delete_item(&self, _: &UserId, _: &ProductId) -> Result<Vec<CartItem>, RemoteError> {
        std::future::pending().await
    }
    async fn delete_all(&self, _: &UserId) -> Result<(), RemoteError> {
        std::future::pending().await
    }
}
