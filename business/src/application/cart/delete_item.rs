use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::cart::operation::CartOperation;
use crate::domain::cart::services::CartService;
use crate::domain::cart::state::CartState;
use crate::domain::cart::use_cases::delete_item::{DeleteCartItemParams, DeleteCartItemUseCase};
use crate::domain::logger::Logger;
use crate::domain::notifier::Notifier;
use crate::domain::session::services::SessionProvider;

use super::store::CartStore;
use super::workflow::{current_user, settle};

pub struct DeleteCartItemUseCaseImpl {
    pub service: Arc<dyn CartService>,
    pub session: Arc<dyn SessionProvider>,
    pub store: Arc<CartStore>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

impl DeleteCartItemUseCaseImpl {
    async fn request(&self, params: &DeleteCartItemParams) -> Result<Vec<CartItem>, CartError> {
        let user_id = current_user(self.session.as_ref())?;
        Ok(self
            .service
            .delete_item(&user_id, &params.product_id)
            .await?)
    }
}

#[async_trait]
impl DeleteCartItemUseCase for DeleteCartItemUseCaseImpl {
    async fn execute(&self, params: DeleteCartItemParams) -> Result<CartState, CartError> {
        self.logger
            .info(&format!("Removing product {} from cart", params.product_id));

        let ticket = self.store.begin(CartOperation::DeleteItem);
        let outcome = self.request(&params).await;

        settle(
            &self.store,
            self.notifier.as_ref(),
            self.logger.as_ref(),
            ticket,
            outcome,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::cart::test_support::*;
    use crate::domain::errors::RemoteError;
    use crate::domain::shared::value_objects::{Price, ProductId};
    use std::str::FromStr;

    fn seeded_store() -> Arc<CartStore> {
        let store = Arc::new(CartStore::new());
        store.set_items(
            vec![item("p1", "10", 1), item("p2", "15", 2)],
            2,
            Price::from_str("40").unwrap(),
        );
        store
    }

    fn params() -> DeleteCartItemParams {
        DeleteCartItemParams {
            product_id: ProductId::new("p1"),
        }
    }

    #[tokio::test]
    async fn should_keep_remaining_lines_and_recompute_total() {
        let mut service = MockCartApi::new();
        service
            .expect_delete_item()
            .withf(|user_id, product_id| {
                user_id.as_str() == "test-user-id" && product_id.as_str() == "p1"
            })
            .returning(|_, _| Ok(vec![item("p2", "15", 2)]));
        let mut notifier = MockNotify::new();
        notifier
            .expect_success()
            .withf(|message| message == "Product removed from cart")
            .times(1)
            .returning(|_| ());

        let use_case = DeleteCartItemUseCaseImpl {
            service: Arc::new(service),
            session: signed_in_session(),
            store: seeded_store(),
            notifier: Arc::new(notifier),
            logger: mock_logger(),
        };
        let state = use_case.execute(params()).await.unwrap();

        assert_eq!(state.total_quantity, 1);
        assert_eq!(state.total_price.to_string(), "30.00");
    }

    #[tokio::test]
    async fn should_empty_cart_when_server_returns_no_list() {
        let mut service = MockCartApi::new();
        service.expect_delete_item().returning(|_, _| Ok(vec![]));

        let use_case = DeleteCartItemUseCaseImpl {
            service: Arc::new(service),
            session: signed_in_session(),
            store: seeded_store(),
            notifier: quiet_notifier(),
            logger: mock_logger(),
        };
        let state = use_case.execute(params()).await.unwrap();

        assert!(state.items.is_empty());
        assert_eq!(state.total_quantity, 0);
        assert_eq!(state.total_price.to_string(), "0.00");
    }

    #[tokio::test]
    async fn should_leave_state_unchanged_on_failure() {
        let store = seeded_store();
        let before = store.snapshot();
        let mut service = MockCartApi::new();
        service
            .expect_delete_item()
            .returning(|_, _| Err(RemoteError::rejected(404, None)));

        let use_case = DeleteCartItemUseCaseImpl {
            service: Arc::new(service),
            session: signed_in_session(),
            store: store.clone(),
            notifier: quiet_notifier(),
            logger: mock_logger(),
        };
        let result = use_case.execute(params()).await;

        assert!(result.is_err());
        let after = store.snapshot();
        assert_eq!(after.items, before.items);
        assert_eq!(after.total_price, before.total_price);
        assert_eq!(
            after.last_error.map(|f| f.message),
            Some("Failed to delete cart item".to_string())
        );
    }
}
