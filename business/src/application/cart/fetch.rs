use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::cart::operation::CartOperation;
use crate::domain::cart::services::CartService;
use crate::domain::cart::state::CartState;
use crate::domain::cart::use_cases::fetch::FetchCartItemsUseCase;
use crate::domain::logger::Logger;
use crate::domain::notifier::Notifier;
use crate::domain::session::services::SessionProvider;

use super::store::CartStore;
use super::workflow::{current_user, settle};

pub struct FetchCartItemsUseCaseImpl {
    pub service: Arc<dyn CartService>,
    pub session: Arc<dyn SessionProvider>,
    pub store: Arc<CartStore>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

impl FetchCartItemsUseCaseImpl {
    async fn request(&self) -> Result<Vec<CartItem>, CartError> {
        let user_id = current_user(self.session.as_ref())?;
        Ok(self.service.list_items(&user_id).await?)
    }
}

#[async_trait]
impl FetchCartItemsUseCase for FetchCartItemsUseCaseImpl {
    async fn execute(&self) -> Result<CartState, CartError> {
        self.logger.info("Fetching cart items");

        let ticket = self.store.begin(CartOperation::Fetch);
        let outcome = self.request().await;

        settle(
            &self.store,
            self.notifier.as_ref(),
            self.logger.as_ref(),
            ticket,
            outcome,
        )
    }
}
