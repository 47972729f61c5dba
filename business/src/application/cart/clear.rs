use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::cart::operation::CartOperation;
use crate::domain::cart::services::CartService;
use crate::domain::cart::state::CartState;
use crate::domain::cart::use_cases::clear::ClearCartUseCase;
use crate::domain::logger::Logger;
use crate::domain::notifier::Notifier;
use crate::domain::session::services::SessionProvider;

use super::store::CartStore;
use super::workflow::{current_user, settle};

pub struct ClearCartUseCaseImpl {
    pub service: Arc<dyn CartService>,
    pub session: Arc<dyn SessionProvider>,
    pub store: Arc<CartStore>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

impl ClearCartUseCaseImpl {
    async fn request(&self) -> Result<Vec<CartItem>, CartError> {
        let user_id = current_user(self.session.as_ref())?;
        self.service.delete_all(&user_id).await?;
        Ok(Vec::new())
    }
}

#[async_trait]
impl ClearCartUseCase for ClearCartUseCaseImpl {
    async fn execute(&self) -> Result<CartState, CartError> {
        self.logger.info("Clearing cart");

        let ticket = self.store.begin(CartOperation::Clear);
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
