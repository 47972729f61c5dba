use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{CartItem, validate_quantity};
use crate::domain::cart::operation::CartOperation;
use crate::domain::cart::services::CartService;
use crate::domain::cart::state::CartState;
use crate::domain::cart::use_cases::update_quantity::{
    UpdateQuantityParams, UpdateQuantityUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::notifier::Notifier;
use crate::domain::session::services::SessionProvider;

use super::store::CartStore;
use super::workflow::{current_user, settle};

pub struct UpdateQuantityUseCaseImpl {
    pub service: Arc<dyn CartService>,
    pub session: Arc<dyn SessionProvider>,
    pub store: Arc<CartStore>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

impl UpdateQuantityUseCaseImpl {
    async fn request(&self, params: &UpdateQuantityParams) -> Result<Vec<CartItem>, CartError> {
        let quantity = validate_quantity(params.quantity)?;
        let user_id = current_user(self.session.as_ref())?;
        let items = self
            .service
            .update_quantity(&user_id, &params.product_id, quantity)
            .await?;
        Ok(items)
    }
}

#[async_trait]
impl UpdateQuantityUseCase for UpdateQuantityUseCaseImpl {
    async fn execute(&self, params: UpdateQuantityParams) -> Result<CartState, CartError> {
        self.logger.info(&format!(
            "Setting quantity of {} to {}",
            params.product_id, params.quantity
        ));

        let ticket = self.store.begin(CartOperation::UpdateQuantity);
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
