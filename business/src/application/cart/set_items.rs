use std::sync::Arc;

use crate::domain::cart::state::CartState;
use crate::domain::cart::use_cases::set_items::{SetCartItemsParams, SetCartItemsUseCase};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::Price;

use super::store::CartStore;

pub struct SetCartItemsUseCaseImpl {
    pub store: Arc<CartStore>,
    pub logger: Arc<dyn Logger>,
}

impl SetCartItemsUseCase for SetCartItemsUseCaseImpl {
    fn execute(&self, params: SetCartItemsParams) -> CartState {
        let total_price = Price::new(params.total_price);
        self.logger.debug(&format!(
            "Seeding cart with {} lines, total {}",
            params.total_quantity, total_price
        ));
        self.store
            .set_items(params.items, params.total_quantity, total_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::cart::test_support::*;
    use bigdecimal::BigDecimal;
    use std::str::FromStr;

    #[test]
    fn should_overwrite_state_and_round_total() {
        let store = Arc::new(CartStore::new());
        let use_case = SetCartItemsUseCaseImpl {
            store: store.clone(),
            logger: mock_logger(),
        };

        let state = use_case.execute(SetCartItemsParams {
            items: vec![item("p1", "33.333", 3)],
            total_quantity: 1,
            total_price: BigDecimal::from_str("99.999").unwrap(),
        });

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.total_quantity, 1);
        assert_eq!(state.total_price.to_string(), "100.00");
        assert_eq!(store.snapshot(), state);
    }

    #[test]
    fn should_not_touch_loading() {
        let store = Arc::new(CartStore::new());
        let _ticket = store.begin(crate::domain::cart::operation::CartOperation::Fetch);
        let use_case = SetCartItemsUseCaseImpl {
            store: store.clone(),
            logger: mock_logger(),
        };

        let state = use_case.execute(SetCartItemsParams {
            items: vec![],
            total_quantity: 0,
            total_price: BigDecimal::from(0),
        });

        assert!(state.loading);
    }
}
