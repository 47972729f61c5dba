use serde::Serialize;

use super::errors::CartFailure;
use super::model::{CartItem, total_price};
use super::operation::CartOperation;
use crate::domain::shared::value_objects::Price;

/// Client-side cart snapshot exposed to renderers.
///
/// `items`, `total_quantity` and `total_price` only change on successful
/// operations (and on [`CartEvent::ItemsSet`]); failures touch `loading`
/// and `last_error` alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    pub items: Vec<CartItem>,
    /// Number of distinct line items, not the sum of their quantities.
    pub total_quantity: usize,
    pub total_price: Price,
    pub loading: bool,
    pub last_error: Option<CartFailure>,
    #[serde(skip)]
    in_flight: usize,
}

/// Transitions the cart state goes through, one per task phase.
#[derive(Debug, Clone, PartialEq)]
pub enum CartEvent {
    Pending(CartOperation),
    Fulfilled {
        operation: CartOperation,
        items: Vec<CartItem>,
    },
    Rejected {
        operation: CartOperation,
        failure: CartFailure,
    },
    /// A response arrived after a newer request of the same kind settled.
    Superseded(CartOperation),
    /// The request was cancelled before it produced an outcome.
    Abandoned(CartOperation),
    ItemsSet {
        items: Vec<CartItem>,
        total_quantity: usize,
        total_price: Price,
    },
}

impl CartState {
    /// Applies one event and returns the next state.
    pub fn reduce(mut self, event: CartEvent) -> Self {
        match event {
            CartEvent::Pending(_) => {
                self.in_flight += 1;
            }
            CartEvent::Fulfilled { operation, items } => {
                self.settle_one();
                let items = match operation {
                    CartOperation::Clear => Vec::new(),
                    _ => items,
                };
                self.total_quantity = items.len();
                self.total_price = total_price(&items);
                self.items = items;
                self.last_error = None;
            }
            CartEvent::Rejected { failure, .. } => {
                self.settle_one();
                self.last_error = Some(failure);
            }
            CartEvent::Superseded(_) | CartEvent::Abandoned(_) => {
                self.settle_one();
            }
            CartEvent::ItemsSet {
                items,
                total_quantity,
                total_price,
            } => {
                self.items = items;
                self.total_quantity = total_quantity;
                self.total_price = total_price;
            }
        }
        self.loading = self.in_flight > 0;
        self
    }

    /// Operations that went pending and have not settled yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    fn settle_one(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }
}
