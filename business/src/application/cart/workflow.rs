use crate::domain::cart::errors::{CartError, CartFailure};
use crate::domain::cart::model::CartItem;
use crate::domain::cart::state::CartState;
use crate::domain::logger::Logger;
use crate::domain::notifier::Notifier;
use crate::domain::session::services::SessionProvider;
use crate::domain::shared::value_objects::UserId;

use super::store::{CartStore, RequestTicket, Settlement};

pub(crate) fn current_user(session: &dyn SessionProvider) -> Result<UserId, CartError> {
    session.current_user().ok_or(CartError::MissingUser)
}

/// Settles a finished request into the store, then logs and notifies.
///
/// Stale outcomes are logged but neither notified nor surfaced as errors
/// beyond the returned value.
pub(crate) fn settle(
    store: &CartStore,
    notifier: &dyn Notifier,
    logger: &dyn Logger,
    ticket: RequestTicket,
    outcome: Result<Vec<CartItem>, CartError>,
) -> Result<CartState, CartError> {
    let operation = ticket.operation();
    let sequence = ticket.sequence();

    match outcome {
        Ok(items) => match store.fulfill(ticket, items) {
            Settlement::Applied(state) => {
                logger.info(&format!(
                    "Cart {} #{} applied: {} lines, total {}",
                    operation, sequence, state.total_quantity, state.total_price
                ));
                if let Some(message) = operation.success_message() {
                    notifier.success(message);
                }
                Ok(state)
            }
            Settlement::Superseded(state) => {
                logger.warn(&format!(
                    "Discarding stale cart {} response #{}",
                    operation, sequence
                ));
                Ok(state)
            }
        },
        Err(error) => {
            let failure = CartFailure::from_error(&error, operation);
            logger.error(&format!(
                "Cart {} #{} failed: {} ({:?})",
                operation, sequence, failure.message, error
            ));
            match store.reject(ticket, failure.clone()) {
                Settlement::Applied(_) => notifier.error(&failure.message),
                Settlement::Superseded(_) => logger.warn(&format!(
                    "Ignoring stale cart {} failure #{}",
                    operation, sequence
                )),
            }
            Err(error)
        }
    }
}
