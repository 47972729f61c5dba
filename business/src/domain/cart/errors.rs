use serde::Serialize;

use super::operation::CartOperation;
use crate::domain::errors::RemoteError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CartError {
    #[error("cart.missing_user")]
    MissingUser,
    #[error("cart.invalid_quantity")]
    InvalidQuantity(u32),
    #[error("cart.remote")]
    Remote(#[from] RemoteError),
}

/// Failure payload kept in the cart state for diagnostics and display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartFailure {
    pub message: String,
}

impl CartFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Normalizes any cart error to `{message}`, preferring the server's
    /// own message over the operation fallback.
    pub fn from_error(error: &CartError, operation: CartOperation) -> Self {
        let message = match error {
            CartError::Remote(remote) => remote.server_message(),
            CartError::MissingUser | CartError::InvalidQuantity(_) => None,
        };
        Self::new(message.unwrap_or(operation.fallback_message()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_server_message_when_present() {
        let error = CartError::Remote(RemoteError::rejected(
            409,
            Some("Product is out of stock".to_string()),
        ));

        let failure = CartFailure::from_error(&error, CartOperation::Add);

        assert_eq!(failure.message, "Product is out of stock");
    }

    #[test]
    fn should_fall_back_to_operation_message_on_transport_failure() {
        let error = CartError::Remote(RemoteError::transport("connection reset"));

        let failure = CartFailure::from_error(&error, CartOperation::Fetch);

        assert_eq!(failure.message, "Failed to fetch cart items");
    }

    #[test]
    fn should_fall_back_when_user_missing() {
        let failure = CartFailure::from_error(&CartError::MissingUser, CartOperation::Clear);

        assert_eq!(failure.message, "Failed to clear cart");
    }

    #[test]
    fn should_fall_back_when_rejected_without_message() {
        let error = CartError::Remote(RemoteError::rejected(500, None));

        let failure = CartFailure::from_error(&error, CartOperation::DeleteItem);

        assert_eq!(failure.message, "Failed to delete cart item");
    }
}
