use serde::Serialize;

/// The asynchronous cart operations, each with its own request sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CartOperation {
    Add,
    Fetch,
    UpdateQuantity,
    DeleteItem,
    Clear,
}

impl CartOperation {
    /// Message reported when the server gives no usable reason.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            CartOperation::Add => "Failed to add item to cart",
            CartOperation::Fetch => "Failed to fetch cart items",
            CartOperation::UpdateQuantity => "Failed to update quantity",
            CartOperation::DeleteItem => "Failed to delete cart item",
            CartOperation::Clear => "Failed to clear cart",
        }
    }

    /// User-visible confirmation, for the operations that announce success.
    pub fn success_message(&self) -> Option<&'static str> {
        match self {
            CartOperation::Add => Some("Product added to cart successfully!"),
            CartOperation::DeleteItem => Some("Product removed from cart"),
            CartOperation::Clear => Some("Cart cleared"),
            CartOperation::Fetch | CartOperation::UpdateQuantity => None,
        }
    }
}

impl std::fmt::Display for CartOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CartOperation::Add => write!(f, "add"),
            CartOperation::Fetch => write!(f, "fetch"),
            CartOperation::UpdateQuantity => write!(f, "update_quantity"),
            CartOperation::DeleteItem => write!(f, "delete_item"),
            CartOperation::Clear => write!(f, "clear"),
        }
    }
}
