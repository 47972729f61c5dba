use crate::domain::shared::value_objects::UserId;

/// Read access to the authenticated user, owned by the auth layer.
pub trait SessionProvider: Send + Sync {
    fn current_user(&self) -> Option<UserId>;
}
