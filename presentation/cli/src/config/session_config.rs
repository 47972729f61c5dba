use std::env;

use business::domain::shared::value_objects::UserId;

/// Account the CLI acts as when `--user` is not given
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    pub user_id: Option<UserId>,
}

impl SessionConfig {
    /// Environment variables:
    /// - STOREFRONT_USER_ID: Authenticated account id (optional)
    pub fn from_env() -> Self {
        Self::from_value(env::var("STOREFRONT_USER_ID").ok())
    }

    fn from_value(user_id: Option<String>) -> Self {
        let user_id = user_id
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(UserId::new);

        Self { user_id }
    }
}
