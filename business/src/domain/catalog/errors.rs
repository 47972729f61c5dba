#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.product_not_found")]
    NotFound,
    #[error("catalog.search_empty")]
    SearchEmpty,
    #[error("catalog.invalid_variant")]
    InvalidVariant(String),
    #[error("catalog.remote")]
    Remote(#[from] crate::domain::errors::RemoteError),
}
