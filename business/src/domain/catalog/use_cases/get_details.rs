use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::shared::value_objects::ProductId;

pub struct GetProductDetailsParams {
    pub id: ProductId,
}

#[async_trait]
pub trait GetProductDetailsUseCase: Send + Sync {
    async fn execute(&self, params: GetProductDetailsParams) -> Result<Product, CatalogError>;
}
