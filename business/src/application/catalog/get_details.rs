use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::services::CatalogService;
use crate::domain::catalog::use_cases::get_details::{
    GetProductDetailsParams, GetProductDetailsUseCase,
};
use crate::domain::errors::RemoteError;
use crate::domain::logger::Logger;

pub struct GetProductDetailsUseCaseImpl {
    pub service: Arc<dyn CatalogService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductDetailsUseCase for GetProductDetailsUseCaseImpl {
    async fn execute(&self, params: GetProductDetailsParams) -> Result<Product, CatalogError> {
        self.logger
            .info(&format!("Getting product details: {}", params.id));

        self.service
            .get_product(&params.id)
            .await
            .map_err(|e| match e {
                RemoteError::Rejected { status: 404, .. } => CatalogError::NotFound,
                other => {
                    self.logger
                        .error(&format!("Product details failed: {:?}", other));
                    CatalogError::Remote(other)
                }
            })
    }
}
