use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::services::CatalogService;
use crate::domain::catalog::use_cases::list_products::{ListProductsParams, ListProductsUseCase};
use crate::domain::logger::Logger;

pub struct ListProductsUseCaseImpl {
    pub service: Arc<dyn CatalogService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListProductsUseCase for ListProductsUseCaseImpl {
    async fn execute(&self, params: ListProductsParams) -> Result<Vec<Product>, CatalogError> {
        self.logger.info(&format!(
            "Listing products (search: {}, tag: {})",
            params.query.search.as_deref().unwrap_or("-"),
            params.query.tag.as_deref().unwrap_or("-")
        ));

        let products = self
            .service
            .list_products(&params.query)
            .await
            .inspect_err(|e| self.logger.error(&format!("Product listing failed: {:?}", e)))?;

        self.logger
            .info(&format!("Retrieved {} products", products.len()));
        Ok(products)
    }
}
