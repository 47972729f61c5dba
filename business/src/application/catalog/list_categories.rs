use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Category;
use crate::domain::catalog::services::CatalogService;
use crate::domain::catalog::use_cases::list_categories::ListCategoriesUseCase;
use crate::domain::logger::Logger;

pub struct ListCategoriesUseCaseImpl {
    pub service: Arc<dyn CatalogService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListCategoriesUseCase for ListCategoriesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Category>, CatalogError> {
        self.logger.info("Listing categories");
        let categories = self.service.list_categories().await?;
        self.logger
            .info(&format!("Retrieved {} categories", categories.len()));
        Ok(categories)
    }
}
