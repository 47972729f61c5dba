use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use mockall::mock;

use crate::domain::catalog::model::{Category, Product, ProductQuery};
use crate::domain::catalog::services::CatalogService;
use crate::domain::errors::RemoteError;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::ProductId;

mock! {
    pub CatalogApi {}

    #[async_trait]
    impl CatalogService for CatalogApi {
        async fn list_products(&self, query: &ProductQuery) -> Result<Vec<Product>, RemoteError>;
        async fn get_product(&self, id: &ProductId) -> Result<Product, RemoteError>;
        async fn list_categories(&self) -> Result<Vec<Category>, RemoteError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn product(id: &str, price: &str, sale_price: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("Product {}", id),
        description: None,
        price: BigDecimal::from_str(price).unwrap(),
        sale_price: BigDecimal::from_str(sale_price).unwrap(),
        images: vec![],
        tags: vec![],
        category: None,
        reviews: vec![],
    }
}
