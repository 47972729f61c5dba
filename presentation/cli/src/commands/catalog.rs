use std::sync::Arc;

use clap::Subcommand;
use serde_json::{Value, json};

use business::domain::catalog::model::ProductQuery;
use business::domain::catalog::use_cases::get_details::{
    GetProductDetailsParams, GetProductDetailsUseCase,
};
use business::domain::catalog::use_cases::list_categories::ListCategoriesUseCase;
use business::domain::catalog::use_cases::list_products::{
    ListProductsParams, ListProductsUseCase,
};
use business::domain::shared::value_objects::ProductId;

#[derive(Debug, Subcommand)]
pub enum CatalogCommand {
    /// List every product
    Products,
    /// List the Blockbuster deals collection
    Deals,
    /// List the home page banner collection
    Banners,
    /// Search products by text
    Search { text: String },
    /// Show one product with its discount and average rating
    Show { product_id: String },
    /// List product categories
    Categories,
}

pub struct CatalogHandler {
    list_products_use_case: Arc<dyn ListProductsUseCase>,
    get_details_use_case: Arc<dyn GetProductDetailsUseCase>,
    list_categories_use_case: Arc<dyn ListCategoriesUseCase>,
}

impl CatalogHandler {
    pub fn new(
        list_products_use_case: Arc<dyn ListProductsUseCase>,
        get_details_use_case: Arc<dyn GetProductDetailsUseCase>,
        list_categories_use_case: Arc<dyn ListCategoriesUseCase>,
    ) -> Self {
        Self {
            list_products_use_case,
            get_details_use_case,
            list_categories_use_case,
        }
    }

    pub async fn run(&self, command: CatalogCommand) -> anyhow::Result<Value> {
        let value = match command {
            CatalogCommand::Products => self.list(ProductQuery::all()).await?,
            CatalogCommand::Deals => self.list(ProductQuery::blockbuster_deals()).await?,
            CatalogCommand::Banners => self.list(ProductQuery::home_banners()).await?,
            CatalogCommand::Search { text } => self.list(ProductQuery::search(&text)?).await?,
            CatalogCommand::Show { product_id } => {
                let product = self
                    .get_details_use_case
                    .execute(GetProductDetailsParams {
                        id: ProductId::new(product_id),
                    })
                    .await?;
                let mut value = serde_json::to_value(&product)?;
                if let Value::Object(fields) = &mut value {
                    fields.insert(
                        "discountPercentage".to_string(),
                        json!(product.discount_percentage()),
                    );
                    fields.insert(
                        "averageRating".to_string(),
                        json!(product.average_rating()),
                    );
                }
                value
            }
            CatalogCommand::Categories => {
                serde_json::to_value(self.list_categories_use_case.execute().await?)?
            }
        };
        Ok(value)
    }

    async fn list(&self, query: ProductQuery) -> anyhow::Result<Value> {
        let products = self
            .list_products_use_case
            .execute(ListProductsParams { query })
            .await?;
        Ok(serde_json::to_value(products)?)
    }
}
