use async_trait::async_trait;

use business::domain::catalog::model::{Category, Product, ProductQuery};
use business::domain::catalog::services::CatalogService;
use business::domain::errors::RemoteError;
use business::domain::shared::value_objects::ProductId;

use crate::client::StorefrontClient;
use crate::dto::{CategoryDto, Envelope, ProductDto};
use crate::response::read_json;

pub struct CatalogServiceHttp {
    client: StorefrontClient,
}

impl CatalogServiceHttp {
    pub fn new(client: StorefrontClient) -> Self {
        Self { client }
    }

    fn query_pairs(query: &ProductQuery) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::new();
        if let Some(search) = query.search.as_deref() {
            pairs.push(("search", search));
        }
        if let Some(tag) = query.tag.as_deref() {
            pairs.push(("tag", tag));
        }
        pairs
    }
}

#[async_trait]
impl CatalogService for CatalogServiceHttp {
    async fn list_products(&self, query: &ProductQuery) -> Result<Vec<Product>, RemoteError> {
        let url = self
            .client
            .endpoint(&["products", "get", "get-all-products"])?;

        let response = self
            .client
            .client
            .get(url)
            .query(&Self::query_pairs(query))
            .send()
            .await;
        read_json::<Envelope<Vec<ProductDto>>>(response)
            .await?
            .into_inner()
            .into_iter()
            .map(ProductDto::into_domain)
            .collect()
    }

    async fn get_product(&self, id: &ProductId) -> Result<Product, RemoteError> {
        let url = self.client.endpoint(&["products", "get", id.as_str()])?;

        let response = self.client.client.get(url).send().await;
        read_json::<Envelope<ProductDto>>(response)
            .await?
            .into_inner()
            .into_domain()
    }

    async fn list_categories(&self) -> Result<Vec<Category>, RemoteError> {
        let url = self.client.endpoint(&["categories", "all-categories"])?;

        let response = self.client.client.get(url).send().await;
        Ok(read_json::<Envelope<Vec<CategoryDto>>>(response)
            .await?
            .into_inner()
            .into_iter()
            .map(CategoryDto::into_domain)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::serve_once;
    use std::time::Duration;

    fn service(base_url: reqwest::Url) -> CatalogServiceHttp {
        CatalogServiceHttp::new(StorefrontClient::new(base_url, Duration::from_secs(5)).unwrap())
    }

    #[test]
    fn should_send_no_parameters_for_full_listing() {
        assert!(CatalogServiceHttp::query_pairs(&ProductQuery::all()).is_empty());
    }

    #[test]
    fn should_send_search_parameter() {
        let query = ProductQuery::search("linen shirt").unwrap();

        assert_eq!(
            CatalogServiceHttp::query_pairs(&query),
            vec![("search", "linen shirt")]
        );
    }

    #[test]
    fn should_send_tag_parameter() {
        assert_eq!(
            CatalogServiceHttp::query_pairs(&ProductQuery::home_banners()),
            vec![("tag", "banner")]
        );
    }

    #[tokio::test]
    async fn should_list_tagged_products_from_data_envelope() {
        let (url, server) = serve_once(
            200,
            r#"{"data":[{"_id":"p1","name":"Linen Shirt","price":999,"salePrice":799,"tags":["Blockbuster"]}]}"#,
        )
        .await;

        let products = service(url)
            .list_products(&ProductQuery::blockbuster_deals())
            .await
            .unwrap();

        let captured = server.await.unwrap();
        assert_eq!(
            captured.request_line,
            "GET /api/products/get/get-all-products?tag=Blockbuster HTTP/1.1"
        );
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].discount_percentage(), Some(20));
    }

    #[tokio::test]
    async fn should_decode_bare_product_details() {
        let (url, server) =
            serve_once(200, r#"{"_id":"p1","name":"Linen Shirt","salePrice":49.5}"#).await;

        let product = service(url).get_product(&ProductId::new("p1")).await.unwrap();

        let captured = server.await.unwrap();
        assert_eq!(captured.request_line, "GET /api/products/get/p1 HTTP/1.1");
        assert_eq!(product.name, "Linen Shirt");
    }

    #[tokio::test]
    async fn should_map_missing_product_to_rejection() {
        let (url, server) = serve_once(404, r#"{"message":"Product not found"}"#).await;

        let result = service(url).get_product(&ProductId::new("nope")).await;

        server.await.unwrap();
        assert!(matches!(
            result,
            Err(RemoteError::Rejected { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn should_list_categories() {
        let (url, server) = serve_once(200, r#"[{"_id":"c1","name":"Shirts"}]"#).await;

        let categories = service(url).list_categories().await.unwrap();

        let captured = server.await.unwrap();
        assert_eq!(
            captured.request_line,
            "GET /api/categories/all-categories HTTP/1.1"
        );
        assert_eq!(categories[0].name, "Shirts");
    }
}
