use async_trait::async_trait;

use business::domain::cart::model::CartItem;
use business::domain::cart::services::CartService;
use business::domain::errors::RemoteError;
use business::domain::shared::value_objects::{ProductId, UserId};

use crate::client::StorefrontClient;
use crate::dto::{AddToCartProduct, AddToCartRequest, CartProductsResponse, UpdateQuantityRequest};
use crate::response::{discard_body, read_json};

pub struct CartServiceHttp {
    client: StorefrontClient,
}

impl CartServiceHttp {
    pub fn new(client: StorefrontClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CartService for CartServiceHttp {
    async fn add_item(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<Vec<CartItem>, RemoteError> {
        let url = self.client.endpoint(&["cart", "add-to-cart"])?;
        let body = AddToCartRequest {
            user: user_id.as_str(),
            product: AddToCartProduct {
                id: product_id.as_str(),
                quantity,
            },
        };

        let response = self.client.client.post(url).json(&body).send().await;
        read_json::<CartProductsResponse>(response)
            .await?
            .into_domain()
    }

    async fn list_items(&self, user_id: &UserId) -> Result<Vec<CartItem>, RemoteError> {
        let url = self.client.endpoint(&["cart"])?;

        let response = self
            .client
            .client
            .get(url)
            .query(&[("user", user_id.as_str())])
            .send()
            .await;
        read_json::<CartProductsResponse>(response)
            .await?
            .into_domain()
    }

    async fn update_quantity(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<Vec<CartItem>, RemoteError> {
        let url = self.client.endpoint(&["cart", "update-quantity"])?;
        let body = UpdateQuantityRequest {
            user: user_id.as_str(),
            product: product_id.as_str(),
            quantity,
        };

        let response = self.client.client.put(url).json(&body).send().await;
        read_json::<CartProductsResponse>(response)
            .await?
            .into_domain()
    }

    async fn delete_item(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
    ) -> Result<Vec<CartItem>, RemoteError> {
        let url = self.client.endpoint(&[
            "cart",
            "delete-item",
            user_id.as_str(),
            product_id.as_str(),
        ])?;

        let response = self.client.client.delete(url).send().await;
        read_json::<CartProductsResponse>(response)
            .await?
            .into_domain()
    }

    async fn delete_all(&self, user_id: &UserId) -> Result<(), RemoteError> {
        let url = self
            .client
            .endpoint(&["cart", "delete-all", user_id.as_str()])?;

        let response = self.client.client.delete(url).send().await;
        discard_body(response).await
    }
}
