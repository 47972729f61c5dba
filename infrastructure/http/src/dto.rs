use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use business::domain::cart::model::{CartItem, CartProduct};
use business::domain::catalog::model::{Category, Product};
use business::domain::catalog::selection::Review;
use business::domain::errors::RemoteError;
use business::domain::shared::value_objects::ProductId;

/// Responses either come wrapped as `{data: ...}` or bare.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } | Envelope::Bare(data) => data,
        }
    }
}

/// Prices arrive as JSON numbers, occasionally as strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DecimalValue {
    Number(serde_json::Number),
    Text(String),
}

impl DecimalValue {
    pub fn to_decimal(&self) -> Result<BigDecimal, RemoteError> {
        let text = match self {
            DecimalValue::Number(number) => number.to_string(),
            DecimalValue::Text(text) => text.trim().to_string(),
        };
        BigDecimal::from_str(&text).map_err(|_| RemoteError::invalid_response())
    }
}

// Cart

#[derive(Serialize)]
pub struct AddToCartRequest<'a> {
    pub user: &'a str,
    pub product: AddToCartProduct<'a>,
}

#[derive(Serialize)]
pub struct AddToCartProduct<'a> {
    pub id: &'a str,
    pub quantity: u32,
}

#[derive(Serialize)]
pub struct UpdateQuantityRequest<'a> {
    pub user: &'a str,
    pub product: &'a str,
    pub quantity: u32,
}

#[derive(Deserialize)]
pub struct CartProductsResponse {
    #[serde(default)]
    pub products: Option<Vec<CartLineDto>>,
}

impl CartProductsResponse {
    /// A null or absent list is an empty cart.
    pub fn into_domain(self) -> Result<Vec<CartItem>, RemoteError> {
        self.products
            .unwrap_or_default()
            .into_iter()
            .map(CartLineDto::into_domain)
            .collect()
    }
}

#[derive(Deserialize)]
pub struct CartLineDto {
    pub product: CartProductDto,
    pub quantity: u32,
}

impl CartLineDto {
    pub fn into_domain(self) -> Result<CartItem, RemoteError> {
        Ok(CartItem::new(self.product.into_domain()?, self.quantity))
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartProductDto {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, alias = "title")]
    pub name: String,
    pub sale_price: DecimalValue,
    #[serde(default)]
    pub images: Vec<String>,
}

impl CartProductDto {
    pub fn into_domain(self) -> Result<CartProduct, RemoteError> {
        Ok(CartProduct {
            id: ProductId::new(self.id),
            name: self.name,
            sale_price: self.sale_price.to_decimal()?,
            image: self.images.into_iter().next(),
        })
    }
}

// Catalog

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, alias = "title")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<DecimalValue>,
    #[serde(default)]
    pub sale_price: Option<DecimalValue>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Either a category id or a populated category document.
    #[serde(default)]
    pub category: Option<serde_json::Value>,
    #[serde(default)]
    pub reviews: Vec<ReviewDto>,
}

impl ProductDto {
    pub fn into_domain(self) -> Result<Product, RemoteError> {
        let price = self.price.as_ref().map(DecimalValue::to_decimal).transpose()?;
        let sale_price = self
            .sale_price
            .as_ref()
            .map(DecimalValue::to_decimal)
            .transpose()?;
        let (price, sale_price) = match (price, sale_price) {
            (Some(price), Some(sale_price)) => (price, sale_price),
            (Some(price), None) => (price.clone(), price),
            (None, Some(sale_price)) => (sale_price.clone(), sale_price),
            (None, None) => return Err(RemoteError::invalid_response()),
        };
        let category = self.category.and_then(|value| match value {
            serde_json::Value::String(id) => Some(id),
            serde_json::Value::Object(document) => document
                .get("name")
                .and_then(|name| name.as_str())
                .map(str::to_string),
            _ => None,
        });

        Ok(Product {
            id: ProductId::new(self.id),
            name: self.name,
            description: self.description,
            price,
            sale_price,
            images: self.images,
            tags: self.tags,
            category,
            reviews: self.reviews.into_iter().map(ReviewDto::into_domain).collect(),
        })
    }
}

#[derive(Deserialize)]
pub struct ReviewDto {
    #[serde(default, alias = "name", alias = "user")]
    pub author: String,
    pub rating: u8,
    #[serde(default, alias = "text")]
    pub comment: Option<String>,
}

impl ReviewDto {
    pub fn into_domain(self) -> Review {
        Review {
            author: self.author,
            rating: self.rating,
            comment: self.comment,
        }
    }
}

#[derive(Deserialize)]
pub struct CategoryDto {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl CategoryDto {
    pub fn into_domain(self) -> Category {
        Category {
            id: self.id,
            name: self.name,
            image: self.image,
        }
    }
}
