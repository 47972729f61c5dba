use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::{ToPrimitive, Zero};
use serde::Serialize;

use super::errors::CatalogError;
use super::selection::{Review, average_rating};
use crate::domain::shared::value_objects::ProductId;

/// Tag marking products shown in the deals strip.
pub const BLOCKBUSTER_TAG: &str = "Blockbuster";
/// Tag marking products used as home page banners.
pub const BANNER_TAG: &str = "banner";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    /// List price before discount.
    pub price: BigDecimal,
    pub sale_price: BigDecimal,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub category: Option<String>,
    pub reviews: Vec<Review>,
}

impl Product {
    /// Whole-percent discount of the sale price against the list price.
    /// `None` when the product is not discounted.
    pub fn discount_percentage(&self) -> Option<u32> {
        if self.price <= BigDecimal::zero() || self.sale_price >= self.price {
            return None;
        }
        let ratio = (&self.price - &self.sale_price) * BigDecimal::from(100) / &self.price;
        ratio.with_scale_round(0, RoundingMode::HalfUp).to_u32()
    }

    /// Mean customer rating, `None` before the first review.
    pub fn average_rating(&self) -> Option<f64> {
        average_rating(&self.reviews)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub image: Option<String>,
}

/// Filters accepted by the product listing endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    pub search: Option<String>,
    pub tag: Option<String>,
}

impl ProductQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn search(text: &str) -> Result<Self, CatalogError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(CatalogError::SearchEmpty);
        }
        Ok(Self {
            search: Some(text.to_string()),
            tag: None,
        })
    }

    pub fn tagged(tag: impl Into<String>) -> Self {
        Self {
            search: None,
            tag: Some(tag.into()),
        }
    }

    pub fn blockbuster_deals() -> Self {
        Self::tagged(BLOCKBUSTER_TAG)
    }

    pub fn home_banners() -> Self {
        Self::tagged(BANNER_TAG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn product(price: &str, sale_price: &str) -> Product {
        Product {
            id: ProductId::new("p1"),
            name: "Linen Shirt".to_string(),
            description: None,
            price: BigDecimal::from_str(price).unwrap(),
            sale_price: BigDecimal::from_str(sale_price).unwrap(),
            images: vec!["/details/product1.webp".to_string()],
            tags: vec!["Blockbuster".to_string()],
            category: Some("shirts".to_string()),
            reviews: vec![],
        }
    }

    #[test]
    fn should_compute_whole_percent_discount() {
        assert_eq!(product("999", "799").discount_percentage(), Some(20));
        assert_eq!(product("100", "75").discount_percentage(), Some(25));
    }

    #[test]
    fn should_report_no_discount_when_sale_not_lower() {
        assert_eq!(product("100", "100").discount_percentage(), None);
        assert_eq!(product("0", "0").discount_percentage(), None);
    }

    #[test]
    fn should_average_product_reviews() {
        let mut p = product("10", "8");
        assert_eq!(p.average_rating(), None);

        p.reviews = vec![
            Review {
                author: "Ana".to_string(),
                rating: 5,
                comment: None,
            },
            Review {
                author: "Leo".to_string(),
                rating: 4,
                comment: Some("Runs small".to_string()),
            },
        ];

        assert_eq!(p.average_rating(), Some(4.5));
    }

    #[test]
    fn should_trim_search_text() {
        let query = ProductQuery::search("  shirt ").unwrap();

        assert_eq!(query.search.as_deref(), Some("shirt"));
        assert!(query.tag.is_none());
    }

    #[test]
    fn should_reject_blank_search() {
        assert!(matches!(
            ProductQuery::search("   "),
            Err(CatalogError::SearchEmpty)
        ));
    }

    #[test]
    fn should_build_tag_collections() {
        assert_eq!(
            ProductQuery::blockbuster_deals().tag.as_deref(),
            Some("Blockbuster")
        );
        assert_eq!(ProductQuery::home_banners().tag.as_deref(), Some("banner"));
    }
}
