use std::str::FromStr;

use anyhow::{Context, bail};
use bigdecimal::BigDecimal;
use serde::Deserialize;
use serde_json::Value;

use business::domain::cart::model::{CartItem, CartProduct};
use business::domain::cart::use_cases::set_items::SetCartItemsParams;
use business::domain::shared::value_objects::ProductId;

/// Cart snapshot as printed by `storefront cart show`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    items: Vec<SnapshotItem>,
    total_quantity: usize,
    total_price: Value,
}

#[derive(Debug, Deserialize)]
struct SnapshotItem {
    product: SnapshotProduct,
    quantity: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotProduct {
    id: String,
    name: String,
    sale_price: Value,
    #[serde(default)]
    image: Option<String>,
}

impl CartSnapshot {
    pub fn parse(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("cart snapshot is not valid JSON")
    }

    pub fn into_params(self) -> anyhow::Result<SetCartItemsParams> {
        let items = self
            .items
            .into_iter()
            .map(|item| {
                let sale_price = decimal(&item.product.sale_price)
                    .with_context(|| format!("invalid sale price for {}", item.product.id))?;
                Ok(CartItem::new(
                    CartProduct {
                        id: ProductId::new(item.product.id),
                        name: item.product.name,
                        sale_price,
                        image: item.product.image,
                    },
                    item.quantity,
                ))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(SetCartItemsParams {
            items,
            total_quantity: self.total_quantity,
            total_price: decimal(&self.total_price).context("invalid total price")?,
        })
    }
}

fn decimal(value: &Value) -> anyhow::Result<BigDecimal> {
    let text = match value {
        Value::String(text) => text.trim().to_string(),
        Value::Number(number) => number.to_string(),
        other => bail!("expected a decimal, found {}", other),
    };
    Ok(BigDecimal::from_str(&text)?)
}
