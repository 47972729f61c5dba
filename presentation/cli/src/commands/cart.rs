use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};
use clap::Subcommand;

use business::domain::cart::state::CartState;
use business::domain::cart::use_cases::add::{AddToCartParams, AddToCartUseCase};
use business::domain::cart::use_cases::clear::ClearCartUseCase;
use business::domain::cart::use_cases::delete_item::{DeleteCartItemParams, DeleteCartItemUseCase};
use business::domain::cart::use_cases::fetch::FetchCartItemsUseCase;
use business::domain::cart::use_cases::set_items::SetCartItemsUseCase;
use business::domain::cart::use_cases::update_quantity::{
    UpdateQuantityParams, UpdateQuantityUseCase,
};
use business::domain::catalog::selection::{Color, ProductSelection, Size};
use business::domain::shared::value_objects::ProductId;

use super::snapshot::CartSnapshot;

#[derive(Debug, Subcommand)]
pub enum CartCommand {
    /// Fetch the cart from the server
    Show,
    /// Add a product to the cart
    Add {
        product_id: String,
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
        /// XS, S, M, L or XL
        #[arg(long)]
        size: Option<String>,
        /// gray, black, green, pink or blue
        #[arg(long)]
        color: Option<String>,
    },
    /// Set the quantity of a cart line
    Update { product_id: String, quantity: u32 },
    /// Raise a cart line's quantity by one
    Increase { product_id: String },
    /// Lower a cart line's quantity by one, never below one
    Decrease { product_id: String },
    /// Remove a product from the cart
    Remove { product_id: String },
    /// Remove every product from the cart
    Clear,
    /// Load a saved `cart show` output into the local cart without calling the server
    Restore { path: PathBuf },
}

pub struct CartHandler {
    add_use_case: Arc<dyn AddToCartUseCase>,
    fetch_use_case: Arc<dyn FetchCartItemsUseCase>,
    update_quantity_use_case: Arc<dyn UpdateQuantityUseCase>,
    delete_item_use_case: Arc<dyn DeleteCartItemUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
    set_items_use_case: Arc<dyn SetCartItemsUseCase>,
}

impl CartHandler {
    pub fn new(
        add_use_case: Arc<dyn AddToCartUseCase>,
        fetch_use_case: Arc<dyn FetchCartItemsUseCase>,
        update_quantity_use_case: Arc<dyn UpdateQuantityUseCase>,
        delete_item_use_case: Arc<dyn DeleteCartItemUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
        set_items_use_case: Arc<dyn SetCartItemsUseCase>,
    ) -> Self {
        Self {
            add_use_case,
            fetch_use_case,
            update_quantity_use_case,
            delete_item_use_case,
            clear_use_case,
            set_items_use_case,
        }
    }

    pub async fn run(&self, command: CartCommand) -> anyhow::Result<CartState> {
        let state = match command {
            CartCommand::Show => self.fetch_use_case.execute().await?,
            CartCommand::Add {
                product_id,
                quantity,
                size,
                color,
            } => {
                let selection = selection(quantity, size.as_deref(), color.as_deref())?;
                tracing::debug!(
                    "adding {} x{} ({} / {})",
                    product_id,
                    selection.quantity(),
                    selection.size,
                    selection.color
                );
                self.add_use_case
                    .execute(AddToCartParams {
                        product_id: ProductId::new(product_id),
                        quantity: selection.quantity(),
                    })
                    .await?
            }
            CartCommand::Update {
                product_id,
                quantity,
            } => self.update(ProductId::new(product_id), quantity).await?,
            CartCommand::Increase { product_id } => {
                let product_id = ProductId::new(product_id);
                let mut stepper = self.line_stepper(&product_id).await?;
                stepper.increment_quantity();
                self.update(product_id, stepper.quantity()).await?
            }
            CartCommand::Decrease { product_id } => {
                let product_id = ProductId::new(product_id);
                let mut stepper = self.line_stepper(&product_id).await?;
                let current = stepper.quantity();
                stepper.decrement_quantity();
                if stepper.quantity() == current {
                    bail!(
                        "{} is already at quantity {}, use `cart remove` instead",
                        product_id,
                        current
                    );
                }
                self.update(product_id, stepper.quantity()).await?
            }
            CartCommand::Remove { product_id } => {
                self.delete_item_use_case
                    .execute(DeleteCartItemParams {
                        product_id: ProductId::new(product_id),
                    })
                    .await?
            }
            CartCommand::Clear => self.clear_use_case.execute().await?,
            CartCommand::Restore { path } => {
                let json = tokio::fs::read_to_string(&path)
                    .await
                    .with_context(|| format!("cannot read {}", path.display()))?;
                let params = CartSnapshot::parse(&json)?.into_params()?;
                self.set_items_use_case.execute(params)
            }
        };
        Ok(state)
    }

    async fn update(&self, product_id: ProductId, quantity: u32) -> anyhow::Result<CartState> {
        Ok(self
            .update_quantity_use_case
            .execute(UpdateQuantityParams {
                product_id,
                quantity,
            })
            .await?)
    }

    /// Quantity stepper seeded with the line's current quantity.
    async fn line_stepper(&self, product_id: &ProductId) -> anyhow::Result<ProductSelection> {
        let state = self.fetch_use_case.execute().await?;
        let quantity = state
            .items
            .iter()
            .find(|item| &item.product.id == product_id)
            .map(|item| item.quantity)
            .with_context(|| format!("{} is not in the cart", product_id))?;
        Ok(ProductSelection::new(Size::default(), Color::default(), quantity))
    }
}

fn selection(
    quantity: u32,
    size: Option<&str>,
    color: Option<&str>,
) -> anyhow::Result<ProductSelection> {
    let mut selection = ProductSelection::new(Size::default(), Color::default(), quantity);
    if let Some(size) = size {
        selection.select_size(size.parse()?);
    }
    if let Some(color) = color {
        selection.select_color(color.parse()?);
    }
    Ok(selection)
}
