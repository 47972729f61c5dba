pub mod cart;
pub mod catalog;
pub mod shell;
mod snapshot;

use clap::{Parser, Subcommand};

use crate::setup::dependency_injection::DependencyContainer;
use cart::CartCommand;
use catalog::CatalogCommand;

#[derive(Debug, Parser)]
#[command(name = "storefront", version, about = "Storefront cart and catalog client")]
pub struct Cli {
    /// Account id to act as, overrides STOREFRONT_USER_ID
    #[arg(long, global = true)]
    pub user: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Mutate or inspect the cart
    #[command(subcommand)]
    Cart(CartCommand),
    /// Browse products and categories
    #[command(subcommand)]
    Catalog(CatalogCommand),
    /// Read cart commands from stdin and run them concurrently
    Shell,
}

pub async fn run(command: Command, container: &DependencyContainer) -> anyhow::Result<()> {
    match command {
        Command::Cart(command) => {
            let state = container.cart_handler.run(command).await?;
            print_json(&state)
        }
        Command::Catalog(command) => {
            let value = container.catalog_handler.run(command).await?;
            print_json(&value)
        }
        Command::Shell => {
            shell::run(
                container.cart_handler.clone(),
                container.cart_store.clone(),
                container.session.clone(),
            )
            .await
        }
    }
}

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_cart_add_with_variant() {
        let cli = Cli::parse_from([
            "storefront", "--user", "u1", "cart", "add", "p1", "--quantity", "2", "--size", "m",
        ]);

        assert_eq!(cli.user.as_deref(), Some("u1"));
        match cli.command {
            Command::Cart(CartCommand::Add {
                product_id,
                quantity,
                size,
                color,
            }) => {
                assert_eq!(product_id, "p1");
                assert_eq!(quantity, 2);
                assert_eq!(size.as_deref(), Some("m"));
                assert_eq!(color, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn should_accept_global_user_after_subcommand() {
        let cli = Cli::parse_from(["storefront", "cart", "clear", "--user", "u2"]);

        assert_eq!(cli.user.as_deref(), Some("u2"));
        assert!(matches!(cli.command, Command::Cart(CartCommand::Clear)));
    }

    #[test]
    fn should_parse_catalog_search() {
        let cli = Cli::parse_from(["storefront", "catalog", "search", "linen shirt"]);

        match cli.command {
            Command::Catalog(CatalogCommand::Search { text }) => assert_eq!(text, "linen shirt"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn should_reject_unknown_subcommand() {
        assert!(Cli::try_parse_from(["storefront", "cart", "checkout"]).is_err());
    }
}
