use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tokio::task::JoinSet;

use business::application::cart::store::CartStore;
use business::application::session::store::SessionStore;
use business::domain::cart::errors::CartError;
use business::domain::cart::state::CartState;
use business::domain::shared::value_objects::UserId;

use super::cart::{CartCommand, CartHandler};
use super::print_json;

#[derive(Debug, Parser)]
#[command(no_binary_name = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Debug, Subcommand)]
enum ShellCommand {
    /// Act as the given account
    Login { user_id: String },
    /// Forget the current account
    Logout,
    /// Print the local cart without calling the server
    State,
    /// Wait for pending requests, print the cart and leave
    Exit,
    #[command(flatten)]
    Cart(CartCommand),
}

/// Runs one cart command per stdin line. Commands are not awaited before the
/// next line is read, so requests overlap; every store change is echoed as a
/// one-line summary.
pub async fn run(
    cart: Arc<CartHandler>,
    store: Arc<CartStore>,
    session: Arc<SessionStore>,
) -> anyhow::Result<()> {
    let renderer = tokio::spawn(render(store.subscribe()));
    let mut tasks = JoinSet::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            continue;
        }
        let command = match ShellLine::try_parse_from(words) {
            Ok(parsed) => parsed.command,
            Err(error) => {
                eprintln!("{}", error);
                continue;
            }
        };

        match command {
            ShellCommand::Login { user_id } => session.sign_in(UserId::new(user_id)),
            ShellCommand::Logout => session.sign_out(),
            ShellCommand::State => print_json(&store.snapshot())?,
            ShellCommand::Exit => break,
            ShellCommand::Cart(command) => {
                let cart = cart.clone();
                tasks.spawn(async move {
                    if let Err(error) = cart.run(command).await {
                        // Cart failures were already shown by the notifier.
                        if error.downcast_ref::<CartError>().is_none() {
                            eprintln!("error: {:#}", error);
                        }
                    }
                });
            }
        }

        while let Some(finished) = tasks.try_join_next() {
            finished?;
        }
    }

    while let Some(finished) = tasks.join_next().await {
        finished?;
    }
    renderer.abort();
    print_json(&store.snapshot())
}

async fn render(mut receiver: watch::Receiver<CartState>) {
    while receiver.changed().await.is_ok() {
        let line = summary(&receiver.borrow_and_update());
        println!("{}", line);
    }
}

fn summary(state: &CartState) -> String {
    let pending = if state.loading {
        format!(", loading ({} pending)", state.in_flight())
    } else {
        String::new()
    };
    format!(
        "[cart] {} line(s), total {}{}",
        state.total_quantity, state.total_price, pending
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::cart::operation::CartOperation;
    use business::domain::cart::state::CartEvent;
    use business::domain::shared::value_objects::Price;

    #[test]
    fn should_parse_cart_commands_without_prefix() {
        let parsed = ShellLine::try_parse_from(["update", "p1", "4"]).unwrap();

        match parsed.command {
            ShellCommand::Cart(CartCommand::Update {
                product_id,
                quantity,
            }) => {
                assert_eq!(product_id, "p1");
                assert_eq!(quantity, 4);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn should_parse_session_commands() {
        let parsed = ShellLine::try_parse_from(["login", "user-7"]).unwrap();

        assert!(matches!(parsed.command, ShellCommand::Login { user_id } if user_id == "user-7"));
        assert!(matches!(
            ShellLine::try_parse_from(["logout"]).unwrap().command,
            ShellCommand::Logout
        ));
    }

    #[test]
    fn should_summarize_idle_cart() {
        let state = CartState::default().reduce(CartEvent::ItemsSet {
            items: vec![],
            total_quantity: 0,
            total_price: Price::zero(),
        });

        assert_eq!(summary(&state), "[cart] 0 line(s), total 0.00");
    }

    #[test]
    fn should_flag_loading_in_summary() {
        let state = CartState::default().reduce(CartEvent::Pending(CartOperation::Fetch));

        assert_eq!(summary(&state), "[cart] 0 line(s), total 0.00, loading (1 pending)");
    }
}
