use clap::Parser;
use dotenvy::dotenv;

mod commands;
mod config;
mod notifier;
mod setup;

use business::domain::shared::value_objects::UserId;
use commands::Cli;
use config::app_config::AppConfig;
use setup::dependency_injection::DependencyContainer;

/// Storefront CLI Entry Point
///
/// Loads configuration, wires the cart and catalog use cases to the HTTP
/// adapters, and runs one command (or an interactive shell).
///
/// - config/: API location and session configuration
/// - setup/: Dependency injection
/// - commands/: Command-line surface over the use cases
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter, logs go to stderr
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 3. Parse arguments and load configuration
    let cli = Cli::parse();
    let config = AppConfig::from_env()?;

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config)?;
    if let Some(user_id) = cli.user {
        container.session.sign_in(UserId::new(user_id));
    }

    // 5. Run command
    commands::run(cli.command, &container).await
}
