//! Create or cancel the signed-in user's subscription
//!
//! Usage:
//!   cargo run --bin subscription -- create <stripe_token> <plan_type>
//!   cargo run --bin subscription -- cancel

use anyhow::{Context, Result};
use std::sync::Arc;
use subscription_cli::bin_common::{load_config_from_env, parse_args, usage, Command};
use subscription_cli::subscription_client::{
    init_tracing, ClientConfig, EnvToken, SubscriptionClient, TransportResponse,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = parse_args(&args);
    if command == Command::Help {
        println!("{}", usage());
        return Ok(());
    }

    let config_path = load_config_from_env();
    let config = if config_path.exists() {
        ClientConfig::load(&config_path)
            .with_context(|| format!("Failed to load {}", config_path.display()))?
    } else {
        ClientConfig::from_env().context("No config file and no API URL in the environment")?
    };

    init_tracing(&config.log_level);
    config.log();

    let client = SubscriptionClient::from_config(&config, Arc::new(EnvToken::default()))?;

    let response = match command {
        Command::Create {
            stripe_token,
            plan_type,
        } => {
            println!("Creating {} subscription...", plan_type);
            client.create_subscription(&stripe_token, &plan_type).await?
        }
        Command::Cancel => {
            println!("Cancelling subscription...");
            client.cancel_subscription().await?
        }
        Command::Help => return Ok(()),
    };

    print_response(&response);
    Ok(())
}

fn print_response(response: &TransportResponse) {
    println!("Status: {}", response.status);
    if !response.body.is_empty() {
        println!("{}", response.body);
    }
}
