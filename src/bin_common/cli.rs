//! CLI utilities for the subscription binary
//!
//! Handles configuration path lookup and argument parsing.

use std::path::PathBuf;

/// Env var holding the config file path
pub const CONFIG_PATH_ENV: &str = "SUBSCRIPTION_CONFIG_PATH";

/// Config path used when the env var is unset
pub const DEFAULT_CONFIG_PATH: &str = "config/subscription.yaml";

/// Subcommand requested on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create {
        stripe_token: String,
        plan_type: String,
    },
    Cancel,
    Help,
}

/// Load configuration path from environment or use default
pub fn load_config_from_env() -> PathBuf {
    std::env::var(CONFIG_PATH_ENV)
        .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
        .into()
}

/// Parse command line arguments (excluding the program name)
///
/// Anything unrecognised or incomplete falls back to [`Command::Help`].
pub fn parse_args(args: &[String]) -> Command {
    match args.first().map(|s| s.as_str()) {
        Some("create") => match (args.get(1), args.get(2)) {
            (Some(stripe_token), Some(plan_type)) => Command::Create {
                stripe_token: stripe_token.clone(),
                plan_type: plan_type.clone(),
            },
            _ => Command::Help,
        },
        Some("cancel") => Command::Cancel,
        _ => Command::Help,
    }
}

/// Usage text printed for [`Command::Help`]
pub fn usage() -> &'static str {
    "Subscription management tool

Usage:
  subscription create <stripe_token> <plan_type>   # Create or replace the subscription
  subscription cancel                              # Cancel the current subscription

Environment:
  SUBSCRIPTION_AUTH_TOKEN    Bearer token of the signed-in user
  SUBSCRIPTION_API_URL       Overrides base_url from the config file
  SUBSCRIPTION_CONFIG_PATH   Config file (default: config/subscription.yaml)"
}
