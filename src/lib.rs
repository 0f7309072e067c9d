//! Subscription CLI - Main Library
//!
//! ## Architecture
//!
//! - **bin_common**: Common utilities for the binary (config path, arguments)
//! - **subscription_client**: The API client (re-exported from workspace)
//!
//! ## Usage in Binaries
//!
//! ```rust
//! use subscription_cli::bin_common::{load_config_from_env, parse_args, Command};
//! use subscription_cli::subscription_client::SubscriptionClient;
//! ```

// Re-export workspace libraries for convenience
pub use subscription_client;

// Binary common utilities
pub mod bin_common {
    //! Common utilities for binary executables

    pub mod cli;

    pub use cli::{load_config_from_env, parse_args, usage, Command, CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH};
}
