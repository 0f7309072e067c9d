//! Integration test: Configuration utilities
//!
//! Tests config path lookup and loading of the shipped config file.

use std::env;
use subscription_cli::bin_common::{load_config_from_env, CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH};
use subscription_cli::subscription_client::ClientConfig;

#[test]
fn test_config_path_default_and_override() {
    // Both cases in one test: they share the same env var
    env::remove_var(CONFIG_PATH_ENV);
    assert_eq!(load_config_from_env().to_str().unwrap(), DEFAULT_CONFIG_PATH);

    env::set_var(CONFIG_PATH_ENV, "custom/path.yaml");
    assert_eq!(load_config_from_env().to_str().unwrap(), "custom/path.yaml");
    env::remove_var(CONFIG_PATH_ENV);
}

#[test]
fn test_shipped_config_is_valid() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/subscription.yaml");
    let config = ClientConfig::load(path).unwrap();

    assert!(config.validate().is_ok());
    assert_eq!(config.timeout_secs, 30);
    assert_eq!(config.connect_timeout_secs, 10);
    assert_eq!(config.log_level, "info");
}
