//! Environment overrides for `ClientConfig::load`.
//!
//! Kept in its own test binary: it mutates process environment variables,
//! which would race with any other test reading them.

use rankboard_client::{
    ClientConfig, ConfigError, RuntimeContext, DEFAULT_TIMEOUT, LOCALHOST_API_URL,
};
use std::io::Write;
use std::time::Duration;

const BASE_URL_VAR: &str = "RANKBOARD_BASE_URL";
const TIMEOUT_VAR: &str = "RANKBOARD_TIMEOUT_SECS";

fn clear_env() {
    std::env::remove_var(BASE_URL_VAR);
    std::env::remove_var(TIMEOUT_VAR);
}

// A single test so the steps below never interleave with each other.
#[test]
fn test_environment_overrides_context_and_file() {
    clear_env();
    let context = RuntimeContext::browser("localhost");

    // Nothing set: the context decides
    let config = ClientConfig::load(&context, None).unwrap();
    assert_eq!(config.base_url, LOCALHOST_API_URL);
    assert_eq!(config.timeout, DEFAULT_TIMEOUT);

    // Environment beats the context default
    std::env::set_var(BASE_URL_VAR, "http://staging.example.com/api");
    std::env::set_var(TIMEOUT_VAR, "4");

    let config = ClientConfig::load(&context, None).unwrap();
    assert_eq!(config.base_url, "http://staging.example.com/api");
    assert_eq!(config.timeout, Duration::from_secs(4));

    // Environment beats the file too
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    writeln!(file, "base_url = \"http://file.example.com/api\"").unwrap();
    writeln!(file, "timeout_secs = 7").unwrap();

    let config = ClientConfig::load(&context, Some(file.path())).unwrap();
    assert_eq!(config.base_url, "http://staging.example.com/api");
    assert_eq!(config.timeout, Duration::from_secs(4));

    // Only the timeout overridden: the file keeps the URL
    std::env::remove_var(BASE_URL_VAR);
    let config = ClientConfig::load(&context, Some(file.path())).unwrap();
    assert_eq!(config.base_url, "http://file.example.com/api");
    assert_eq!(config.timeout, Duration::from_secs(4));

    // A zero timeout from the environment is rejected like any other
    std::env::set_var(TIMEOUT_VAR, "0");
    let result = ClientConfig::load(&context, None);
    assert!(matches!(result, Err(ConfigError::InvalidTimeout(_))));

    clear_env();
}
