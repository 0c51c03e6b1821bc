//! Client configuration bundled at build time.
//!
//! `hotelbooking.toml` at the workspace root is compiled in. Setting
//! `HOTEL_API_BASE_URL` while building points the client at another API
//! without editing the file.

use dioxus::prelude::*;
use store::ClientConfig;

const BUNDLED: &str = include_str!("../../../hotelbooking.toml");

/// Parse the bundled file. A malformed file is logged and the defaults used.
pub fn load_config() -> ClientConfig {
    let config = match ClientConfig::from_toml(BUNDLED) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("invalid {}: {e}", ClientConfig::filename());
            ClientConfig::default()
        }
    };
    match option_env!("HOTEL_API_BASE_URL") {
        Some(url) if !url.trim().is_empty() => config.with_base_url(url.trim()),
        _ => config,
    }
}

/// The configuration provided at the root of the app.
pub fn use_config() -> ClientConfig {
    use_context::<ClientConfig>()
}
