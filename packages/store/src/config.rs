//! # Client configuration — `hotelbooking.toml`
//!
//! Defines the TOML file bundled into the client at build time
//! (filename: [`ClientConfig::filename`] = `"hotelbooking.toml"`).
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8081/api"
//!
//! [paging]
//! hotel_page_size = 6
//! booking_page_size = 5
//! admin_hotel_list_size = 100
//!
//! [ui]
//! toast_duration_ms = 3000   # notification lifetime
//! close_delay_ms = 1500      # delay before a successful modal closes
//! ```
//!
//! Every section and field has a default, so a missing or empty file is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub paging: PagingConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base address every request is resolved against.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8081/api".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PagingConfig {
    #[serde(default = "default_hotel_page_size")]
    pub hotel_page_size: u32,
    #[serde(default = "default_booking_page_size")]
    pub booking_page_size: u32,
    /// Single-request size used by admin lists, which do not paginate.
    #[serde(default = "default_admin_hotel_list_size")]
    pub admin_hotel_list_size: u32,
}

fn default_hotel_page_size() -> u32 {
    6
}

fn default_booking_page_size() -> u32 {
    5
}

fn default_admin_hotel_list_size() -> u32 {
    100
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            hotel_page_size: default_hotel_page_size(),
            booking_page_size: default_booking_page_size(),
            admin_hotel_list_size: default_admin_hotel_list_size(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_toast_duration")]
    pub toast_duration_ms: u64,
    #[serde(default = "default_close_delay")]
    pub close_delay_ms: u64,
}

fn default_toast_duration() -> u64 {
    3000
}

fn default_close_delay() -> u64 {
    1500
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: default_toast_duration(),
            close_delay_ms: default_close_delay(),
        }
    }
}

impl ClientConfig {
    /// Builder method to point the client at another API.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "hotelbooking.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.paging.hotel_page_size, 6);
        assert_eq!(config.paging.booking_page_size, 5);
        assert_eq!(config.ui.close_delay_ms, 1500);
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = ClientConfig::from_toml(
            r#"
            [api]
            base_url = "https://stay.example.com/api"

            [ui]
            toast_duration_ms = 5000
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://stay.example.com/api");
        assert_eq!(config.ui.toast_duration_ms, 5000);
        assert_eq!(config.ui.close_delay_ms, 1500);
        assert_eq!(config.paging, PagingConfig::default());
    }

    #[test]
    fn test_bundled_file_parses() {
        let config = ClientConfig::from_toml(include_str!("../../../hotelbooking.toml")).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_toml_output_parses_back() {
        let config = ClientConfig::default().with_base_url("http://127.0.0.1:9000/api");
        let text = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }
}
