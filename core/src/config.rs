//! Client configuration: base URL and static headers.
//!
//! A `ClientConfig` is handed to a [`Client`](crate::Client) once and never
//! changes afterwards; every call made through that client reads it.

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://api-seller.ozon.ru";

pub const CLIENT_ID_HEADER: &str = "Client-Id";
pub const API_KEY_HEADER: &str = "Api-Key";

const ENV_BASE_URL: &str = "SELLER_API_URL";
const ENV_CLIENT_ID: &str = "SELLER_CLIENT_ID";
const ENV_API_KEY: &str = "SELLER_API_KEY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    headers: Vec<(String, String)>,
}

impl ClientConfig {
    /// A configuration with no static headers. `base_url` is kept as given;
    /// request paths are appended to it verbatim.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            headers: Vec::new(),
        }
    }

    /// Add the seller credential headers.
    pub fn with_credentials(self, client_id: &str, api_key: &str) -> Self {
        self.with_header(CLIENT_ID_HEADER, client_id)
            .with_header(API_KEY_HEADER, api_key)
    }

    /// Add a static header, replacing an earlier one with the same name.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers
            .retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Build from `SELLER_API_URL` (optional), `SELLER_CLIENT_ID` and
    /// `SELLER_API_KEY`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let client_id = lookup(ENV_CLIENT_ID).ok_or(ConfigError::MissingVar(ENV_CLIENT_ID))?;
        let api_key = lookup(ENV_API_KEY).ok_or(ConfigError::MissingVar(ENV_API_KEY))?;
        Ok(Self::new(&base_url).with_credentials(&client_id, &api_key))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
