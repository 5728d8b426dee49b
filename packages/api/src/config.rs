//! # Client configuration — where the registration backend lives
//!
//! [`ApiConfig`] tells [`HttpAuthApi`](crate::auth::HttpAuthApi) which backend
//! to talk to. It can be written as TOML:
//!
//! ```toml
//! base_url = "https://api.example.com"
//! timeout_secs = 15   # optional, native targets only
//! ```
//!
//! [`ApiConfig::from_env`] resolves the base URL in this order:
//!
//! 1. `API_BASE_URL` captured at build time (the only option in a wasm bundle)
//! 2. `API_BASE_URL` in the process environment or a `.env` file (native)
//! 3. [`DEFAULT_BASE_URL`]

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";
pub const BASE_URL_ENV: &str = "API_BASE_URL";
const REGISTER_PATH: &str = "/users/register";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request timeout. Ignored on wasm, where the browser owns it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: None,
        }
    }

    /// Builder method to set a request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Resolve the configuration from the build and process environment.
    pub fn from_env() -> Self {
        if let Some(url) = option_env!("API_BASE_URL").filter(|u| !u.is_empty()) {
            return Self::new(url);
        }
        match runtime_base_url() {
            Some(url) => Self::new(url),
            None => Self::default(),
        }
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Full URL of the registration endpoint.
    pub fn register_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), REGISTER_PATH)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_base_url() -> Option<String> {
    dotenvy::dotenv().ok();
    std::env::var(BASE_URL_ENV).ok().filter(|u| !u.is_empty())
}

#[cfg(target_arch = "wasm32")]
fn runtime_base_url() -> Option<String> {
    None
}
