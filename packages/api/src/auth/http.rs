//! # reqwest-backed registration client
//!
//! [`HttpAuthApi`] sends `POST {base_url}/users/register` with a JSON
//! [`RegistrationRequest`] and turns the outcome into
//! `Result<Session, RegisterError>`:
//!
//! - `201 Created` with a `{ user, token }` body is the only success.
//! - Any other status, including other `2xx` codes, is
//!   [`RegisterError::ServerRejected`].
//! - Transport failures are classified by [`RegisterError::from`].

use crate::auth::{AuthApi, Session};
use crate::config::ApiConfig;
use crate::error::RegisterError;
use crate::models::RegistrationRequest;

const STATUS_CREATED: u16 = 201;

#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpAuthApi {
    pub fn new(config: ApiConfig) -> Result<Self, RegisterError> {
        let builder = reqwest::Client::builder();

        #[cfg(not(target_arch = "wasm32"))]
        let builder = match config.timeout_secs {
            Some(secs) => builder.timeout(std::time::Duration::from_secs(secs)),
            None => builder,
        };

        let client = builder.build().map_err(RegisterError::client_fault)?;
        Ok(Self { client, config })
    }

    /// Client configured from [`ApiConfig::from_env`].
    pub fn from_env() -> Result<Self, RegisterError> {
        Self::new(ApiConfig::from_env())
    }
}

impl AuthApi for HttpAuthApi {
    async fn register(&self, request: &RegistrationRequest) -> Result<Session, RegisterError> {
        let url = self.config.register_url();
        tracing::debug!(%url, email = %request.email, "Sending registration request");

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        tracing::debug!(status, "Registration response received");
        session_from_response(status, &body)
    }
}

/// Interpret a received response.
pub fn session_from_response(status: u16, body: &[u8]) -> Result<Session, RegisterError> {
    if status != STATUS_CREATED {
        return Err(RegisterError::rejected(status, body));
    }
    serde_json::from_slice(body).map_err(RegisterError::client_fault)
}
