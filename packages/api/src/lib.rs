//! # API crate — talking to the registration backend
//!
//! Everything the client needs to create an account over HTTP, with no UI
//! dependencies so it can be exercised from plain `#[tokio::test]`s.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | The [`AuthApi`] trait, the reqwest-backed [`HttpAuthApi`], and the [`Session`] a successful call returns |
//! | [`config`] | [`ApiConfig`]: backend base URL and timeout, from TOML or the environment |
//! | [`error`] | [`RegisterError`]: the three ways a registration can fail, and their user-facing messages |
//! | [`models`] | Wire types: [`RegistrationRequest`], [`UserInfo`], [`FullName`] |

pub mod auth;
pub mod config;
pub mod error;
pub mod models;

pub use auth::{AuthApi, HttpAuthApi, Session};
pub use config::ApiConfig;
pub use error::RegisterError;
pub use models::{FullName, RegistrationRequest, UserInfo};
