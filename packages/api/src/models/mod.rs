//! Wire models exchanged with the registration backend.

mod registration;
mod user;

pub use registration::RegistrationRequest;
pub use user::{FullName, UserInfo};
