pub mod signup_client;
pub mod signup_email;

pub use crate::domain::signup_client::{SignupClient, SignupError};
pub use crate::domain::signup_email::SignupEmail;
