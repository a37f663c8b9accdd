pub mod http_signup_client;

pub use crate::adapters::http_signup_client::HttpSignupClient;
