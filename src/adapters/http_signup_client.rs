use crate::domain::signup_client::{
    SignupClient, SignupError, CONNECTION_ERROR_MESSAGE, GENERIC_FAILURE_MESSAGE,
};
use crate::domain::signup_email::SignupEmail;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Path of the signup endpoint, relative to the configured base URL.
pub const SIGNUP_PATH: &str = "/api/signup";

#[derive(Clone)]
pub struct HttpSignupClient {
    http_client: Client,
    base_url: String,
}

#[derive(serde::Serialize)]
struct SignupRequestBody<'a> {
    email: &'a str,
}

#[derive(serde::Deserialize)]
struct SignupResponseBody {
    message: Option<String>,
}

impl HttpSignupClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            base_url,
        })
    }
}

#[async_trait]
impl SignupClient for HttpSignupClient {
    #[tracing::instrument(
        name = "Submitting signup email to the backend",
        skip(self, email),
        fields(signup_email = %email)
    )]
    async fn submit(&self, email: &SignupEmail) -> Result<(), SignupError> {
        let url = format!("{}{}", self.base_url, SIGNUP_PATH);
        let body = SignupRequestBody {
            email: email.as_ref(),
        };

        let response = self
            .http_client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Signup request did not complete: {}", e);
                SignupError::Network(CONNECTION_ERROR_MESSAGE.to_string())
            })?;

        if response.status().is_success() {
            return Ok(());
        }

        let message = response
            .json::<SignupResponseBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());

        Err(SignupError::Server(message))
    }
}
