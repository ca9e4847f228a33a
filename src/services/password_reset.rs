//! Password Reset Transport
//!
//! Posts the username to the reset endpoint and returns the plain-text
//! status token from the response body.

use futures::future::{FutureExt, LocalBoxFuture};

use crate::connection::ViewConfig;
use crate::constants::PASSWORD_RESET_LOGIN_FIELD;
use crate::error::{Error, Result};
use crate::services::run_in_tokio;

/// Submits a password reset request
pub trait PasswordResetTransport {
    /// Returns the raw response body
    fn submit<'a>(&'a self, username: &'a str) -> LocalBoxFuture<'a, Result<String>>;
}

/// Form-encoded POST over HTTP
#[derive(Debug, Clone)]
pub struct HttpPasswordResetTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpPasswordResetTransport {
    pub fn new(config: &ViewConfig) -> Result<Self> {
        let endpoint = config.resolve(&config.password_reset.endpoint)?;
        let client = reqwest::Client::builder().build().map_err(|e| Error::Invalid {
            message: format!("Failed to build HTTP client: {e}"),
        })?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl PasswordResetTransport for HttpPasswordResetTransport {
    fn submit<'a>(&'a self, username: &'a str) -> LocalBoxFuture<'a, Result<String>> {
        async move {
            let client = self.client.clone();
            let endpoint = self.endpoint.clone();
            let form = [(PASSWORD_RESET_LOGIN_FIELD, username.to_string())];

            tracing::info!(endpoint = %self.endpoint, "Submitting password reset");

            let response = run_in_tokio(async move {
                let response = client
                    .post(&endpoint)
                    .form(&form)
                    .send()
                    .await?
                    .error_for_status()?;
                Ok::<String, reqwest::Error>(response.text().await?)
            })
            .await?;

            response.map_err(|e| Error::Network {
                url: self.endpoint.clone(),
                message: e.to_string(),
            })
        }
        .boxed_local()
    }
}
