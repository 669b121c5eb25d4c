use crate::core::{JokeResponse, JokeSource};
use crate::utils::error::{JokeError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Fetches a random joke from the configured HTTP endpoint.
pub struct HttpJokeApi {
    client: Client,
    endpoint: String,
}

impl HttpJokeApi {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl JokeSource for HttpJokeApi {
    async fn fetch(&self) -> Result<JokeResponse> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(JokeError::ApiUnavailable {
                status: status.as_u16(),
            });
        }

        // Decode failures (malformed body, missing keys) propagate as-is.
        let joke: JokeResponse = response.json().await?;
        Ok(joke)
    }
}
