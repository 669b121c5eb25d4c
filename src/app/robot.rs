use crate::core::{Robot, RobotConnection};
use crate::utils::error::{JokeError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct ConnectRequest<'a> {
    serial: &'a str,
}

#[derive(Deserialize)]
struct ConnectResponse {
    session_id: String,
}

#[derive(Serialize)]
struct SayTextRequest<'a> {
    session_id: &'a str,
    text: &'a str,
}

#[derive(Serialize)]
struct DisconnectRequest<'a> {
    session_id: &'a str,
}

/// Talks to the robot's control gateway over HTTP.
///
/// The gateway owns the actual device protocol; this adapter only opens a
/// session for a given serial, forwards one speech request and releases the
/// session. Every gateway failure surfaces as `JokeError::DeviceError`.
pub struct GatewayRobot {
    client: Client,
    base_url: String,
}

impl GatewayRobot {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

fn device_error(context: &str, err: impl std::fmt::Display) -> JokeError {
    JokeError::DeviceError {
        message: format!("{}: {}", context, err),
    }
}

#[async_trait]
impl Robot for GatewayRobot {
    type Connection = GatewaySession;

    async fn connect(&self, serial: &str) -> Result<GatewaySession> {
        tracing::debug!("Connecting to robot {} via {}", serial, self.base_url);

        let response = self
            .client
            .post(format!("{}/v1/connect", self.base_url))
            .json(&ConnectRequest { serial })
            .send()
            .await
            .map_err(|e| device_error("connect request failed", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(device_error("connect rejected", status));
        }

        let body: ConnectResponse = response
            .json()
            .await
            .map_err(|e| device_error("connect response invalid", e))?;

        tracing::debug!("Robot session established: {}", body.session_id);

        Ok(GatewaySession {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            session_id: body.session_id,
        })
    }
}

/// One open device session on the gateway.
#[derive(Debug)]
pub struct GatewaySession {
    client: Client,
    base_url: String,
    session_id: String,
}

#[async_trait]
impl RobotConnection for GatewaySession {
    async fn say_text(&mut self, text: &str) -> Result<()> {
        tracing::debug!("Requesting speech ({} chars)", text.len());

        let response = self
            .client
            .post(format!("{}/v1/say_text", self.base_url))
            .json(&SayTextRequest {
                session_id: &self.session_id,
                text,
            })
            .send()
            .await
            .map_err(|e| device_error("say_text request failed", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(device_error("say_text rejected", status));
        }

        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        tracing::debug!("Releasing robot session {}", self.session_id);

        let response = self
            .client
            .post(format!("{}/v1/disconnect", self.base_url))
            .json(&DisconnectRequest {
                session_id: &self.session_id,
            })
            .send()
            .await
            .map_err(|e| device_error("disconnect request failed", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(device_error("disconnect rejected", status));
        }

        Ok(())
    }
}
