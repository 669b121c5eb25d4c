use crate::domain::model::JokeResponse;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Fetches one joke from wherever jokes come from.
#[async_trait]
pub trait JokeSource: Send + Sync {
    async fn fetch(&self) -> Result<JokeResponse>;
}

/// Emits the human-readable breakdown of a fetched joke.
pub trait Reporter: Send + Sync {
    fn report(&self, joke: &JokeResponse) -> Result<()>;
}

/// Hands out scoped connections to a robot device identified by serial.
#[async_trait]
pub trait Robot: Send + Sync {
    type Connection: RobotConnection;

    async fn connect(&self, serial: &str) -> Result<Self::Connection>;
}

/// A live device connection. Callers must invoke `close` on every exit path;
/// there is no awaitable Drop to fall back on.
#[async_trait]
pub trait RobotConnection: Send {
    async fn say_text(&mut self, text: &str) -> Result<()>;
    async fn close(&mut self) -> Result<()>;
}
