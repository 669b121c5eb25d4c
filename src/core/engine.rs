use crate::core::{JokeSource, Reporter, Robot, RobotConnection};
use crate::utils::error::Result;

/// Drives the whole run: fetch a joke, report it, have the robot speak it.
///
/// Strictly sequential. The robot session opened for the speech request is
/// released on every exit path; a speech failure is surfaced after the
/// release completes.
pub struct JokeEngine<S: JokeSource, R: Reporter, B: Robot> {
    source: S,
    reporter: R,
    robot: B,
    serial: String,
}

impl<S: JokeSource, R: Reporter, B: Robot> JokeEngine<S, R, B> {
    pub fn new(source: S, reporter: R, robot: B, serial: String) -> Self {
        Self {
            source,
            reporter,
            robot,
            serial,
        }
    }

    pub async fn run(&self) -> Result<()> {
        tracing::debug!("Fetching joke...");
        let joke = self.source.fetch().await?;
        tracing::debug!("Fetched joke {}", joke.value.id);

        self.reporter.report(&joke)?;

        tracing::debug!("Connecting to robot {}", self.serial);
        let mut connection = self.robot.connect(&self.serial).await?;

        // No awaitable Drop in async Rust, so the release is explicit on
        // both paths. The speech error wins over a release error.
        let spoke = connection.say_text(&joke.value.joke).await;
        let closed = connection.close().await;
        spoke?;
        closed
    }
}
