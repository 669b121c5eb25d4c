pub mod engine;

pub use crate::domain::model::{JokeResponse, JokeValue};
pub use crate::domain::ports::{JokeSource, Reporter, Robot, RobotConnection};
pub use crate::utils::error::Result;
