pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::{ConsoleReporter, GatewayRobot, HttpJokeApi};
pub use config::CliConfig;
pub use core::engine::JokeEngine;
pub use utils::error::{JokeError, Result};
