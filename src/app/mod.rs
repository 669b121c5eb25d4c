// Adapters layer: concrete implementations behind the domain ports.

pub mod console;
pub mod joke_api;
pub mod robot;

pub use console::{format_report, ConsoleReporter};
pub use joke_api::HttpJokeApi;
pub use robot::{GatewayRobot, GatewaySession};
