use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "joke-teller")]
#[command(about = "Fetches a random joke and has a robot speak it aloud")]
pub struct CliConfig {
    /// Serial of the robot that should tell the joke
    #[arg(long)]
    pub serial: String,

    #[arg(long, default_value = "http://api.icndb.com/jokes/random")]
    pub api_endpoint: String,

    /// Base URL of the robot control gateway
    #[arg(long, default_value = "http://127.0.0.1:8443")]
    pub gateway: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_non_empty_string("serial", &self.serial)?;
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_url("gateway", &self.gateway)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CliConfig {
        CliConfig {
            serial: "00e20142".to_string(),
            api_endpoint: "http://api.icndb.com/jokes/random".to_string(),
            gateway: "http://127.0.0.1:8443".to_string(),
            verbose: false,
        }
    }

    #[test]
    fn default_shape_validates() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn blank_serial_is_rejected() {
        let mut cfg = config();
        cfg.serial = "  ".to_string();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn non_http_gateway_is_rejected() {
        let mut cfg = config();
        cfg.gateway = "ftp://robot".to_string();
        assert!(cfg.validate().is_err());
    }
}
