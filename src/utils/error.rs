use thiserror::Error;

#[derive(Error, Debug)]
pub enum JokeError {
    #[error("Joke API returned status {status}")]
    ApiUnavailable { status: u16 },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Robot device error: {message}")]
    DeviceError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Device,
    Data,
    Configuration,
}

impl JokeError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Recovered locally with a fixed message; not a crash.
            JokeError::ApiUnavailable { .. } => ErrorSeverity::Low,
            JokeError::ApiError(_) => ErrorSeverity::High,
            JokeError::SerializationError(_) => ErrorSeverity::High,
            JokeError::DeviceError { .. } => ErrorSeverity::High,
            JokeError::InvalidConfigValueError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            JokeError::ApiUnavailable { .. } | JokeError::ApiError(_) => ErrorCategory::Network,
            JokeError::SerializationError(_) => ErrorCategory::Data,
            JokeError::DeviceError { .. } => ErrorCategory::Device,
            JokeError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            JokeError::ApiUnavailable { .. } => {
                "The API call was unsuccessful. Please try again later.".to_string()
            }
            JokeError::ApiError(e) => format!("Could not reach the joke API: {}", e),
            JokeError::SerializationError(e) => format!("The joke API sent data we could not parse: {}", e),
            JokeError::DeviceError { message } => format!("The robot could not speak the joke: {}", message),
            JokeError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration problem with '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            JokeError::ApiUnavailable { .. } | JokeError::ApiError(_) => {
                "Check your network connection and that the joke API endpoint is reachable".to_string()
            }
            JokeError::SerializationError(_) => {
                "The API response shape may have changed; verify the endpoint URL".to_string()
            }
            JokeError::DeviceError { .. } => {
                "Verify the robot is powered on, the serial is correct and the gateway URL points at it".to_string()
            }
            JokeError::InvalidConfigValueError { .. } => {
                "Fix the flagged command-line argument and run again".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, JokeError>;
