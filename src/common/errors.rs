use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Gateway returned {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Malformed gateway response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Record not found")]
    NotFound,
}

impl GatewayError {
    /// Message to show an editor. The gateway's own wording for HTTP
    /// failures, a generic description otherwise.
    pub fn user_message(&self) -> String {
        match self {
            GatewayError::Http { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, GatewayError::NotFound)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),
}
