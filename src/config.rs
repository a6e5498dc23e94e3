use crate::common::ConfigError;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote CMS, without a trailing slash.
    pub gateway_url: String,
    /// Static API token used for content reads and writes.
    pub gateway_api_token: String,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let gateway_url = std::env::var("GATEWAY_URL")
            .map_err(|_| ConfigError::MissingVar("GATEWAY_URL"))?
            .trim_end_matches('/')
            .to_string();
        let gateway_api_token = std::env::var("GATEWAY_API_TOKEN")
            .map_err(|_| ConfigError::MissingVar("GATEWAY_API_TOKEN"))?;
        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        Ok(Config {
            gateway_url,
            gateway_api_token,
            bind_addr,
        })
    }
}
