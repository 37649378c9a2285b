use std::str::FromStr;

use url::Url;

const SANDBOX_ENDPOINT: &str = "https://api-cert.sagepayments.com/bankcard/v1/";
const PRODUCTION_ENDPOINT: &str = "https://api.sagepayments.com/bankcard/v1/";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Unknown environment: {0}")]
    UnknownEnvironment(String),
    #[error("Invalid api endpoint {endpoint}: {source}")]
    InvalidEndpoint {
        endpoint: String,
        source: url::ParseError,
    },
}

/// The Direct API deployment to talk to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Environment {
    #[default]
    Sandbox,
    Production,
}

impl Environment {
    pub fn endpoint(&self) -> &'static str {
        match self {
            Environment::Sandbox => SANDBOX_ENDPOINT,
            Environment::Production => PRODUCTION_ENDPOINT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl Config {
    pub fn new(api_endpoint: impl Into<String>) -> Self {
        Config {
            api_endpoint: api_endpoint.into(),
        }
    }

    pub fn for_environment(environment: Environment) -> Self {
        Self::new(environment.endpoint())
    }

    /// Reads `SAGE_API_ENDPOINT`, then `SAGE_ENVIRONMENT`, falling back to the sandbox.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("SAGE_API_ENDPOINT").ok(),
            std::env::var("SAGE_ENVIRONMENT").ok(),
        )
    }

    fn from_vars(
        endpoint: Option<String>,
        environment: Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            return Ok(Self::new(endpoint));
        }
        match environment {
            Some(name) => Environment::from_str(name.trim())
                .map(Self::for_environment)
                .map_err(|_| ConfigError::UnknownEnvironment(name)),
            None => Ok(Self::default()),
        }
    }

    /// The endpoint as a base URL that relative resource paths can be joined onto.
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        let mut endpoint = self.api_endpoint.trim().to_string();
        if !endpoint.ends_with('/') {
            endpoint.push('/');
        }
        Url::parse(&endpoint).map_err(|source| ConfigError::InvalidEndpoint {
            endpoint: self.api_endpoint.clone(),
            source,
        })
    }
}
