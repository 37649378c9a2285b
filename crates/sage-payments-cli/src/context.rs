use anyhow::Context as _;
use sage_payments_api::{Client, Config, Environment, SageCredentials};

pub struct CliContext {
    client: Client,
}

impl CliContext {
    pub fn from_args(endpoint: Option<&str>, production: bool) -> anyhow::Result<Self> {
        let config = resolve_config(endpoint, production)?;
        log::info!("Using API endpoint {}", config.api_endpoint);

        let credentials = SageCredentials::from_env().context(
            "Missing credentials: set SAGE_CLIENT_ID, SAGE_CLIENT_SECRET, SAGE_MERCHANT_ID and SAGE_MERCHANT_KEY",
        )?;
        let client = Client::new(&config, credentials)?;

        Ok(Self { client })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

fn resolve_config(endpoint: Option<&str>, production: bool) -> anyhow::Result<Config> {
    match (endpoint, production) {
        (Some(endpoint), _) => Ok(Config::new(endpoint)),
        (None, true) => Ok(Config::for_environment(Environment::Production)),
        (None, false) => Ok(Config::from_env()?),
    }
}
