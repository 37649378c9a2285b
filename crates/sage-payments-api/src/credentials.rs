use std::fmt::{Debug, Formatter};

/// Credentials used to authenticate against the Direct API.
///
/// The developer application provides the client id and secret, the merchant account
/// provides the merchant id and key.
#[derive(Clone, PartialEq, Eq)]
pub struct SageCredentials {
    client_id: String,
    client_secret: String,
    merchant_id: String,
    merchant_key: String,
}

impl SageCredentials {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        merchant_id: impl Into<String>,
        merchant_key: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            merchant_id: merchant_id.into(),
            merchant_key: merchant_key.into(),
        }
    }

    /// Creates a new instance of `SageCredentials` from environment variables.
    pub fn from_env() -> Result<Self, std::env::VarError> {
        Ok(Self::new(
            std::env::var("SAGE_CLIENT_ID")?,
            std::env::var("SAGE_CLIENT_SECRET")?,
            std::env::var("SAGE_MERCHANT_ID")?,
            std::env::var("SAGE_MERCHANT_KEY")?,
        ))
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    pub fn merchant_id(&self) -> &str {
        &self.merchant_id
    }

    pub fn merchant_key(&self) -> &str {
        &self.merchant_key
    }
}

impl Debug for SageCredentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SageCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("merchant_id", &self.merchant_id)
            .field("merchant_key", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_hides_secrets() {
        let creds = SageCredentials::new("client", "s3cret", "merchant", "k3y");
        let printed = format!("{creds:?}");

        assert!(printed.contains("client"));
        assert!(printed.contains("merchant"));
        assert!(!printed.contains("s3cret"));
        assert!(!printed.contains("k3y"));
    }
}
