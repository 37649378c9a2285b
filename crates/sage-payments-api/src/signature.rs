//! Request signing for the Direct API.
//!
//! Every request carries the client and merchant identifiers plus an HMAC-SHA512
//! signature over the verb, the full URL, the body, the merchant id, a nonce and a
//! timestamp, keyed with the client secret and base64 encoded.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use derive_new::new;
use hmac::{Hmac, Mac};
use sha2::Sha512;

use crate::credentials::SageCredentials;

type HmacSha512 = Hmac<Sha512>;

pub const CLIENT_ID_HEADER: &str = "clientId";
pub const MERCHANT_ID_HEADER: &str = "merchantId";
pub const MERCHANT_KEY_HEADER: &str = "merchantKey";
pub const NONCE_HEADER: &str = "nonce";
pub const TIMESTAMP_HEADER: &str = "timestamp";
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// The per-request values mixed into the signature.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct RequestStamp {
    pub nonce: String,
    pub timestamp: i64,
}

impl RequestStamp {
    /// A fresh random nonce and the current Unix time in seconds.
    pub fn now() -> Self {
        Self::new(uuid::Uuid::new_v4().to_string(), chrono::Utc::now().timestamp())
    }
}

/// Computes the `Authorization` header value for a request.
pub fn sign(
    credentials: &SageCredentials,
    method: &str,
    url: &str,
    body: &str,
    stamp: &RequestStamp,
) -> String {
    let mut mac = HmacSha512::new_from_slice(credentials.client_secret().as_bytes())
        .expect("HMAC accepts any key length");
    mac.update(method.as_bytes());
    mac.update(url.as_bytes());
    mac.update(body.as_bytes());
    mac.update(credentials.merchant_id().as_bytes());
    mac.update(stamp.nonce.as_bytes());
    mac.update(stamp.timestamp.to_string().as_bytes());

    STANDARD.encode(mac.finalize().into_bytes())
}

/// All authentication headers for a request, in the order they are sent.
pub fn auth_headers(
    credentials: &SageCredentials,
    method: &str,
    url: &str,
    body: &str,
    stamp: &RequestStamp,
) -> Vec<(&'static str, String)> {
    vec![
        (CLIENT_ID_HEADER, credentials.client_id().to_string()),
        (MERCHANT_ID_HEADER, credentials.merchant_id().to_string()),
        (MERCHANT_KEY_HEADER, credentials.merchant_key().to_string()),
        (NONCE_HEADER, stamp.nonce.clone()),
        (TIMESTAMP_HEADER, stamp.timestamp.to_string()),
        (
            AUTHORIZATION_HEADER,
            sign(credentials, method, url, body, stamp),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> SageCredentials {
        SageCredentials::new("client", "secret", "999999999997", "merchant-key")
    }

    fn stamp() -> RequestStamp {
        RequestStamp::new("nonce-1".to_string(), 1_700_000_000)
    }

    #[test]
    fn signs_a_request_with_body() {
        let signature = sign(
            &credentials(),
            "POST",
            "https://api-cert.sagepayments.com/bankcard/v1/charges?type=Sale",
            r#"{"amount":10}"#,
            &stamp(),
        );
        assert_eq!(
            signature,
            "wIF3wDMICGY0DHEfsW5MJLunrvAEQSKQyEru0F021sY6t8d6OtL3PMA96Ndw3QNTmjC1btkEvHMrcKTn5WQnGg=="
        );
    }

    #[test]
    fn signs_a_request_without_body() {
        let signature = sign(
            &credentials(),
            "GET",
            "https://api-cert.sagepayments.com/bankcard/v1/charges/ABC123",
            "",
            &stamp(),
        );
        assert_eq!(
            signature,
            "UTim9bsqDUEalN/gz+/VS4un/yIF1jVtZE/S5kQlEvluP2LFNcHCQEAbP1F20ta2H6xY522ZE6hRJQu6pkV0bw=="
        );
    }

    #[test]
    fn nonce_changes_the_signature() {
        let url = "https://api-cert.sagepayments.com/bankcard/v1/charges/ABC123";
        let other = RequestStamp::new("nonce-2".to_string(), 1_700_000_000);
        assert_ne!(
            sign(&credentials(), "GET", url, "", &stamp()),
            sign(&credentials(), "GET", url, "", &other)
        );
    }

    #[test]
    fn headers_carry_identifiers_and_stamp() {
        let headers = auth_headers(
            &credentials(),
            "DELETE",
            "https://api-cert.sagepayments.com/bankcard/v1/charges/ABC123",
            "",
            &stamp(),
        );
        let lookup = |name: &str| {
            headers
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.as_str())
        };

        assert_eq!(lookup(CLIENT_ID_HEADER), Some("client"));
        assert_eq!(lookup(MERCHANT_ID_HEADER), Some("999999999997"));
        assert_eq!(lookup(MERCHANT_KEY_HEADER), Some("merchant-key"));
        assert_eq!(lookup(NONCE_HEADER), Some("nonce-1"));
        assert_eq!(lookup(TIMESTAMP_HEADER), Some("1700000000"));
        assert!(lookup(AUTHORIZATION_HEADER).is_some());
    }

    #[test]
    fn fresh_stamps_use_distinct_nonces() {
        assert_ne!(RequestStamp::now().nonce, RequestStamp::now().nonce);
    }
}
