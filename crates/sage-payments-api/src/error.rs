use reqwest::StatusCode;
use serde::Deserialize;
use std::fmt::{Display, Formatter};
use thiserror::Error;

use crate::config::ConfigError;

/// Error payload returned by the Direct API on non-success responses.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl ApiErrorBody {
    /// Parse the error body, keeping the raw text as the message when it is not the usual
    /// `{code, message}` object.
    pub fn from_text(text: &str) -> Self {
        serde_json::from_str::<ApiErrorBody>(text).unwrap_or_else(|_| ApiErrorBody {
            code: None,
            message: text.to_string(),
        })
    }
}

impl Default for ApiErrorBody {
    fn default() -> Self {
        ApiErrorBody {
            code: None,
            message: "An unknown error occurred".to_string(),
        }
    }
}

impl Display for ApiErrorBody {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.code {
            Some(code) => write!(f, "Code: {}, Message: {}", code, self.message),
            None => write!(f, "Message: {}", self.message),
        }
    }
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Resource not found")]
    NotFound,
    #[error("Unauthorized access")]
    Unauthorized,
    #[error("Forbidden access")]
    Forbidden,
    #[error("Internal server error")]
    InternalServerError,
    #[error("Api error {status}: {body}")]
    ApiError {
        status: StatusCode,
        body: ApiErrorBody,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Unknown Error: {0}")]
    UnknownError(String),
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::NotFound => Some(StatusCode::NOT_FOUND),
            ClientError::Unauthorized => Some(StatusCode::UNAUTHORIZED),
            ClientError::Forbidden => Some(StatusCode::FORBIDDEN),
            ClientError::InternalServerError => Some(StatusCode::INTERNAL_SERVER_ERROR),
            ClientError::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_auth_error(&self) -> bool {
        matches!(self, ClientError::Unauthorized | ClientError::Forbidden)
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        match error.status() {
            Some(status) => ClientError::ApiError {
                status,
                body: ApiErrorBody {
                    code: None,
                    message: error.to_string(),
                },
            },
            None => ClientError::UnknownError(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_is_parsed_when_structured() {
        let body = ApiErrorBody::from_text(r#"{"code":"000001","message":"Invalid amount"}"#);
        assert_eq!(body.code.as_deref(), Some("000001"));
        assert_eq!(body.message, "Invalid amount");
    }

    #[test]
    fn error_body_keeps_raw_text_otherwise() {
        let body = ApiErrorBody::from_text("Bad Gateway");
        assert_eq!(body.code, None);
        assert_eq!(body.message, "Bad Gateway");
        assert_eq!(body.to_string(), "Message: Bad Gateway");
    }

    #[test]
    fn status_is_reported_for_http_errors() {
        assert_eq!(ClientError::NotFound.status(), Some(StatusCode::NOT_FOUND));
        assert!(ClientError::Forbidden.is_auth_error());
        assert_eq!(ClientError::UnknownError("boom".into()).status(), None);
    }
}
