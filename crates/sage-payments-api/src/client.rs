use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, Url};
use serde_json::Value;

use crate::config::Config;
use crate::credentials::SageCredentials;
use crate::error::{ApiErrorBody, ClientError};
use crate::request::RequestOptions;
use crate::resource::charges::ChargesResource;
use crate::signature::{RequestStamp, auth_headers};

/// The HTTP capability shared by every resource facade.
///
/// Each call performs exactly one request. `Ok(None)` means the request succeeded but the
/// response body could not be decoded into a structured value.
pub trait HttpClient {
    fn get(&self, path: &str) -> Result<Option<Value>, ClientError>;

    fn post(&self, path: &str, options: RequestOptions) -> Result<Option<Value>, ClientError>;

    fn put(&self, path: &str, options: RequestOptions) -> Result<Option<Value>, ClientError>;

    fn delete(&self, path: &str) -> Result<Option<Value>, ClientError>;
}

/// Decodes a response body, returning `None` for anything that is not a JSON object or array.
pub fn decode_body(text: &str) -> Option<Value> {
    match serde_json::from_str::<Value>(text) {
        Ok(value @ (Value::Object(_) | Value::Array(_))) => Some(value),
        Ok(other) => {
            log::debug!("Response body is not a structured value: {other}");
            None
        }
        Err(e) if text.trim().is_empty() => {
            log::debug!("Response body is empty ({e})");
            None
        }
        Err(e) => {
            log::warn!("Failed to decode response body: {e}");
            None
        }
    }
}

trait ResponseExt {
    fn map_to_sage_err(self) -> Result<reqwest::blocking::Response, ClientError>;
}

impl ResponseExt for reqwest::blocking::Response {
    fn map_to_sage_err(self) -> Result<reqwest::blocking::Response, ClientError> {
        if self.status().is_success() {
            Ok(self)
        } else {
            match self.status() {
                reqwest::StatusCode::NOT_FOUND => Err(ClientError::NotFound),
                reqwest::StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                reqwest::StatusCode::FORBIDDEN => Err(ClientError::Forbidden),
                reqwest::StatusCode::INTERNAL_SERVER_ERROR => Err(ClientError::InternalServerError),
                status => Err(ClientError::ApiError {
                    status,
                    body: self
                        .text()
                        .map(|text| ApiErrorBody::from_text(&text))
                        .unwrap_or_default(),
                }),
            }
        }
    }
}

/// A blocking client for the Sage Payments Direct API.
///
/// Every request is signed with the configured credentials. Resource facades such as
/// [`ChargesResource`] borrow the client and can be created as often as needed.
#[derive(Debug, Clone)]
pub struct Client {
    http_client: reqwest::blocking::Client,
    base_url: Url,
    credentials: SageCredentials,
}

impl Client {
    pub fn new(config: &Config, credentials: SageCredentials) -> Result<Self, ClientError> {
        Ok(Client {
            http_client: reqwest::blocking::Client::new(),
            base_url: config.base_url()?,
            credentials,
        })
    }

    /// The Charges resource bound to this client.
    pub fn charges(&self) -> ChargesResource<'_, Self> {
        ChargesResource::new(self)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Join the given path and query to the base URL.
    fn join(&self, path: &str, options: &RequestOptions) -> Result<Url, ClientError> {
        let mut url = self.base_url.join(path.trim_start_matches('/'))?;
        if !options.query.is_empty() {
            url.query_pairs_mut().extend_pairs(options.query.iter());
        }
        Ok(url)
    }

    fn req(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<Option<Value>, ClientError> {
        let url = self.join(path, &options)?;
        let body = match &options.body {
            Some(body) => serde_json::to_string(body)?,
            None => String::new(),
        };

        let stamp = RequestStamp::now();
        let signed = auth_headers(
            &self.credentials,
            method.as_str(),
            url.as_str(),
            &body,
            &stamp,
        );

        log::debug!("{method} {url}");

        let mut request_builder = self.http_client.request(method, url);
        for (name, value) in signed {
            request_builder = request_builder.header(name, value);
        }
        for (name, value) in &options.headers {
            request_builder = request_builder.header(name, value);
        }
        if options.body.is_some() {
            request_builder = request_builder
                .header(CONTENT_TYPE, "application/json")
                .body(body);
        }

        let response = request_builder.send()?.map_to_sage_err()?;
        let text = response.text()?;

        Ok(decode_body(&text))
    }
}

impl HttpClient for Client {
    fn get(&self, path: &str) -> Result<Option<Value>, ClientError> {
        self.req(Method::GET, path, RequestOptions::default())
    }

    fn post(&self, path: &str, options: RequestOptions) -> Result<Option<Value>, ClientError> {
        self.req(Method::POST, path, options)
    }

    fn put(&self, path: &str, options: RequestOptions) -> Result<Option<Value>, ClientError> {
        self.req(Method::PUT, path, options)
    }

    fn delete(&self, path: &str) -> Result<Option<Value>, ClientError> {
        self.req(Method::DELETE, path, RequestOptions::default())
    }
}
