pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod request;
pub mod resource;
pub mod signature;

pub use client::{Client, HttpClient};
pub use config::{Config, Environment};
pub use credentials::SageCredentials;
pub use error::ClientError;
pub use request::RequestOptions;
pub use resource::charges::{ChargeType, ChargesError, ChargesResource};
