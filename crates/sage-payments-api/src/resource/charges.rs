//! The Charges resource: retrieve, create, capture and void card charges.

use std::str::FromStr;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::client::HttpClient;
use crate::error::ClientError;
use crate::request::RequestOptions;

/// Collection name the charge paths are built from.
pub const CHARGES: &str = "charges";

/// Charge details as understood by the remote API. Passed through untouched.
pub type ChargePayload = Map<String, Value>;

/// Decoded response of a charge operation.
pub type ChargeResponse = Value;

/// Processing mode of a new charge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
pub enum ChargeType {
    /// Reserve the funds without capturing them.
    Auth,
    /// Force-capture a previously authorized amount.
    Force,
    /// Authorize and capture in one step.
    Sale,
}

#[derive(Error, Debug)]
pub enum ChargesError {
    #[error("Unknown charge type {0}.")]
    InvalidArgument(String),
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Checks that `charge_type` is one of the supported charge types.
///
/// The comparison is exact, so `"auth"` is rejected.
pub fn validate_charge_type(charge_type: &str) -> Result<ChargeType, ChargesError> {
    ChargeType::from_str(charge_type)
        .map_err(|_| ChargesError::InvalidArgument(charge_type.to_string()))
}

/// Typed access to the `charges` collection.
///
/// Holds nothing but a borrow of the shared client, so it is cheap to create per call site.
pub struct ChargesResource<'a, C: HttpClient + ?Sized> {
    client: &'a C,
}

impl<C: HttpClient + ?Sized> Clone for ChargesResource<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: HttpClient + ?Sized> Copy for ChargesResource<'_, C> {}

impl<'a, C: HttpClient + ?Sized> ChargesResource<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Returns detailed information for a charge.
    pub fn get_detail(&self, reference: &str) -> Result<Option<ChargeResponse>, ChargesError> {
        log::debug!("Retrieving charge {reference}");
        Ok(self.client.get(&charge_path(reference))?)
    }

    /// Creates a new charge of the given type.
    ///
    /// An unsupported `charge_type` fails with [`ChargesError::InvalidArgument`] before any
    /// request is sent.
    pub fn create(
        &self,
        charge_type: &str,
        charge: &ChargePayload,
    ) -> Result<Option<ChargeResponse>, ChargesError> {
        let charge_type = validate_charge_type(charge_type)?;
        log::debug!("Creating {charge_type} charge");

        let options = RequestOptions::new()
            .with_query("type", charge_type.to_string())
            .with_json(charge.clone());

        Ok(self.client.post(CHARGES, options)?)
    }

    /// Captures an existing Auth charge, or otherwise amends a charge.
    pub fn update(
        &self,
        reference: &str,
        charge: &ChargePayload,
    ) -> Result<Option<ChargeResponse>, ChargesError> {
        log::debug!("Updating charge {reference}");

        let options = RequestOptions::new().with_json(charge.clone());

        Ok(self.client.put(&charge_path(reference), options)?)
    }

    /// Deletes a charge, i.e. voids or cancels it.
    ///
    /// Only unsettled charges can be deleted: Auth charges, or Sale charges still waiting in
    /// the batch. The remote API enforces this; no check is made here.
    pub fn delete(&self, reference: &str) -> Result<Option<ChargeResponse>, ChargesError> {
        log::debug!("Deleting charge {reference}");
        Ok(self.client.delete(&charge_path(reference))?)
    }
}

fn charge_path(reference: &str) -> String {
    format!("{CHARGES}/{reference}")
}
