use std::path::PathBuf;

use anyhow::Context as _;
use clap::Args;
use sage_payments_api::HttpClient;
use sage_payments_api::resource::charges::{ChargePayload, ChargeResponse, ChargesResource};
use serde_json::Value;

/// Where to read the charge details from.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct PayloadArgs {
    /// Charge details as an inline JSON object.
    #[arg(long)]
    pub json: Option<String>,

    /// Path to a file holding the charge details as a JSON object.
    #[arg(long)]
    pub file: Option<PathBuf>,
}

impl PayloadArgs {
    pub fn load(&self) -> anyhow::Result<ChargePayload> {
        let raw = match (&self.json, &self.file) {
            (Some(json), _) => json.clone(),
            (None, Some(path)) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
            (None, None) => anyhow::bail!("Either --json or --file is required"),
        };
        parse_payload(&raw)
    }
}

fn parse_payload(raw: &str) -> anyhow::Result<ChargePayload> {
    match serde_json::from_str::<Value>(raw).context("Charge details are not valid JSON")? {
        Value::Object(map) => Ok(map),
        other => anyhow::bail!("Charge details must be a JSON object, got {other}"),
    }
}

pub fn get<C: HttpClient + ?Sized>(
    charges: &ChargesResource<'_, C>,
    reference: &str,
) -> anyhow::Result<Option<ChargeResponse>> {
    Ok(charges.get_detail(reference)?)
}

pub fn create<C: HttpClient + ?Sized>(
    charges: &ChargesResource<'_, C>,
    charge_type: &str,
    payload: &PayloadArgs,
) -> anyhow::Result<Option<ChargeResponse>> {
    Ok(charges.create(charge_type, &payload.load()?)?)
}

pub fn update<C: HttpClient + ?Sized>(
    charges: &ChargesResource<'_, C>,
    reference: &str,
    payload: &PayloadArgs,
) -> anyhow::Result<Option<ChargeResponse>> {
    Ok(charges.update(reference, &payload.load()?)?)
}

pub fn delete<C: HttpClient + ?Sized>(
    charges: &ChargesResource<'_, C>,
    reference: &str,
) -> anyhow::Result<Option<ChargeResponse>> {
    Ok(charges.delete(reference)?)
}

/// Pretty JSON for a decoded response, `null` when nothing could be decoded.
pub fn render(response: Option<&ChargeResponse>) -> anyhow::Result<String> {
    match response {
        Some(value) => Ok(serde_json::to_string_pretty(value)?),
        None => Ok("null".to_string()),
    }
}
