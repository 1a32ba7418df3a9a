use crate::config::{CliConfig, ModelKind};
use crate::core::validator::{validate_json, validate_json_many};
use crate::domain::model::{AccessTokenRequest, User};
use crate::utils::error::Result;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io::Read;

/// Reads the raw JSON text named by `--input`.
pub fn read_input(config: &CliConfig) -> Result<String> {
    if config.reads_stdin() {
        tracing::debug!("Reading input from stdin");
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        tracing::debug!("Reading input from {}", config.input);
        Ok(fs::read_to_string(&config.input)?)
    }
}

fn to_values<T: Serialize>(records: &[T]) -> Result<Vec<Value>> {
    records
        .iter()
        .map(|r| serde_json::to_value(r).map_err(Into::into))
        .collect()
}

/// Validates `text` as the configured model and returns the records as JSON.
pub fn validate_input(config: &CliConfig, text: &str) -> Result<Vec<Value>> {
    match (config.model, config.many) {
        (ModelKind::AccessToken, false) => {
            to_values(&[validate_json::<AccessTokenRequest>(text)?])
        }
        (ModelKind::AccessToken, true) => {
            to_values(&validate_json_many::<AccessTokenRequest>(text)?)
        }
        (ModelKind::User, false) => to_values(&[validate_json::<User>(text)?]),
        (ModelKind::User, true) => to_values(&validate_json_many::<User>(text)?),
    }
}
