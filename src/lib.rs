pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "cli")]
pub use config::{CliConfig, ModelKind};

pub use crate::core::{validate, validate_json, validate_json_many, validate_many, FromMapping};
pub use domain::model::{AccessTokenRequest, User};
pub use utils::error::{FieldIssue, IssueKind, ModelError, Result, ValidationError};
