pub mod validator;

pub use crate::domain::model::{AccessTokenRequest, User};
pub use crate::utils::error::Result;
pub use validator::{validate, validate_json, validate_json_many, validate_many, FromMapping};
