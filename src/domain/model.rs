use crate::core::validator::{collect, FromMapping};
use crate::utils::error::ValidationError;
use crate::utils::validation::{validate_integer, validate_required_field, validate_string};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Request body carrying an API access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct AccessTokenRequest {
    access_token: String,
}

impl AccessTokenRequest {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}

impl FromMapping for AccessTokenRequest {
    const MODEL_NAME: &'static str = "AccessTokenRequest";

    fn from_mapping(map: &Map<String, Value>) -> Result<Self, ValidationError> {
        let mut issues = Vec::new();

        let access_token = collect(
            &mut issues,
            validate_required_field(map, "access_token")
                .and_then(|v| validate_string("access_token", v)),
        );

        match access_token {
            Some(access_token) if issues.is_empty() => Ok(Self { access_token }),
            _ => Err(ValidationError::new(Self::MODEL_NAME, issues)),
        }
    }
}

/// A user entry as returned by the users endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct User {
    id: i64,
    first_name: String,
    second_name: String,
}

impl User {
    pub fn new(id: i64, first_name: impl Into<String>, second_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            second_name: second_name.into(),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn second_name(&self) -> &str {
        &self.second_name
    }
}

impl FromMapping for User {
    const MODEL_NAME: &'static str = "User";

    fn from_mapping(map: &Map<String, Value>) -> Result<Self, ValidationError> {
        let mut issues = Vec::new();

        let id = collect(
            &mut issues,
            validate_required_field(map, "id").and_then(|v| validate_integer("id", v)),
        );
        let first_name = collect(
            &mut issues,
            validate_required_field(map, "first_name")
                .and_then(|v| validate_string("first_name", v)),
        );
        let second_name = collect(
            &mut issues,
            validate_required_field(map, "second_name")
                .and_then(|v| validate_string("second_name", v)),
        );

        match (id, first_name, second_name) {
            (Some(id), Some(first_name), Some(second_name)) => Ok(Self {
                id,
                first_name,
                second_name,
            }),
            _ => Err(ValidationError::new(Self::MODEL_NAME, issues)),
        }
    }
}

impl TryFrom<Map<String, Value>> for AccessTokenRequest {
    type Error = ValidationError;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        Self::from_mapping(&map)
    }
}

impl TryFrom<Map<String, Value>> for User {
    type Error = ValidationError;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        Self::from_mapping(&map)
    }
}
