use crate::utils::error::{FieldIssue, IssueKind, ModelError, Result, ValidationError};
use crate::utils::validation::describe_value;
use serde_json::{Map, Value};

/// A record that can be built from a decoded JSON object.
pub trait FromMapping: Sized {
    const MODEL_NAME: &'static str;

    fn from_mapping(map: &Map<String, Value>) -> std::result::Result<Self, ValidationError>;
}

/// Keeps the value on success, records the issue otherwise.
pub(crate) fn collect<T>(
    issues: &mut Vec<FieldIssue>,
    result: std::result::Result<T, FieldIssue>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(issue) => {
            issues.push(issue);
            None
        }
    }
}

/// Builds one record. Non-object input is a `ModelType` issue at the root.
pub fn validate<T: FromMapping>(value: &Value) -> std::result::Result<T, ValidationError> {
    let map = value.as_object().ok_or_else(|| {
        ValidationError::new(
            T::MODEL_NAME,
            vec![FieldIssue {
                loc: String::new(),
                kind: IssueKind::ModelType {
                    found: describe_value(value),
                },
            }],
        )
    })?;

    let record = T::from_mapping(map);
    match &record {
        Ok(_) => tracing::trace!("Validated {}", T::MODEL_NAME),
        Err(e) => tracing::debug!(
            "Rejected {} with {} issue(s)",
            T::MODEL_NAME,
            e.issue_count()
        ),
    }
    record
}

/// Builds a list of records in input order, stopping at the first bad element.
pub fn validate_many<T: FromMapping>(
    value: &Value,
) -> std::result::Result<Vec<T>, ValidationError> {
    let items = value.as_array().ok_or_else(|| {
        ValidationError::new(
            T::MODEL_NAME,
            vec![FieldIssue::wrong_type("", "list", describe_value(value))],
        )
    })?;

    tracing::debug!("Validating {} {} record(s)", items.len(), T::MODEL_NAME);

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let record = validate::<T>(item).map_err(|e| e.at_index(index))?;
        records.push(record);
    }

    Ok(records)
}

pub fn validate_json<T: FromMapping>(text: &str) -> Result<T> {
    let value: Value = serde_json::from_str(text)?;
    validate(&value).map_err(ModelError::from)
}

pub fn validate_json_many<T: FromMapping>(text: &str) -> Result<Vec<T>> {
    let value: Value = serde_json::from_str(text)?;
    validate_many(&value).map_err(ModelError::from)
}
