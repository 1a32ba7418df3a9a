use crate::utils::error::{FieldIssue, ModelError, Result};
use serde_json::{Map, Value};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Short rendering of a value for issue messages.
pub fn describe_value(value: &Value) -> String {
    let rendered = value.to_string();
    if rendered.chars().count() > 40 {
        let head: String = rendered.chars().take(37).collect();
        format!("{}...", head)
    } else {
        rendered
    }
}

/// Looks up a field, treating an absent key as a `Missing` issue.
pub fn validate_required_field<'a>(
    map: &'a Map<String, Value>,
    field_name: &str,
) -> std::result::Result<&'a Value, FieldIssue> {
    map.get(field_name).ok_or_else(|| FieldIssue::missing(field_name))
}

/// Strings are taken as-is; no other JSON type is converted.
pub fn validate_string(field_name: &str, value: &Value) -> std::result::Result<String, FieldIssue> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(FieldIssue::wrong_type(field_name, "string", describe_value(other))),
    }
}

/// Integers, whole floats and numeric strings all become `i64`.
pub fn validate_integer(field_name: &str, value: &Value) -> std::result::Result<i64, FieldIssue> {
    let coerced = match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => parse_integer_str(s),
        _ => None,
    };

    coerced.ok_or_else(|| {
        let expected = if value.is_string() {
            "integer, unable to parse string as an integer"
        } else {
            "integer"
        };
        FieldIssue::wrong_type(field_name, expected, describe_value(value))
    })
}

/// Accepts `_` between digits and a fraction made only of zeros, e.g. `"1_000"` or `"3.0"`.
fn parse_integer_str(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let whole = match trimmed.split_once('.') {
        Some((int, frac)) if frac.bytes().all(|b| b == b'0') => int,
        Some(_) => return None,
        None => trimmed,
    };

    let bytes = whole.as_bytes();
    let mut digits = String::with_capacity(whole.len());
    for (i, c) in whole.char_indices() {
        if c == '_' {
            let prev_digit = i > 0 && bytes[i - 1].is_ascii_digit();
            let next_digit = bytes.get(i + 1).is_some_and(|b| b.is_ascii_digit());
            if !(prev_digit && next_digit) {
                return None;
            }
        } else {
            digits.push(c);
        }
    }

    digits.parse::<i64>().ok()
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ModelError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ModelError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}
