//! Field-level validation of incoming JSON payloads.
//!
//! Checks return the message for a single field; callers collect them into
//! a `FieldErrors` map keyed by field name.

use std::str::FromStr;
use std::sync::LazyLock;

use bigdecimal::BigDecimal;
use regex::Regex;
use serde_json::{Map, Value};

use crate::database::models::{
    PRICE_DECIMAL_PLACES, PRICE_MAX_DIGITS, SERVICE_IMAGE_DIR, SERVICE_IMAGE_MAX_LENGTH,
    SERVICE_NAME_MAX_LENGTH, ServiceInput, check_precision,
};
use crate::error::{AppError, FieldErrors};

pub const REQUIRED: &str = "This field is required.";
pub const NOT_NULL: &str = "This field may not be null.";
pub const NOT_BLANK: &str = "This field may not be blank.";
pub const INVALID_STRING: &str = "Not a valid string.";
pub const INVALID_NUMBER: &str = "A valid number is required.";
pub const INVALID_INTEGER: &str = "A valid integer is required.";
pub const INVALID_IMAGE_PATH: &str = "Not a valid image path.";

static INTEGER_STRING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+(\.0*)?$").expect("integer pattern is valid"));

/// Validates a service create payload, collecting every field error.
pub fn validate_service(data: &Value) -> Result<ServiceInput, AppError> {
    let data = as_object(data)?;
    let mut errors = FieldErrors::new();

    let name = record(
        &mut errors,
        "name",
        string_field(data, "name", StringRules::required(SERVICE_NAME_MAX_LENGTH)),
    );
    let description = record(
        &mut errors,
        "description",
        optional_string_field(data, "description"),
    );
    let price = record(
        &mut errors,
        "price",
        decimal_field(data, "price", PRICE_MAX_DIGITS, PRICE_DECIMAL_PLACES),
    );
    let duration_minutes = record(
        &mut errors,
        "duration_minutes",
        integer_field(data, "duration_minutes"),
    );
    let image = record(&mut errors, "image", image_field(data, "image"));

    let (Some(name), Some(description), Some(price), Some(duration_minutes), Some(image)) =
        (name, description, price, duration_minutes, image)
    else {
        return Err(AppError::Validation(errors));
    };

    Ok(ServiceInput {
        name,
        description,
        price,
        duration_minutes,
        image,
    })
}

fn as_object(data: &Value) -> Result<&Map<String, Value>, AppError> {
    data.as_object().ok_or_else(|| {
        AppError::BadRequest(format!(
            "Invalid data. Expected an object, but got {}.",
            json_kind(data)
        ))
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

fn record<T>(errors: &mut FieldErrors, field: &str, result: Result<T, String>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(message) => {
            errors.add(field, message);
            None
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StringRules {
    pub allow_blank: bool,
    pub max_length: Option<usize>,
}

impl StringRules {
    pub fn required(max_length: usize) -> Self {
        Self {
            allow_blank: false,
            max_length: Some(max_length),
        }
    }
}

/// A required, non-null string. Numbers are accepted and rendered as text.
pub fn string_field(
    data: &Map<String, Value>,
    field: &str,
    rules: StringRules,
) -> Result<String, String> {
    match data.get(field) {
        None => Err(REQUIRED.to_string()),
        Some(Value::Null) => Err(NOT_NULL.to_string()),
        Some(value) => coerce_string(value, rules),
    }
}

/// An optional string that may be missing, null or blank.
pub fn optional_string_field(
    data: &Map<String, Value>,
    field: &str,
) -> Result<Option<String>, String> {
    match data.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => coerce_string(
            value,
            StringRules {
                allow_blank: true,
                max_length: None,
            },
        )
        .map(Some),
    }
}

fn coerce_string(value: &Value, rules: StringRules) -> Result<String, String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return Err(INVALID_STRING.to_string()),
    };

    if text.is_empty() && !rules.allow_blank {
        return Err(NOT_BLANK.to_string());
    }

    if let Some(max_length) = rules.max_length {
        if text.chars().count() > max_length {
            return Err(format!(
                "Ensure this field has no more than {} characters.",
                max_length
            ));
        }
    }

    Ok(text)
}

/// A required decimal given as a JSON number or numeric string.
pub fn decimal_field(
    data: &Map<String, Value>,
    field: &str,
    max_digits: u64,
    decimal_places: u64,
) -> Result<BigDecimal, String> {
    let text = match data.get(field) {
        None => return Err(REQUIRED.to_string()),
        Some(Value::Null) => return Err(NOT_NULL.to_string()),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(_) => return Err(INVALID_NUMBER.to_string()),
    };

    let value = BigDecimal::from_str(&text).map_err(|_| INVALID_NUMBER.to_string())?;
    check_precision(&value, max_digits, decimal_places)?;

    Ok(value)
}

/// A required 32-bit integer, given as a JSON number or an integral string.
pub fn integer_field(data: &Map<String, Value>, field: &str) -> Result<i32, String> {
    let value = match data.get(field) {
        None => return Err(REQUIRED.to_string()),
        Some(Value::Null) => return Err(NOT_NULL.to_string()),
        Some(Value::Number(n)) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => i128::from(i),
            (None, Some(f)) if f.fract() == 0.0 && f.is_finite() => {
                if f > i32::MAX as f64 {
                    i128::from(i32::MAX) + 1
                } else if f < i32::MIN as f64 {
                    i128::from(i32::MIN) - 1
                } else {
                    f as i128
                }
            }
            _ => return Err(INVALID_INTEGER.to_string()),
        },
        Some(Value::String(s)) => parse_integer_string(s.trim())?,
        Some(_) => return Err(INVALID_INTEGER.to_string()),
    };

    if value > i128::from(i32::MAX) {
        return Err(format!(
            "Ensure this value is less than or equal to {}.",
            i32::MAX
        ));
    }
    if value < i128::from(i32::MIN) {
        return Err(format!(
            "Ensure this value is greater than or equal to {}.",
            i32::MIN
        ));
    }

    Ok(value as i32)
}

fn parse_integer_string(text: &str) -> Result<i128, String> {
    if !INTEGER_STRING.is_match(text) {
        return Err(INVALID_INTEGER.to_string());
    }

    let integral = text.split('.').next().unwrap_or(text);
    match integral.parse::<i128>() {
        Ok(value) => Ok(value),
        // Too many digits for i128; clamp so the range check reports it
        Err(_) if integral.starts_with('-') => Ok(i128::MIN),
        Err(_) => Ok(i128::MAX),
    }
}

/// An optional image reference, stored under the service image directory.
pub fn image_field(data: &Map<String, Value>, field: &str) -> Result<Option<String>, String> {
    let path = match data.get(field) {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(s)) => s.trim(),
        Some(_) => return Err(INVALID_IMAGE_PATH.to_string()),
    };

    if path.is_empty() {
        return Ok(None);
    }

    if path.starts_with('/')
        || path.starts_with('\\')
        || path.contains(':')
        || path.split(['/', '\\']).any(|segment| segment == "..")
    {
        return Err(INVALID_IMAGE_PATH.to_string());
    }

    let path = if path.starts_with(SERVICE_IMAGE_DIR) {
        path.to_string()
    } else {
        format!("{}{}", SERVICE_IMAGE_DIR, path)
    };

    if path.chars().count() > SERVICE_IMAGE_MAX_LENGTH {
        return Err(format!(
            "Ensure this filename has no more than {} characters.",
            SERVICE_IMAGE_MAX_LENGTH
        ));
    }

    Ok(Some(path))
}
