use plumbsite_core::BusinessData;
use serde_json::Value;

use crate::error::ValidationError;

/// Checks a normalized document against the business data schema.
///
/// `basic_info.name` must be a non-blank string; every other field is
/// optional but must have the right type when present. Rating ranges are
/// enforced by the normalizer, which drops unusable values.
///
/// # Errors
///
/// Returns [`ValidationError`] describing the first problem found.
pub fn validate(normalized: Value) -> Result<BusinessData, ValidationError> {
    let data: BusinessData =
        serde_json::from_value(normalized).map_err(|e| ValidationError::Schema(e.to_string()))?;

    if data.basic_info.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }

    Ok(data)
}
