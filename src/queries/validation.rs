//! Queries that check raw field values.

use crate::data::fields::ConfigFields;
use crate::data::options::Choice;
use crate::error::{Error, Result};

/// Parse an enumerated field. An empty string means the field was not
/// supplied.
pub fn optional_choice<T: Choice>(value: &str) -> Result<Option<T>> {
    if value.is_empty() {
        return Ok(None);
    }
    T::parse(value).map(Some)
}

/// Treat an empty string as unset.
pub fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Whether any font field differs from its default.
pub fn font_requested(fields: &ConfigFields) -> bool {
    fields.font_size > 0.0
        || !fields.font_family.is_empty()
        || !fields.font_bold_family.is_empty()
        || !fields.font_italic_family.is_empty()
}

/// Validate font size. Non-positive sizes mean unset.
pub fn font_size(value: f64) -> Result<Option<f64>> {
    if !value.is_finite() {
        return Err(Error::NotFinite {
            field: "font-size",
            value,
        });
    }
    Ok((value > 0.0).then_some(value))
}

/// Validate window opacity. Zero is dropped from the document.
pub fn window_opacity(value: f64) -> Result<Option<f64>> {
    if !(0.0..=1.0).contains(&value) {
        return Err(Error::OutOfRange {
            field: "window-opacity",
            value,
            min: 0.0,
            max: 1.0,
        });
    }
    Ok((value != 0.0).then_some(value))
}
