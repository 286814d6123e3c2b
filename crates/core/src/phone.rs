//! Indian phone number normalization to E.164.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{INDIA_COUNTRY_CODE, INDIA_NATIONAL_NUMBER_LENGTH, INDIA_REGION};
use crate::error::{Result, UtilError};
use crate::value::{Value, is_nil_or_empty};

/// Digits with optional separators and at most one leading `+`.
#[allow(clippy::expect_used, reason = "static regex pattern is compile-time known")]
static PHONE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[0-9][0-9\s\-./()]*$").expect("valid phone shape regex")
});

/// Minimum length of the raw input text, separators included.
const MIN_INPUT_LENGTH: usize = 10;

/// Formats an Indian phone number as `+91XXXXXXXXXX`.
///
/// Accepts text or a number. Separators (spaces, `-`, `.`, `/`, parentheses)
/// are ignored; letters and any other character reject the input rather than
/// being stripped. The digits may be the bare 10-digit national number, or carry
/// a `91`, `+91` or trunk `0` prefix. Mobile prefixes are not checked.
///
/// ```
/// use utilkit_core::{Value, format_indian_phone_number};
///
/// let formatted = format_indian_phone_number(&Value::from("91-12345-67890")).unwrap();
/// assert_eq!(formatted, "+911234567890");
/// ```
///
/// # Errors
///
/// [`UtilError::InvalidPhoneNumber`] when the input is nil or empty, shorter
/// than 10 characters, or not a plausible Indian number.
pub fn format_indian_phone_number(phone_number: &Value) -> Result<String> {
    if is_nil_or_empty(phone_number) {
        return Err(reject(phone_number, "missing phone number"));
    }
    if !matches!(phone_number, Value::Text(_) | Value::Number(_)) {
        return Err(reject(phone_number, "unsupported input type"));
    }

    let raw = phone_number.to_string();
    let trimmed = raw.trim();
    if trimmed.chars().count() < MIN_INPUT_LENGTH {
        return Err(reject(phone_number, "too short"));
    }
    if !PHONE_SHAPE.is_match(trimmed) {
        return Err(reject(phone_number, "unexpected characters"));
    }

    let has_plus = trimmed.starts_with('+');
    let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();
    let Some(national) = national_number(&digits, has_plus) else {
        return Err(reject(phone_number, "not an Indian number"));
    };

    Ok(format!("+{INDIA_COUNTRY_CODE}{national}"))
}

/// Extracts the 10-digit national number from the bare digits.
fn national_number(digits: &str, has_plus: bool) -> Option<&str> {
    let with_country_len = INDIA_COUNTRY_CODE.len().saturating_add(INDIA_NATIONAL_NUMBER_LENGTH);

    if has_plus {
        if digits.len() != with_country_len {
            return None;
        }
        return digits.strip_prefix(INDIA_COUNTRY_CODE);
    }

    match digits.len() {
        INDIA_NATIONAL_NUMBER_LENGTH => Some(digits),
        len if len == with_country_len => digits.strip_prefix(INDIA_COUNTRY_CODE),
        len if len == INDIA_NATIONAL_NUMBER_LENGTH.saturating_add(1) => digits.strip_prefix('0'),
        _ => None,
    }
}

fn reject(input: &Value, reason: &'static str) -> UtilError {
    tracing::debug!(region = INDIA_REGION, kind = input.kind(), reason, "rejected phone number");
    UtilError::InvalidPhoneNumber(input.to_string())
}
