//! ObjectId validation and conversion.
//!
//! Accepted representations:
//! - text of exactly 24 hex characters,
//! - 12 raw bytes,
//! - a whole number of seconds fitting in 32 bits, taken as the creation
//!   timestamp with every other byte zero.
//!
//! Conversion never generates a fresh id; anything else is an error.

use bson::oid::ObjectId;
use utilkit_core::{Result, UtilError, Value};

const HEX_LENGTH: usize = 24;
const BYTE_LENGTH: usize = 12;

/// `true` if `x` is an accepted ObjectId representation.
///
/// ```
/// use utilkit_core::Value;
/// use utilkit_mongo::is_valid_mongo_object_id;
///
/// assert!(is_valid_mongo_object_id(&Value::from("507f1f77bcf86cd799439011")));
/// assert!(!is_valid_mongo_object_id(&Value::from("invalidObjectId")));
/// ```
#[must_use]
pub fn is_valid_mongo_object_id(x: &Value) -> bool {
    object_id_from(x).is_some()
}

/// Converts `x` into an [`ObjectId`].
///
/// # Errors
///
/// [`UtilError::InvalidIdentifier`] when `x` is not an accepted
/// representation, including nil and empty values.
pub fn convert_to_mongo_object_id(x: &Value) -> Result<ObjectId> {
    object_id_from(x).ok_or_else(|| {
        tracing::debug!(kind = x.kind(), "rejected object id");
        UtilError::InvalidIdentifier(x.to_string())
    })
}

fn object_id_from(x: &Value) -> Option<ObjectId> {
    match x {
        Value::Text(s) if s.len() == HEX_LENGTH => ObjectId::parse_str(s).ok(),
        Value::Binary(bytes) if bytes.len() == BYTE_LENGTH => {
            let bytes: [u8; BYTE_LENGTH] = bytes.as_slice().try_into().ok()?;
            Some(ObjectId::from_bytes(bytes))
        },
        Value::Number(n) => timestamp_seconds(*n).map(from_timestamp),
        _ => None,
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "checked to be a whole number within u32 range"
)]
fn timestamp_seconds(n: f64) -> Option<u32> {
    if !n.is_finite() || n.fract() != 0.0 || n < 0.0 || n > f64::from(u32::MAX) {
        return None;
    }
    Some(n as u32)
}

fn from_timestamp(seconds: u32) -> ObjectId {
    let mut bytes = [0u8; BYTE_LENGTH];
    bytes[..4].copy_from_slice(&seconds.to_be_bytes());
    ObjectId::from_bytes(bytes)
}
