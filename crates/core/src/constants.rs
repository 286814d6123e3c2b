//! Shared constants for utilkit.

/// Default length of a generated token.
pub const DEFAULT_TOKEN_LENGTH: usize = 10;

/// Number of hex characters in a UUID with separators removed.
/// Tokens longer than this are truncated to it.
pub const MAX_TOKEN_LENGTH: usize = 32;

/// Default digit count for `random_number`.
pub const DEFAULT_RANDOM_NUMBER_LENGTH: u32 = 4;

/// Widest digit count a `u64` can hold for every value of that width.
pub const MAX_RANDOM_NUMBER_LENGTH: u32 = 19;

/// Page used when the caller does not supply one.
pub const DEFAULT_PAGE: f64 = 1.0;

/// Page size used when the caller does not supply one.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Limit returned alongside the fallback pagination for unusable input.
pub const FALLBACK_PAGE_LIMIT: u64 = 10;

/// Country calling code for India.
pub const INDIA_COUNTRY_CODE: &str = "91";

/// ISO 3166-1 alpha-2 region the phone formatter is scoped to.
pub const INDIA_REGION: &str = "IN";

/// Digits in an Indian national significant number.
pub const INDIA_NATIONAL_NUMBER_LENGTH: usize = 10;
