//! Offset/limit pagination for list queries.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use utilkit_core::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, FALLBACK_PAGE_LIMIT};

/// Offset and limit derived from a page request.
///
/// `is_page_and_page_size` is `false` when the request was unusable and
/// the fallback `{offset: 0, limit: 10}` was returned instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: u64,
    pub limit: u64,
    pub is_page_and_page_size: bool,
}

impl Pagination {
    pub const FALLBACK: Self =
        Self { offset: 0, limit: FALLBACK_PAGE_LIMIT, is_page_and_page_size: false };
}

impl Default for Pagination {
    fn default() -> Self {
        Self::FALLBACK
    }
}

/// Page request as it arrives in a query string or JSON body.
///
/// Numbers and numeric text are accepted. Any other present value becomes
/// NaN, so it falls back instead of failing deserialization.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    #[serde(default, deserialize_with = "loose_number")]
    pub page: Option<f64>,
    #[serde(default, alias = "page_size", deserialize_with = "loose_number")]
    pub page_size: Option<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

fn loose_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseNumber>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        LooseNumber::Number(n) => n,
        LooseNumber::Text(s) => s.trim().parse().unwrap_or(f64::NAN),
        LooseNumber::Other(_) => f64::NAN,
    }))
}

impl PageRequest {
    #[must_use]
    pub fn pagination(&self) -> Pagination {
        get_pagination(self.page, self.page_size)
    }
}

/// Computes offset and limit for a 1-based `page` (default 1) of
/// `page_size` items (default 10).
///
/// Both inputs are floored. A result of zero, a negative value, NaN or
/// infinity makes the request unusable and yields [`Pagination::FALLBACK`],
/// so an explicit page 0 is treated like a missing one.
#[must_use]
pub fn get_pagination(page: Option<f64>, page_size: Option<f64>) -> Pagination {
    let page = page.unwrap_or(DEFAULT_PAGE);
    #[allow(clippy::cast_precision_loss, reason = "default page size is small")]
    let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE as f64);

    let (Some(page), Some(page_size)) = (whole_positive(page), whole_positive(page_size)) else {
        tracing::debug!(page, page_size, "unusable pagination input, using fallback");
        return Pagination::FALLBACK;
    };

    Pagination {
        offset: page.saturating_sub(1).saturating_mul(page_size),
        limit: page_size,
        is_page_and_page_size: true,
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is finite and >= 1; `as` saturates above u64::MAX"
)]
fn whole_positive(x: f64) -> Option<u64> {
    let floored = x.floor();
    if !floored.is_finite() || floored < 1.0 {
        return None;
    }
    Some(floored as u64)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_fallback_for_zero() {
        assert_eq!(get_pagination(Some(0.0), Some(0.0)), Pagination::FALLBACK);
        assert_eq!(
            get_pagination(Some(0.0), Some(0.0)),
            Pagination { offset: 0, limit: 10, is_page_and_page_size: false }
        );
        assert_eq!(get_pagination(Some(3.0), Some(0.0)), Pagination::FALLBACK);
        assert_eq!(get_pagination(Some(0.4), Some(10.0)), Pagination::FALLBACK);
    }

    #[test]
    fn test_offset_and_limit() {
        assert_eq!(
            get_pagination(Some(3.0), Some(10.0)),
            Pagination { offset: 20, limit: 10, is_page_and_page_size: true }
        );
        assert_eq!(
            get_pagination(Some(1.0), Some(25.0)),
            Pagination { offset: 0, limit: 25, is_page_and_page_size: true }
        );
    }

    #[test]
    fn test_inputs_are_floored() {
        assert_eq!(
            get_pagination(Some(2.9), Some(10.7)),
            Pagination { offset: 10, limit: 10, is_page_and_page_size: true }
        );
    }

    #[test]
    fn test_defaults_apply() {
        assert_eq!(
            get_pagination(None, None),
            Pagination { offset: 0, limit: 10, is_page_and_page_size: true }
        );
        assert_eq!(
            get_pagination(Some(2.0), None),
            Pagination { offset: 10, limit: 10, is_page_and_page_size: true }
        );
        assert_eq!(get_pagination(Some(0.0), None).limit, get_pagination(None, None).limit);
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        assert_eq!(get_pagination(Some(f64::NAN), Some(10.0)), Pagination::FALLBACK);
        assert_eq!(get_pagination(Some(2.0), Some(f64::INFINITY)), Pagination::FALLBACK);
        assert_eq!(get_pagination(Some(-1.0), Some(10.0)), Pagination::FALLBACK);
        assert_eq!(get_pagination(Some(2.0), Some(-5.0)), Pagination::FALLBACK);
    }

    #[test]
    fn test_offset_saturates() {
        let p = get_pagination(Some(1e30), Some(1e30));
        assert_eq!(p.offset, u64::MAX);
        assert!(p.is_page_and_page_size);
    }

    #[test]
    fn test_serializes_camel_case() {
        let p = get_pagination(Some(3.0), Some(10.0));
        assert_eq!(
            serde_json::to_value(p).unwrap(),
            json!({ "offset": 20, "limit": 10, "isPageAndPageSize": true })
        );
    }

    #[test]
    fn test_page_request_from_json() {
        let req: PageRequest = serde_json::from_value(json!({ "page": 2, "pageSize": 5 })).unwrap();
        assert_eq!(req.pagination(), Pagination { offset: 5, limit: 5, is_page_and_page_size: true });

        let req: PageRequest = serde_json::from_value(json!({ "page_size": 4 })).unwrap();
        assert_eq!(req.pagination(), Pagination { offset: 0, limit: 4, is_page_and_page_size: true });
    }

    #[test]
    fn test_page_request_accepts_numeric_text() {
        let req: PageRequest =
            serde_json::from_value(json!({ "page": "3", "pageSize": "10" })).unwrap();
        assert_eq!(req.pagination(), Pagination { offset: 20, limit: 10, is_page_and_page_size: true });

        let req: PageRequest = serde_json::from_value(json!({ "page": " 2.7 " })).unwrap();
        assert_eq!(req.pagination(), Pagination { offset: 10, limit: 10, is_page_and_page_size: true });
    }

    #[test]
    fn test_page_request_non_numeric_falls_back() {
        let cases = [
            json!({ "page": "abc" }),
            json!({ "page": "abc", "pageSize": 10 }),
            json!({ "page": 2, "pageSize": "" }),
            json!({ "page": true, "pageSize": 10 }),
            json!({ "page": [1], "pageSize": { "n": 10 } }),
        ];
        for case in cases {
            let req: PageRequest = serde_json::from_value(case.clone()).unwrap();
            assert_eq!(req.pagination(), Pagination::FALLBACK, "{case}");
        }
    }

    #[test]
    fn test_page_request_null_uses_defaults() {
        let req: PageRequest =
            serde_json::from_value(json!({ "page": null, "pageSize": null })).unwrap();
        assert_eq!(req.pagination(), Pagination { offset: 0, limit: 10, is_page_and_page_size: true });

        let req: PageRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(req.pagination(), get_pagination(None, None));
    }
}
