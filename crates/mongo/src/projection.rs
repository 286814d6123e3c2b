//! Field-inclusion projections.

use std::collections::BTreeMap;

use bson::Document;
use serde::Serialize;

/// Inclusion marker stored for every projected field.
pub const INCLUDE: i32 = 1;

/// Field name mapped to the inclusion marker `1`.
///
/// Serializes as a plain object, e.g. `{"field1": 1, "field2": 1}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Projection(BTreeMap<String, i32>);

impl Projection {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `{field: 1, ...}` ready to pass to a driver's `projection` option.
    #[must_use]
    pub fn to_document(&self) -> Document {
        let mut doc = Document::new();
        for field in self.0.keys() {
            doc.insert(field.clone(), INCLUDE);
        }
        doc
    }
}

impl<S: Into<String>> FromIterator<S> for Projection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(|field| (field.into(), INCLUDE)).collect())
    }
}

/// Builds a projection including each listed field. Duplicates collapse.
///
/// ```
/// use utilkit_mongo::fields_list_to_mongo_projection;
///
/// let projection = fields_list_to_mongo_projection(["field1", "field2"]);
/// assert!(projection.contains("field1"));
/// assert_eq!(projection.len(), 2);
/// ```
#[must_use]
pub fn fields_list_to_mongo_projection<I, S>(fields: I) -> Projection
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fields.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use bson::doc;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_empty_list() {
        let projection = fields_list_to_mongo_projection(Vec::<String>::new());
        assert!(projection.is_empty());
        assert_eq!(serde_json::to_value(&projection).unwrap(), json!({}));
    }

    #[test]
    fn test_all_fields_set_to_one() {
        let projection = fields_list_to_mongo_projection(["field1", "field2", "field3"]);
        assert_eq!(
            serde_json::to_value(&projection).unwrap(),
            json!({ "field1": 1, "field2": 1, "field3": 1 })
        );
    }

    #[test]
    fn test_duplicates_collapse() {
        let projection = fields_list_to_mongo_projection(["a", "b", "a"]);
        assert_eq!(projection.len(), 2);
        assert_eq!(projection.fields().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_to_document() {
        let projection = fields_list_to_mongo_projection(vec!["name".to_owned(), "age".to_owned()]);
        assert_eq!(projection.to_document(), doc! { "age": 1, "name": 1 });
    }
}
