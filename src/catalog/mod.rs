//! The in-memory record table and its startup loader.
//!
//! All source data is read once at process start and concatenated into a
//! single [`Catalog`]. The catalog is never mutated afterwards; request
//! handlers only scan it.

mod loader;

pub use loader::{load_catalog, CatalogError};

use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// One row of source data: named fields, each holding a string or null.
///
/// Field values are validated at load time, so every value inside is either
/// `Value::String` or `Value::Null`. Absent and null fields are equivalent
/// for matching purposes and both disappear from serialized responses.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    pub(crate) fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Value of `name`, or `None` when the field is absent or null.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    /// The row with null fields dropped, ready for response serialization.
    /// Field names and string values pass through verbatim.
    pub fn without_nulls(&self) -> Map<String, Value> {
        self.fields
            .iter()
            .filter(|(_, value)| !value.is_null())
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    /// Stable key for full-field-equality dedup, independent of field order.
    pub(crate) fn dedup_key(&self) -> String {
        let sorted: BTreeMap<&String, &Value> = self.fields.iter().collect();
        serde_json::to_string(&sorted).unwrap_or_default()
    }
}

/// The full record table, assembled once at startup from all data files.
///
/// Record order reflects file read order and carries no meaning; the only
/// ordering guarantee the service makes is exact-match priority in search
/// results, which the match engine enforces per request.
#[derive(Debug, Default)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    pub(crate) fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(fields) => Record::from_fields(fields),
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn field_treats_null_and_absent_alike() {
        let row = record(json!({"教师": "张三", "评价": null}));
        assert_eq!(row.field("教师"), Some("张三"));
        assert_eq!(row.field("评价"), None);
        assert_eq!(row.field("课程名称"), None);
    }

    #[test]
    fn without_nulls_drops_only_null_fields() {
        let row = record(json!({"教师": "张三", "评价": null, "学期": "2023春"}));
        let public = row.without_nulls();
        assert_eq!(public.len(), 2);
        assert!(public.contains_key("教师"));
        assert!(!public.contains_key("评价"));
    }

    #[test]
    fn dedup_key_ignores_field_order() {
        let a = record(json!({"教师": "张三", "课程名称": "高等数学"}));
        let b = record(json!({"课程名称": "高等数学", "教师": "张三"}));
        assert_eq!(a.dedup_key(), b.dedup_key());
    }

    #[test]
    fn dedup_key_distinguishes_null_from_absent() {
        let a = record(json!({"教师": "张三", "评价": null}));
        let b = record(json!({"教师": "张三"}));
        assert_ne!(a.dedup_key(), b.dedup_key());
    }
}
