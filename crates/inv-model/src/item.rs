use serde::ser::Serializer;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Placeholder printed for absent or non-scalar fields.
pub const MISSING_FIELD: &str = "N/A";

/// One entry in an inventory export: a bag of optional descriptive fields.
///
/// Records commonly carry `name`, `type`, `classid` and `tradable`, but none
/// of those are required. Anything that is not a JSON object (a stray string
/// or number in the `descriptions` array) degrades to an empty record rather
/// than failing the whole load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemRecord {
    fields: Map<String, Value>,
}

impl ItemRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Render a field for display. Scalar values (string, number, bool) are
    /// shown as-is; absent, null, or structured values become [`MISSING_FIELD`].
    pub fn display_field(&self, key: &str) -> String {
        match self.fields.get(key) {
            Some(Value::String(text)) => text.clone(),
            Some(Value::Number(number)) => number.to_string(),
            Some(Value::Bool(flag)) => flag.to_string(),
            _ => MISSING_FIELD.to_string(),
        }
    }

    /// The `type` label used for distribution grouping, when present and scalar.
    pub fn type_label(&self) -> Option<String> {
        match self.fields.get("type") {
            Some(Value::String(text)) => Some(text.clone()),
            Some(Value::Number(number)) => Some(number.to_string()),
            Some(Value::Bool(flag)) => Some(flag.to_string()),
            _ => None,
        }
    }

    /// Compact JSON text of the whole record, non-ASCII preserved.
    ///
    /// This is the haystack for whole-record keyword search; every field
    /// participates, including numeric IDs.
    pub fn serialized_text(&self) -> String {
        Value::Object(self.fields.clone()).to_string()
    }
}

impl Serialize for ItemRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ItemRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Object(fields) => Self { fields },
            _ => Self::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> ItemRecord {
        serde_json::from_value(value).expect("deserialize record")
    }

    #[test]
    fn display_field_renders_scalars() {
        let item = record(json!({
            "name": "Treasury Key",
            "classid": 12845,
            "tradable": true,
        }));
        assert_eq!(item.display_field("name"), "Treasury Key");
        assert_eq!(item.display_field("classid"), "12845");
        assert_eq!(item.display_field("tradable"), "true");
    }

    #[test]
    fn display_field_substitutes_placeholder() {
        let item = record(json!({
            "tags": ["a", "b"],
            "icon": null,
        }));
        assert_eq!(item.display_field("name"), MISSING_FIELD);
        assert_eq!(item.display_field("tags"), MISSING_FIELD);
        assert_eq!(item.display_field("icon"), MISSING_FIELD);
    }

    #[test]
    fn non_object_entries_degrade_to_empty_records() {
        let item = record(json!("not an object"));
        assert!(item.is_empty());
        assert_eq!(item.display_field("name"), MISSING_FIELD);
    }

    #[test]
    fn serialized_text_preserves_non_ascii() {
        let item = record(json!({"name": "Сокровищница"}));
        assert_eq!(item.serialized_text(), r#"{"name":"Сокровищница"}"#);
    }
}
