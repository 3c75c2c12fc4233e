//! Named-field access to the record being converted.

use std::collections::{BTreeMap, HashMap};

/// A record whose string fields can be read and overwritten by name.
///
/// The converter never owns the record. It only reads the configured fields
/// and writes the converted values back.
pub trait DateRecord {
    /// Returns the current string value of `field`, or `None` if the field
    /// is absent, null, or not a string.
    fn get(&self, field: &str) -> Option<&str>;

    /// Overwrites `field`. `None` writes a null value.
    fn set(&mut self, field: &str, value: Option<String>);
}

impl DateRecord for HashMap<String, Option<String>> {
    fn get(&self, field: &str) -> Option<&str> {
        HashMap::get(self, field)?.as_deref()
    }

    fn set(&mut self, field: &str, value: Option<String>) {
        self.insert(field.to_string(), value);
    }
}

impl DateRecord for HashMap<String, String> {
    fn get(&self, field: &str) -> Option<&str> {
        HashMap::get(self, field).map(String::as_str)
    }

    fn set(&mut self, field: &str, value: Option<String>) {
        match value {
            Some(value) => {
                self.insert(field.to_string(), value);
            }
            None => {
                self.remove(field);
            }
        }
    }
}

impl DateRecord for BTreeMap<String, String> {
    fn get(&self, field: &str) -> Option<&str> {
        BTreeMap::get(self, field).map(String::as_str)
    }

    fn set(&mut self, field: &str, value: Option<String>) {
        match value {
            Some(value) => {
                self.insert(field.to_string(), value);
            }
            None => {
                self.remove(field);
            }
        }
    }
}

#[cfg(feature = "serde")]
impl DateRecord for serde_json::Map<String, serde_json::Value> {
    fn get(&self, field: &str) -> Option<&str> {
        serde_json::Map::get(self, field)?.as_str()
    }

    fn set(&mut self, field: &str, value: Option<String>) {
        let value = value.map_or(serde_json::Value::Null, serde_json::Value::String);
        self.insert(field.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nullable_map_keeps_null() {
        let mut record: HashMap<String, Option<String>> = HashMap::new();
        DateRecord::set(&mut record, "date", None);
        assert!(record.contains_key("date"));
        assert_eq!(DateRecord::get(&record, "date"), None);
    }

    #[test]
    fn test_plain_map_null_removes_key() {
        let mut record = BTreeMap::new();
        record.insert("date".to_string(), "2024-03-01".to_string());
        DateRecord::set(&mut record, "date", None);
        assert!(record.is_empty());
    }
}
