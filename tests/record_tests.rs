use std::collections::{BTreeMap, HashMap};

use datefield::{ConverterOptions, DateFieldConverter, DateRecord};

#[test]
fn test_plain_map_record() {
    let mut rec: HashMap<String, String> = HashMap::new();
    DateRecord::set(&mut rec, "date", Some("2024-03-01".to_string()));
    assert_eq!(DateRecord::get(&rec, "date"), Some("2024-03-01"));
    assert_eq!(DateRecord::get(&rec, "other"), None);
}

#[test]
fn test_btree_record_null_removes() {
    let converter = DateFieldConverter::new(ConverterOptions {
        parse_single_date: true,
        ..Default::default()
    })
    .unwrap();
    let mut rec = BTreeMap::new();
    rec.insert("date".to_string(), "junk".to_string());

    converter.to_storage_format(&mut rec);

    assert!(!rec.contains_key("date"));
}

#[test]
fn test_dyn_record() {
    let converter = DateFieldConverter::new(ConverterOptions {
        parse_single_date: true,
        ..Default::default()
    })
    .unwrap();
    let mut map: HashMap<String, String> = HashMap::new();
    map.insert("date".to_string(), "15/06/2023".to_string());

    let rec: &mut dyn DateRecord = &mut map;
    converter.to_storage_format(rec);

    assert_eq!(map["date"], "2023-06-15");
}

#[cfg(feature = "serde")]
mod json {
    use datefield::{ConverterOptions, DateFieldConverter, DateRecord, GroupEntry};
    use serde_json::{json, Map, Value};

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected a JSON object"),
        }
    }

    #[test]
    fn test_non_string_values_read_as_absent() {
        let rec = object(json!({"date": 20240301, "flag": null, "name": "x"}));
        assert_eq!(DateRecord::get(&rec, "date"), None);
        assert_eq!(DateRecord::get(&rec, "flag"), None);
        assert_eq!(DateRecord::get(&rec, "name"), Some("x"));
    }

    #[test]
    fn test_single_failure_writes_json_null() {
        let converter = DateFieldConverter::new(ConverterOptions {
            parse_single_date: true,
            ..Default::default()
        })
        .unwrap();
        let mut rec = object(json!({"date": "2024-03-01"}));

        converter.to_storage_format(&mut rec);

        assert_eq!(rec.get("date"), Some(&Value::Null));
    }

    #[test]
    fn test_group_over_json_record() {
        let converter = DateFieldConverter::new(ConverterOptions {
            parse_group_of_dates: true,
            group_of_dates: [
                ("expiry", GroupEntry::date()),
                ("renewed", GroupEntry::date_time_inverse()),
            ]
            .into_iter()
            .collect(),
            ..Default::default()
        })
        .unwrap();
        let mut rec = object(json!({
            "id": 7,
            "expiry": "2024-03-01",
            "renewed": "2024-03-01 10:00:00"
        }));

        converter.to_display_format(&mut rec);

        assert_eq!(
            Value::Object(rec),
            json!({
                "id": 7,
                "expiry": "01/03/2024",
                "renewed": "01/03/2024 10:00:00"
            })
        );
    }
}
