//! Tests for the read surface and flag filtering.

use remold::{
    Error, FieldInfo, Map, NoFlag, Record, SkipNamed, SkipSensitive, Value, as_mapping,
    as_mapping_with, as_sequence, as_sequence_with, field_items, field_items_with, field_keys,
    field_keys_with, field_values, field_values_with, fields_with, get_field, get_field_with,
    mapping, register_record, replace_fields_with,
};

#[derive(Clone, Debug, PartialEq)]
struct Crew {
    name: String,
    rank: i64,
    badge: String,
}

impl Record for Crew {
    fn record_fields() -> Vec<FieldInfo> {
        vec![
            FieldInfo::new("name", core::any::type_name::<String>()),
            FieldInfo::new("rank", core::any::type_name::<i64>()),
            FieldInfo::new("badge", core::any::type_name::<String>()).with_sensitive(),
        ]
    }

    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "name" => Some(Value::new(self.name.clone())),
            "rank" => Some(Value::new(self.rank)),
            "badge" => Some(Value::new(self.badge.clone())),
            _ => None,
        }
    }

    fn construct(values: &Map) -> Result<Self, Error> {
        let owner = core::any::type_name::<Self>();
        Ok(Crew {
            name: values.get_as(owner, "name")?,
            rank: values.get_as(owner, "rank")?,
            badge: values.get_as(owner, "badge")?,
        })
    }
}

fn sample_crew() -> Value {
    Value::new(Crew {
        name: String::from("Ripley"),
        rank: 2,
        badge: String::from("NOS-4"),
    })
}

#[test]
fn listings_stay_aligned_on_mappings() {
    remold_testhelpers::setup();

    let obj = Value::new(mapping! {
        "host" => String::from("localhost"),
        "port" => 8080i64,
        "tls" => false,
    });

    assert_eq!(field_keys(&obj).unwrap(), ["host", "port", "tls"]);
    assert_eq!(
        field_values(&obj).unwrap(),
        [
            Value::new(String::from("localhost")),
            Value::new(8080i64),
            Value::new(false),
        ]
    );
    assert_eq!(
        field_items(&obj).unwrap(),
        [
            (String::from("host"), Value::new(String::from("localhost"))),
            (String::from("port"), Value::new(8080i64)),
            (String::from("tls"), Value::new(false)),
        ]
    );
}

#[test]
fn record_listings_follow_declared_order() {
    remold_testhelpers::setup();
    register_record::<Crew>();

    assert_eq!(
        field_keys(&sample_crew()).unwrap(),
        ["name", "rank", "badge"]
    );
    assert_eq!(
        as_sequence(&sample_crew()).unwrap(),
        [
            Value::new(String::from("Ripley")),
            Value::new(2i64),
            Value::new(String::from("NOS-4")),
        ]
    );
}

#[test]
fn get_field_reads_mappings_and_records() {
    remold_testhelpers::setup();
    register_record::<Crew>();

    let obj = Value::new(mapping! { "port" => 8080i64 });
    assert_eq!(get_field(&obj, "port").unwrap(), Value::new(8080i64));
    assert_eq!(
        get_field(&sample_crew(), "rank").unwrap(),
        Value::new(2i64)
    );
}

#[test]
fn get_field_rejects_unknown_names() {
    remold_testhelpers::setup();
    register_record::<Crew>();

    let obj = Value::new(mapping! { "port" => 8080i64 });
    assert_eq!(
        get_field(&obj, "host").unwrap_err(),
        Error::MissingField {
            type_name: core::any::type_name::<Map>(),
            name: String::from("host"),
        }
    );
    assert_eq!(
        get_field(&sample_crew(), "salary").unwrap_err(),
        Error::MissingField {
            type_name: core::any::type_name::<Crew>(),
            name: String::from("salary"),
        }
    );
}

#[test]
fn as_mapping_preserves_declared_order() {
    remold_testhelpers::setup();
    register_record::<Crew>();

    let mapping = as_mapping(&sample_crew()).unwrap();
    assert_eq!(
        mapping.keys().collect::<Vec<_>>(),
        ["name", "rank", "badge"]
    );
    assert_eq!(mapping.get("rank"), Some(&Value::new(2i64)));
}

#[test]
fn no_flag_variants_match_the_plain_ones() {
    remold_testhelpers::setup();
    register_record::<Crew>();

    let obj = sample_crew();
    assert_eq!(
        field_keys_with(&NoFlag, &obj).unwrap(),
        field_keys(&obj).unwrap()
    );
    assert_eq!(
        field_items_with(&NoFlag, &obj).unwrap(),
        field_items(&obj).unwrap()
    );
    assert_eq!(
        as_mapping_with(&NoFlag, &obj).unwrap(),
        as_mapping(&obj).unwrap()
    );
    assert_eq!(
        get_field_with(&NoFlag, &obj, "badge").unwrap(),
        get_field(&obj, "badge").unwrap()
    );
}

#[test]
fn skip_sensitive_hides_fields_from_every_listing() {
    remold_testhelpers::setup();
    register_record::<Crew>();

    let obj = sample_crew();
    let flag = SkipSensitive;

    assert_eq!(field_keys_with(&flag, &obj).unwrap(), ["name", "rank"]);
    assert_eq!(
        field_values_with(&flag, &obj).unwrap(),
        [Value::new(String::from("Ripley")), Value::new(2i64)]
    );
    assert_eq!(
        field_items_with(&flag, &obj).unwrap(),
        [
            (String::from("name"), Value::new(String::from("Ripley"))),
            (String::from("rank"), Value::new(2i64)),
        ]
    );
    assert_eq!(
        as_mapping_with(&flag, &obj).unwrap(),
        mapping! { "name" => String::from("Ripley"), "rank" => 2i64 }
    );
    assert_eq!(
        as_sequence_with(&flag, &obj).unwrap(),
        [Value::new(String::from("Ripley")), Value::new(2i64)]
    );
    assert_eq!(
        fields_with(&flag, &obj)
            .unwrap()
            .iter()
            .map(|field| field.name.as_str())
            .collect::<Vec<_>>(),
        ["name", "rank"]
    );
}

#[test]
fn hidden_fields_read_as_missing() {
    remold_testhelpers::setup();
    register_record::<Crew>();

    assert_eq!(
        get_field_with(&SkipSensitive, &sample_crew(), "badge").unwrap_err(),
        Error::MissingField {
            type_name: core::any::type_name::<Crew>(),
            name: String::from("badge"),
        }
    );
}

#[test]
fn hidden_fields_cannot_be_replaced() {
    remold_testhelpers::setup();
    register_record::<Crew>();

    let err = replace_fields_with(
        &SkipSensitive,
        &sample_crew(),
        &mapping! { "badge" => String::from("XX-0") },
    )
    .unwrap_err();
    assert_eq!(
        err,
        Error::InvalidFieldNames {
            type_name: core::any::type_name::<Crew>(),
            names: vec![String::from("badge")],
        }
    );
}

#[test]
fn skip_named_hides_arbitrary_fields() {
    remold_testhelpers::setup();
    register_record::<Crew>();

    let flag = SkipNamed::new(["rank"]).unwrap();
    assert_eq!(
        field_keys_with(&flag, &sample_crew()).unwrap(),
        ["name", "badge"]
    );

    // Mapping keys can be hidden the same way.
    let obj = Value::new(mapping! { "a" => 1i64, "b" => 2i64 });
    assert_eq!(field_keys_with(&flag, &obj).unwrap(), ["a", "b"]);
    let without_b = SkipNamed::new(["b"]).unwrap();
    assert_eq!(field_keys_with(&without_b, &obj).unwrap(), ["a"]);
}

#[test]
fn unregistered_types_are_rejected() {
    remold_testhelpers::setup();

    assert_eq!(
        field_keys(&Value::new(2.5f64)).unwrap_err(),
        Error::UnsupportedType { type_name: "f64" }
    );
    assert_eq!(
        get_field(&Value::new(2.5f64), "x").unwrap_err(),
        Error::UnsupportedType { type_name: "f64" }
    );
}
