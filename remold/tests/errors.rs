//! Snapshot tests for error renderings.

use insta::assert_snapshot;
use remold::{Error, FieldInfo, Map, Record, SkipNamed, Value, get_field, mapping, replace};

#[derive(Clone, Debug, PartialEq)]
struct Ship {
    name: String,
    cargo: i64,
}

impl Record for Ship {
    fn record_fields() -> Vec<FieldInfo> {
        vec![
            FieldInfo::new("name", core::any::type_name::<String>()),
            FieldInfo::new("cargo", core::any::type_name::<i64>()),
        ]
    }

    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "name" => Some(Value::new(self.name.clone())),
            "cargo" => Some(Value::new(self.cargo)),
            _ => None,
        }
    }

    fn construct(values: &Map) -> Result<Self, Error> {
        let owner = core::any::type_name::<Self>();
        Ok(Ship {
            name: values.get_as(owner, "name")?,
            cargo: values.get_as(owner, "cargo")?,
        })
    }
}

#[test]
fn unsupported_type_rendering() {
    remold_testhelpers::setup();

    let err = get_field(&Value::new(5i64), "x").unwrap_err();
    assert_snapshot!(err, @"no field operations registered for type i64");
}

#[test]
fn invalid_field_names_rendering() {
    remold_testhelpers::setup();

    let obj = Value::new(mapping! { "a" => 1i64, "b" => 2i64 });
    let err = replace(&obj, &mapping! { "d" => 4i64, "c" => 3i64 }).unwrap_err();
    assert_snapshot!(err, @r#"invalid field names for remold::map::Map: ["c", "d"]"#);
}

#[test]
fn missing_field_rendering() {
    remold_testhelpers::setup();

    let obj = Value::new(mapping! { "a" => 1i64 });
    let err = get_field(&obj, "z").unwrap_err();
    assert_snapshot!(err, @r#"type remold::map::Map has no field named "z""#);
}

#[test]
fn incomplete_constructor_input_rendering() {
    remold_testhelpers::setup();

    let err = Ship::construct(&Map::new()).unwrap_err();
    assert_snapshot!(err, @r#"type errors::Ship has no field named "name""#);
}

#[test]
fn type_mismatch_rendering() {
    remold_testhelpers::setup();

    let values = mapping! { "name" => 5i64, "cargo" => 1i64 };
    let err = Ship::construct(&values).unwrap_err();
    assert_snapshot!(err, @r#"field "name": expected type alloc::string::String, got i64"#);
}

#[test]
fn flag_construction_rendering() {
    remold_testhelpers::setup();

    let err = SkipNamed::new(["a", "b", "a"]).unwrap_err();
    assert_snapshot!(err, @r#"SkipNamed flag cannot be constructed: duplicate field name "a""#);

    let err = SkipNamed::new([""]).unwrap_err();
    assert_snapshot!(err, @"SkipNamed flag cannot be constructed: field names must be non-empty");
}
