use crate::error::Error;
use crate::field::FieldInfo;
use crate::flags::{Flag, NoFlag};
use crate::map::Map;
use crate::registry;
use crate::value::Value;

/// Ordered descriptors for `obj`'s fields.
pub fn fields(obj: &Value) -> Result<Vec<FieldInfo>, Error> {
    fields_with(&NoFlag, obj)
}

/// [`fields`] restricted to what `flag` admits.
pub fn fields_with(flag: &dyn Flag, obj: &Value) -> Result<Vec<FieldInfo>, Error> {
    let ops = registry::resolve(obj)?;
    Ok(ops
        .fields_of(obj)?
        .into_iter()
        .filter(|field| flag.admits(field))
        .collect())
}

/// The current value of `obj`'s field called `name`.
pub fn get_field(obj: &Value, name: &str) -> Result<Value, Error> {
    get_field_with(&NoFlag, obj, name)
}

/// [`get_field`] restricted to what `flag` admits; a hidden field fails with
/// [`Error::MissingField`] exactly like an undeclared one.
pub fn get_field_with(flag: &dyn Flag, obj: &Value, name: &str) -> Result<Value, Error> {
    let ops = registry::resolve(obj)?;
    let declared = ops.fields_of(obj)?;
    if !declared
        .iter()
        .any(|field| field.name == name && flag.admits(field))
    {
        return Err(Error::MissingField {
            type_name: ops.type_name(),
            name: name.to_owned(),
        });
    }
    ops.get_field(obj, name)
}

/// Ordered names of `obj`'s fields.
pub fn field_keys(obj: &Value) -> Result<Vec<String>, Error> {
    field_keys_with(&NoFlag, obj)
}

/// [`field_keys`] restricted to what `flag` admits.
pub fn field_keys_with(flag: &dyn Flag, obj: &Value) -> Result<Vec<String>, Error> {
    Ok(fields_with(flag, obj)?
        .into_iter()
        .map(|field| field.name)
        .collect())
}

/// Ordered values of `obj`'s fields, positionally aligned with
/// [`field_keys`].
pub fn field_values(obj: &Value) -> Result<Vec<Value>, Error> {
    field_values_with(&NoFlag, obj)
}

/// [`field_values`] restricted to what `flag` admits.
pub fn field_values_with(flag: &dyn Flag, obj: &Value) -> Result<Vec<Value>, Error> {
    let ops = registry::resolve(obj)?;
    ops.fields_of(obj)?
        .iter()
        .filter(|&field| flag.admits(field))
        .map(|field| ops.get_field(obj, &field.name))
        .collect()
}

/// Ordered `(name, value)` pairs for `obj`'s fields.
pub fn field_items(obj: &Value) -> Result<Vec<(String, Value)>, Error> {
    field_items_with(&NoFlag, obj)
}

/// [`field_items`] restricted to what `flag` admits.
pub fn field_items_with(flag: &dyn Flag, obj: &Value) -> Result<Vec<(String, Value)>, Error> {
    let ops = registry::resolve(obj)?;
    ops.fields_of(obj)?
        .into_iter()
        .filter(|field| flag.admits(field))
        .map(|field| {
            let value = ops.get_field(obj, &field.name)?;
            Ok((field.name, value))
        })
        .collect()
}

/// `obj`'s fields as a name-to-value [`Map`], in declared order.
pub fn as_mapping(obj: &Value) -> Result<Map, Error> {
    as_mapping_with(&NoFlag, obj)
}

/// [`as_mapping`] restricted to what `flag` admits.
///
/// The bundle's own [`to_mapping`](crate::FieldOps::to_mapping) produces the
/// mapping; the flag then filters its entries by name.
pub fn as_mapping_with(flag: &dyn Flag, obj: &Value) -> Result<Map, Error> {
    let ops = registry::resolve(obj)?;
    let admitted = fields_with(flag, obj)?;
    let mapping = ops.to_mapping(obj)?;
    Ok(mapping
        .into_iter()
        .filter(|(name, _)| admitted.iter().any(|field| field.name == *name))
        .collect())
}

/// `obj`'s field values in declared order.
pub fn as_sequence(obj: &Value) -> Result<Vec<Value>, Error> {
    as_sequence_with(&NoFlag, obj)
}

/// [`as_sequence`] restricted to what `flag` admits.
pub fn as_sequence_with(flag: &dyn Flag, obj: &Value) -> Result<Vec<Value>, Error> {
    let ops = registry::resolve(obj)?;
    let declared = ops.fields_of(obj)?;
    let sequence = ops.to_sequence(obj)?;
    Ok(declared
        .iter()
        .zip(sequence)
        .filter(|&(field, _)| flag.admits(field))
        .map(|(_, value)| value)
        .collect())
}
