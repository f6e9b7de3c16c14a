use crate::error::Error;
use crate::field::FieldInfo;
use crate::map::Map;
use crate::value::Value;

/// One bundle of field operations for one runtime type.
///
/// A bundle is installed for a concrete type through
/// [`register`](crate::register) (or [`register_record`](crate::register_record)
/// for [`Record`](crate::Record) types) and is then consulted by every free
/// function in the crate. Implementations receive the target as an erased
/// [`Value`] and should fail with [`Error::UnsupportedType`] when handed a
/// payload they cannot downcast.
///
/// The three derived listing operations are provided in terms of
/// [`fields_of`](Self::fields_of) and [`get_field`](Self::get_field);
/// override them only when the bundle has a cheaper way to produce the same
/// answers. [`to_sequence`](Self::to_sequence) must stay positionally
/// aligned with [`fields_of`](Self::fields_of).
pub trait FieldOps: Send + Sync {
    /// Name of the type this bundle serves, for error messages.
    fn type_name(&self) -> &'static str;

    /// Ordered descriptors for every declared field.
    fn fields_of(&self, obj: &Value) -> Result<Vec<FieldInfo>, Error>;

    /// The current value of the field called `name`.
    fn get_field(&self, obj: &Value, name: &str) -> Result<Value, Error>;

    /// A new object of the same type with `changes` applied.
    ///
    /// Every change key must be a declared field; unknown keys fail with
    /// [`Error::InvalidFieldNames`] carrying the complete sorted set of
    /// offenders. `obj` itself is left untouched.
    fn replace_fields(&self, obj: &Value, changes: &Map) -> Result<Value, Error>;

    /// The object's fields as a name-to-value [`Map`], in declared order.
    fn to_mapping(&self, obj: &Value) -> Result<Map, Error>;

    /// The object's field values in declared order.
    fn to_sequence(&self, obj: &Value) -> Result<Vec<Value>, Error>;

    /// Ordered field names.
    fn field_names(&self, obj: &Value) -> Result<Vec<String>, Error> {
        Ok(self
            .fields_of(obj)?
            .into_iter()
            .map(|field| field.name)
            .collect())
    }

    /// Ordered field values, positionally aligned with
    /// [`field_names`](Self::field_names).
    fn field_values(&self, obj: &Value) -> Result<Vec<Value>, Error> {
        self.fields_of(obj)?
            .iter()
            .map(|field| self.get_field(obj, &field.name))
            .collect()
    }

    /// Ordered `(name, value)` pairs.
    fn field_items(&self, obj: &Value) -> Result<Vec<(String, Value)>, Error> {
        self.fields_of(obj)?
            .into_iter()
            .map(|field| {
                let value = self.get_field(obj, &field.name)?;
                Ok((field.name, value))
            })
            .collect()
    }
}

/// The built-in bundle for [`Map`] values.
///
/// Field names are the mapping's keys. `replace_fields` only accepts keys
/// that already exist; a mapping's key set is its shape, and growing it goes
/// through plain [`Map::insert`] instead.
#[derive(Clone, Copy, Debug, Default)]
pub struct MappingOps;

fn expect_map(obj: &Value) -> Result<&Map, Error> {
    obj.downcast_ref::<Map>().ok_or(Error::UnsupportedType {
        type_name: obj.type_name(),
    })
}

impl FieldOps for MappingOps {
    fn type_name(&self) -> &'static str {
        core::any::type_name::<Map>()
    }

    fn fields_of(&self, obj: &Value) -> Result<Vec<FieldInfo>, Error> {
        let map = expect_map(obj)?;
        Ok(map
            .iter()
            .map(|(key, value)| FieldInfo::new(key, value.type_name()))
            .collect())
    }

    fn get_field(&self, obj: &Value, name: &str) -> Result<Value, Error> {
        let map = expect_map(obj)?;
        map.get(name).cloned().ok_or_else(|| Error::MissingField {
            type_name: self.type_name(),
            name: name.to_owned(),
        })
    }

    fn replace_fields(&self, obj: &Value, changes: &Map) -> Result<Value, Error> {
        let map = expect_map(obj)?;
        let mut unknown: Vec<String> = changes
            .keys()
            .filter(|&key| !map.contains_key(key))
            .map(str::to_owned)
            .collect();
        if !unknown.is_empty() {
            unknown.sort();
            return Err(Error::InvalidFieldNames {
                type_name: self.type_name(),
                names: unknown,
            });
        }
        let mut replaced = map.clone();
        for (key, value) in changes.iter() {
            replaced.insert(key, value.clone());
        }
        Ok(Value::new(replaced))
    }

    fn to_mapping(&self, obj: &Value) -> Result<Map, Error> {
        Ok(expect_map(obj)?.clone())
    }

    fn to_sequence(&self, obj: &Value) -> Result<Vec<Value>, Error> {
        Ok(expect_map(obj)?.values().cloned().collect())
    }
}
