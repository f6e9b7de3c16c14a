use core::fmt;
use core::marker::PhantomData;

use crate::error::Error;
use crate::field::FieldInfo;
use crate::map::Map;
use crate::ops::FieldOps;
use crate::value::Value;

/// A fixed-shape type that declares its own fields and constructor.
///
/// Implementing `Record` is how a type opts into field operations natively
/// instead of relying on an externally registered bundle: installing it
/// through [`register_record`](crate::register_record) outranks any plain
/// [`register`](crate::register) call for the same type.
///
/// `construct` always receives a complete name-to-value map; partial
/// replaces are resolved before it runs, with current values filling the
/// gaps. [`Map::get_as`] does the per-field extraction:
///
/// ```
/// use remold::{Error, FieldInfo, Map, Record, Value, mapping, register_record, replace};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Lamp {
///     brightness: u32,
///     on: bool,
/// }
///
/// impl Record for Lamp {
///     fn record_fields() -> Vec<FieldInfo> {
///         vec![
///             FieldInfo::new("brightness", core::any::type_name::<u32>()),
///             FieldInfo::new("on", core::any::type_name::<bool>()),
///         ]
///     }
///
///     fn field(&self, name: &str) -> Option<Value> {
///         match name {
///             "brightness" => Some(Value::new(self.brightness)),
///             "on" => Some(Value::new(self.on)),
///             _ => None,
///         }
///     }
///
///     fn construct(values: &Map) -> Result<Self, Error> {
///         let owner = core::any::type_name::<Self>();
///         Ok(Lamp {
///             brightness: values.get_as(owner, "brightness")?,
///             on: values.get_as(owner, "on")?,
///         })
///     }
/// }
///
/// register_record::<Lamp>();
///
/// let dim = Lamp { brightness: 10, on: true };
/// let bright = replace(&Value::new(dim), &mapping! { "brightness" => 90u32 })?;
/// assert_eq!(
///     bright.downcast_ref::<Lamp>(),
///     Some(&Lamp { brightness: 90, on: true })
/// );
/// # Ok::<(), Error>(())
/// ```
pub trait Record: Clone + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Ordered descriptors for the type's declared fields.
    fn record_fields() -> Vec<FieldInfo>;

    /// The current value of the field called `name`, or `None` when the
    /// type declares no such field.
    fn field(&self, name: &str) -> Option<Value>;

    /// Builds a new instance from a complete name-to-value map.
    fn construct(values: &Map) -> Result<Self, Error>;
}

/// Adapts a [`Record`] implementation into a [`FieldOps`] bundle.
///
/// [`register_record`](crate::register_record) installs this adapter; it is
/// public so custom bundles can delegate to it.
pub struct RecordOps<T> {
    marker: PhantomData<fn() -> T>,
}

impl<T> RecordOps<T> {
    /// The adapter for `T`.
    pub const fn new() -> Self {
        RecordOps {
            marker: PhantomData,
        }
    }
}

impl<T> Default for RecordOps<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> RecordOps<T> {
    fn expect<'a>(&self, obj: &'a Value) -> Result<&'a T, Error> {
        obj.downcast_ref::<T>().ok_or(Error::UnsupportedType {
            type_name: obj.type_name(),
        })
    }

    fn current(&self, record: &T, name: &str) -> Result<Value, Error> {
        record.field(name).ok_or_else(|| Error::MissingField {
            type_name: self.type_name(),
            name: name.to_owned(),
        })
    }
}

impl<T: Record> FieldOps for RecordOps<T> {
    fn type_name(&self) -> &'static str {
        core::any::type_name::<T>()
    }

    fn fields_of(&self, obj: &Value) -> Result<Vec<FieldInfo>, Error> {
        self.expect(obj)?;
        Ok(T::record_fields())
    }

    fn get_field(&self, obj: &Value, name: &str) -> Result<Value, Error> {
        let record = self.expect(obj)?;
        self.current(record, name)
    }

    fn replace_fields(&self, obj: &Value, changes: &Map) -> Result<Value, Error> {
        let record = self.expect(obj)?;
        let declared = T::record_fields();
        let mut unknown: Vec<String> = changes
            .keys()
            .filter(|&key| !declared.iter().any(|field| field.name == key))
            .map(str::to_owned)
            .collect();
        if !unknown.is_empty() {
            unknown.sort();
            return Err(Error::InvalidFieldNames {
                type_name: self.type_name(),
                names: unknown,
            });
        }
        let mut full = Map::with_capacity(declared.len());
        for field in &declared {
            let value = match changes.get(&field.name) {
                Some(changed) => changed.clone(),
                None => self.current(record, &field.name)?,
            };
            full.insert(field.name.clone(), value);
        }
        Ok(Value::new(T::construct(&full)?))
    }

    fn to_mapping(&self, obj: &Value) -> Result<Map, Error> {
        let record = self.expect(obj)?;
        let declared = T::record_fields();
        let mut mapping = Map::with_capacity(declared.len());
        for field in &declared {
            mapping.insert(field.name.clone(), self.current(record, &field.name)?);
        }
        Ok(mapping)
    }

    fn to_sequence(&self, obj: &Value) -> Result<Vec<Value>, Error> {
        let record = self.expect(obj)?;
        T::record_fields()
            .iter()
            .map(|field| self.current(record, &field.name))
            .collect()
    }
}
