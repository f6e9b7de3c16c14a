use core::any::Any;

use indexmap::IndexMap;

use crate::error::Error;
use crate::value::Value;

/// An insertion-ordered mapping from field names to erased values.
///
/// `Map` is both the library's plain-mapping object (fully supported by
/// every field operation out of the box) and the shape of the update trees
/// handed to [`replace`](crate::replace).
///
/// Iteration follows insertion order, inserting over an existing key keeps
/// its original position, and equality ignores order entirely.
///
/// ```
/// use remold::{Map, Value, mapping};
///
/// let mut a = Map::new();
/// a.insert("x", Value::new(1i64));
/// a.insert("y", Value::new(2i64));
///
/// let b = mapping! { "y" => 2i64, "x" => 1i64 };
/// assert_eq!(a, b);
/// assert_eq!(a.keys().collect::<Vec<_>>(), ["x", "y"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Map {
    entries: IndexMap<String, Value>,
}

impl Map {
    /// An empty mapping.
    pub fn new() -> Self {
        Map {
            entries: IndexMap::new(),
        }
    }

    /// An empty mapping with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Map {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Inserts a value under `key`, returning the previous value if the key
    /// was already present. An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    /// Borrows the value under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns true if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Looks up `name` and downcasts it to `T`, cloning the payload.
    ///
    /// `owner` names the type on whose behalf the lookup happens and is used
    /// in error messages. A missing entry is [`Error::MissingField`]; a
    /// present entry of the wrong type is [`Error::TypeMismatch`]. This is
    /// the workhorse for [`Record::construct`](crate::Record::construct)
    /// implementations:
    ///
    /// ```
    /// # use remold::{Error, Map, Value};
    /// fn width_of(owner: &'static str, values: &Map) -> Result<u32, Error> {
    ///     values.get_as::<u32>(owner, "width")
    /// }
    ///
    /// let mut values = Map::new();
    /// values.insert("width", Value::new(800u32));
    /// assert_eq!(width_of("Canvas", &values), Ok(800));
    /// ```
    pub fn get_as<T: Any + Clone>(&self, owner: &'static str, name: &str) -> Result<T, Error> {
        let value = self.get(name).ok_or_else(|| Error::MissingField {
            type_name: owner,
            name: name.to_owned(),
        })?;
        value
            .downcast_ref::<T>()
            .cloned()
            .ok_or_else(|| Error::TypeMismatch {
                field: name.to_owned(),
                expected: core::any::type_name::<T>(),
                actual: value.type_name(),
            })
    }
}

impl FromIterator<(String, Value)> for Map {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Map {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<(String, Value)> for Map {
    fn extend<I: IntoIterator<Item = (String, Value)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl IntoIterator for Map {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
