//! Small value-conversion helpers.
//!
//! These are independent utilities with no interaction with the dispatch
//! registry or the replace engine: a [`Convert`] is just a fallible
//! `Value -> Value` step, and the two wrappers here make one conditional.

use core::any::Any;
use core::marker::PhantomData;

use crate::error::Error;
use crate::value::Value;

/// A fallible value-to-value conversion.
///
/// Implemented for free by any `Fn(Value) -> Result<Value, Error>` closure.
pub trait Convert {
    /// Runs the conversion.
    fn apply(&self, value: Value) -> Result<Value, Error>;
}

impl<F> Convert for F
where
    F: Fn(Value) -> Result<Value, Error>,
{
    fn apply(&self, value: Value) -> Result<Value, Error> {
        self(value)
    }
}

/// Passes an absent value through untouched, converting otherwise.
///
/// "Absent" means the payload is an `Option<Value>` holding `None`.
///
/// ```
/// use remold::Value;
/// use remold::convert::{Convert, Optional};
///
/// let double = Optional(|v: Value| {
///     let n = v.downcast_ref::<i64>().copied().unwrap_or(0);
///     Ok(Value::new(n * 2))
/// });
///
/// let absent = Value::new(None::<Value>);
/// assert_eq!(double.apply(absent.clone())?, absent);
/// assert_eq!(double.apply(Value::new(21i64))?, Value::new(42i64));
/// # Ok::<(), remold::Error>(())
/// ```
pub struct Optional<C>(pub C);

impl<C: Convert> Convert for Optional<C> {
    fn apply(&self, value: Value) -> Result<Value, Error> {
        if matches!(value.downcast_ref::<Option<Value>>(), Some(None)) {
            return Ok(value);
        }
        self.0.apply(value)
    }
}

/// Passes values that already are a `T` through untouched, converting
/// otherwise.
pub struct Unless<T, C> {
    convert: C,
    marker: PhantomData<fn() -> T>,
}

impl<T, C> Unless<T, C> {
    /// Wraps `convert` so that `T` payloads bypass it.
    pub fn new(convert: C) -> Self {
        Unless {
            convert,
            marker: PhantomData,
        }
    }
}

impl<T: Any, C: Convert> Convert for Unless<T, C> {
    fn apply(&self, value: Value) -> Result<Value, Error> {
        if value.is::<T>() {
            return Ok(value);
        }
        self.convert.apply(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stringify(value: Value) -> Result<Value, Error> {
        Ok(Value::new(format!("{value:?}")))
    }

    #[test]
    fn closures_are_converters() {
        let converted = stringify.apply(Value::new(5i64)).unwrap();
        assert_eq!(converted, Value::new(String::from("5")));
    }

    #[test]
    fn optional_passes_absent_values_through() {
        let convert = Optional(stringify);
        let absent = Value::new(None::<Value>);
        assert_eq!(convert.apply(absent.clone()).unwrap(), absent);
        assert_eq!(
            convert.apply(Value::new(5i64)).unwrap(),
            Value::new(String::from("5"))
        );
    }

    #[test]
    fn unless_skips_matching_types() {
        let convert = Unless::<String, _>::new(stringify);
        let already = Value::new(String::from("kept"));
        assert_eq!(convert.apply(already.clone()).unwrap(), already);
        assert_eq!(
            convert.apply(Value::new(5i64)).unwrap(),
            Value::new(String::from("5"))
        );
    }
}
