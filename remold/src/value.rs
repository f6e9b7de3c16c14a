use core::any::{Any, TypeId};
use core::fmt;

/// Object-safe surface over an erased payload.
///
/// Private: the single blanket impl below is the only implementation, which
/// keeps the vtable layout and the `eq_dyn` contract in one place.
trait AnyValue: fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
    fn clone_boxed(&self) -> Box<dyn AnyValue>;
    fn eq_dyn(&self, other: &dyn AnyValue) -> bool;
    fn payload_type_id(&self) -> TypeId;
    fn type_name(&self) -> &'static str;
}

impl<T> AnyValue for T
where
    T: Any + fmt::Debug + Clone + PartialEq + Send + Sync,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn clone_boxed(&self) -> Box<dyn AnyValue> {
        Box::new(self.clone())
    }

    fn eq_dyn(&self, other: &dyn AnyValue) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn payload_type_id(&self) -> TypeId {
        TypeId::of::<T>()
    }

    fn type_name(&self) -> &'static str {
        core::any::type_name::<T>()
    }
}

/// An owned, type-erased value.
///
/// Any `'static` type that is `Clone + PartialEq + Debug + Send + Sync` can
/// be erased into a `Value` and recovered later by downcasting. Equality
/// compares the erased payloads when the concrete types match and is false
/// otherwise; cloning deep-clones the payload.
///
/// ```
/// use remold::Value;
///
/// let v = Value::new(42i64);
/// assert!(v.is::<i64>());
/// assert_eq!(v.downcast_ref::<i64>(), Some(&42));
/// assert_ne!(v, Value::new(42i32));
/// ```
pub struct Value(Box<dyn AnyValue>);

impl Value {
    /// Erases `value` into a [`Value`].
    ///
    /// Erasing something that already is a `Value` is the identity: the
    /// existing payload is reused rather than wrapped a second time.
    pub fn new<T>(value: T) -> Self
    where
        T: Any + fmt::Debug + Clone + PartialEq + Send + Sync,
    {
        let mut slot = Some(value);
        if let Some(reused) = (&mut slot as &mut dyn Any).downcast_mut::<Option<Value>>() {
            if let Some(value) = reused.take() {
                return value;
            }
        }
        match slot {
            Some(payload) => Value(Box::new(payload)),
            // the slot is only emptied by the early return above
            None => unreachable!(),
        }
    }

    /// Returns true if the payload is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.0.as_any().is::<T>()
    }

    /// Borrows the payload as a `T`, if that is its concrete type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }

    /// Moves the payload out as a `T`, handing the value back on mismatch.
    pub fn downcast<T: Any>(self) -> Result<T, Value> {
        if !self.is::<T>() {
            return Err(self);
        }
        match self.0.into_any().downcast::<T>() {
            Ok(payload) => Ok(*payload),
            // the is() check above guarantees the downcast succeeds
            Err(_) => unreachable!(),
        }
    }

    /// The [`TypeId`] of the payload.
    pub fn type_id(&self) -> TypeId {
        self.0.payload_type_id()
    }

    /// The name of the payload's type, as produced by
    /// [`core::any::type_name`].
    pub fn type_name(&self) -> &'static str {
        self.0.type_name()
    }
}

impl Clone for Value {
    fn clone(&self) -> Self {
        Value(self.0.clone_boxed())
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_dyn(other.0.as_ref())
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
