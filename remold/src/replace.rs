use core::any::Any;
use core::fmt;

use tracing::trace;

use crate::error::Error;
use crate::flags::{Flag, NoFlag};
use crate::map::Map;
use crate::ops::FieldOps;
use crate::registry;
use crate::value::Value;

/// Marks an update value as "apply literally".
///
/// A [`Map`]-shaped value in an update tree normally means "recurse into
/// this field"; wrapping it in `Literal` suppresses that and assigns the
/// payload as-is. Wrappers are transient: [`replace`] unwraps them and they
/// never end up stored in the result.
///
/// ```
/// use remold::{Literal, Value, mapping, replace};
///
/// let obj = Value::new(mapping! { "a" => mapping! { "x" => 1i64 } });
///
/// // Recurses into "a" and fails: it has no field "w".
/// assert!(replace(&obj, &mapping! { "a" => mapping! { "w" => 5i64 } }).is_err());
///
/// // Replaces "a" wholesale.
/// let swapped = replace(&obj, &mapping! { "a" => Literal::new(mapping! { "w" => 5i64 }) })?;
/// assert_eq!(swapped, Value::new(mapping! { "a" => mapping! { "w" => 5i64 } }));
/// # Ok::<(), remold::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Literal(Value);

impl Literal {
    /// Wraps `value` for literal assignment.
    pub fn new<T>(value: T) -> Self
    where
        T: Any + fmt::Debug + Clone + PartialEq + Send + Sync,
    {
        Literal(Value::new(value))
    }

    /// The wrapped value.
    pub fn into_inner(self) -> Value {
        self.0
    }
}

/// Returns a new object with `changes` applied to `obj`, recursing into
/// nested mappings.
///
/// Each entry of `changes` is resolved in one of three ways:
///
/// 1. a [`Literal`] wrapper assigns its payload as-is,
/// 2. a [`Map`] recurses: the field's current value is fetched and replaced
///    with the nested changes, and
/// 3. anything else is assigned as-is.
///
/// All resolved assignments for one level are applied through a single
/// `replace_fields` call, so a level either applies completely or not at
/// all. An empty `changes` yields a value equal to `obj`.
///
/// Rule 2 means a mapping-shaped value NEVER assigns a mapping, even when
/// the field's current value is itself a mapping; that always reads as "go
/// deeper". Wrap the mapping in [`Literal`] to assign it. Recursion depth is
/// unbounded: a pathologically deep update tree recurses until the stack
/// runs out.
///
/// ```
/// use remold::{Value, mapping, replace};
///
/// let obj = Value::new(mapping! {
///     "a" => mapping! { "x" => 1i64, "y" => 2i64 },
///     "b" => 3i64,
/// });
/// let updated = replace(&obj, &mapping! { "a" => mapping! { "x" => 9i64 } })?;
/// assert_eq!(
///     updated,
///     Value::new(mapping! {
///         "a" => mapping! { "x" => 9i64, "y" => 2i64 },
///         "b" => 3i64,
///     })
/// );
/// # Ok::<(), remold::Error>(())
/// ```
pub fn replace(obj: &Value, changes: &Map) -> Result<Value, Error> {
    replace_with(&NoFlag, obj, changes)
}

/// [`replace`] restricted to what `flag` admits.
///
/// The same flag is threaded through every recursion level; a change naming
/// a hidden field fails with [`Error::InvalidFieldNames`] at whichever level
/// names it.
pub fn replace_with(flag: &dyn Flag, obj: &Value, changes: &Map) -> Result<Value, Error> {
    let ops = registry::resolve(obj)?;
    validate_changes(flag, ops.as_ref(), obj, changes)?;
    trace!(
        type_name = ops.type_name(),
        keys = changes.len(),
        "replace frame"
    );

    let mut flat = Map::with_capacity(changes.len());
    for (key, value) in changes.iter() {
        let resolved = if let Some(wrapped) = value.downcast_ref::<Literal>() {
            wrapped.clone().into_inner()
        } else if let Some(nested) = value.downcast_ref::<Map>() {
            let current = ops.get_field(obj, key)?;
            replace_with(flag, &current, nested)?
        } else {
            value.clone()
        };
        flat.insert(key, resolved);
    }
    ops.replace_fields(obj, &flat)
}

/// Returns a new object with the flat `changes` applied to `obj`.
///
/// No recursion: every change value is assigned as-is, mapping-shaped or
/// not. This is the one-level building block [`replace`] drives.
pub fn replace_fields(obj: &Value, changes: &Map) -> Result<Value, Error> {
    replace_fields_with(&NoFlag, obj, changes)
}

/// [`replace_fields`] restricted to what `flag` admits.
pub fn replace_fields_with(flag: &dyn Flag, obj: &Value, changes: &Map) -> Result<Value, Error> {
    let ops = registry::resolve(obj)?;
    validate_changes(flag, ops.as_ref(), obj, changes)?;
    ops.replace_fields(obj, changes)
}

/// Rejects change keys that are undeclared or hidden by the flag, naming
/// the complete sorted set of offenders. Runs before any recursion so a bad
/// frame never half-applies.
fn validate_changes(
    flag: &dyn Flag,
    ops: &dyn FieldOps,
    obj: &Value,
    changes: &Map,
) -> Result<(), Error> {
    let declared = ops.fields_of(obj)?;
    let mut unknown: Vec<String> = changes
        .keys()
        .filter(|&key| {
            !declared
                .iter()
                .any(|field| field.name == key && flag.admits(field))
        })
        .map(str::to_owned)
        .collect();
    if unknown.is_empty() {
        return Ok(());
    }
    unknown.sort();
    Err(Error::InvalidFieldNames {
        type_name: ops.type_name(),
        names: unknown,
    })
}
