use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;
use tracing::trace;

use crate::error::Error;
use crate::map::Map;
use crate::ops::{FieldOps, MappingOps};
use crate::record::{Record, RecordOps};
use crate::value::Value;

/// How a bundle got into the table. Native entries come from a type's own
/// [`Record`] capability and are never displaced by plain registrations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Provenance {
    Registered,
    Native,
}

#[derive(Clone)]
struct Entry {
    ops: Arc<dyn FieldOps>,
    provenance: Provenance,
}

static TABLE: LazyLock<RwLock<HashMap<TypeId, Entry>>> = LazyLock::new(|| {
    let mut table = HashMap::new();
    table.insert(
        TypeId::of::<Map>(),
        Entry {
            ops: Arc::new(MappingOps) as Arc<dyn FieldOps>,
            provenance: Provenance::Registered,
        },
    );
    RwLock::new(table)
});

fn insert(
    type_id: TypeId,
    type_name: &'static str,
    ops: Arc<dyn FieldOps>,
    provenance: Provenance,
) {
    let mut table = TABLE.write();
    match table.get(&type_id) {
        Some(existing) if existing.provenance > provenance => {
            trace!(type_name, "keeping native field ops over a plain registration");
        }
        _ => {
            trace!(type_name, ?provenance, "installing field ops");
            table.insert(type_id, Entry { ops, provenance });
        }
    }
}

/// Installs a [`FieldOps`] bundle for `T`.
///
/// This is the open extension point: any caller, including downstream
/// crates, may add support for its own types at any time. Registering again
/// for the same type replaces the previous bundle, except that a bundle
/// installed through [`register_record`] stays in place.
///
/// Registration is expected to happen during single-threaded setup; callers
/// running it concurrently with lookups must serialize themselves.
pub fn register<T: Any>(ops: impl FieldOps + 'static) {
    insert(
        TypeId::of::<T>(),
        std::any::type_name::<T>(),
        Arc::new(ops),
        Provenance::Registered,
    );
}

/// Installs the [`RecordOps`] adapter for a [`Record`] type.
///
/// Entries installed this way rank above plain [`register`] calls: the
/// type's own capability wins over externally supplied bundles.
pub fn register_record<T: Record>() {
    insert(
        TypeId::of::<T>(),
        std::any::type_name::<T>(),
        Arc::new(RecordOps::<T>::new()),
        Provenance::Native,
    );
}

/// Looks up the bundle serving `value`'s runtime type.
pub(crate) fn resolve(value: &Value) -> Result<Arc<dyn FieldOps>, Error> {
    let table = TABLE.read();
    match table.get(&value.type_id()) {
        Some(entry) => Ok(Arc::clone(&entry.ops)),
        None => Err(Error::UnsupportedType {
            type_name: value.type_name(),
        }),
    }
}
