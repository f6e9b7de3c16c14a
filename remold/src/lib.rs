#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod access;
mod error;
mod field;
mod flags;
mod macros;
mod map;
mod ops;
mod record;
mod registry;
mod replace;
mod value;

pub mod convert;

pub use access::{
    as_mapping, as_mapping_with, as_sequence, as_sequence_with, field_items, field_items_with,
    field_keys, field_keys_with, field_values, field_values_with, fields, fields_with, get_field,
    get_field_with,
};
pub use error::Error;
pub use field::FieldInfo;
pub use flags::{Flag, NoFlag, SkipNamed, SkipSensitive};
pub use map::Map;
pub use ops::{FieldOps, MappingOps};
pub use record::{Record, RecordOps};
pub use registry::{register, register_record};
pub use replace::{Literal, replace, replace_fields, replace_fields_with, replace_with};
pub use value::Value;
