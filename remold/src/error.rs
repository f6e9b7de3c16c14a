/// Errors that can occur when accessing or replacing fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The value's runtime type has no registered field operations.
    UnsupportedType {
        /// Name of the offending type.
        type_name: &'static str,
    },

    /// A replace call named one or more fields the target does not declare
    /// (or that the supplied flag hides).
    InvalidFieldNames {
        /// Name of the target type.
        type_name: &'static str,
        /// Every offending name, sorted.
        names: Vec<String>,
    },

    /// A field lookup named a field the target does not declare (or that the
    /// supplied flag hides). Also raised when a record constructor is handed
    /// an incomplete value map.
    MissingField {
        /// Name of the target type.
        type_name: &'static str,
        /// The name that was looked up.
        name: String,
    },

    /// A flag was built with invalid configuration.
    FlagConstruction {
        /// Name of the flag type.
        flag: &'static str,
        /// What was wrong with the configuration.
        reason: String,
    },

    /// A record constructor received a value of the wrong concrete type for
    /// one of its fields.
    TypeMismatch {
        /// The field being filled in.
        field: String,
        /// The declared type of the field.
        expected: &'static str,
        /// The type of the value that was supplied.
        actual: &'static str,
    },
}

impl core::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::UnsupportedType { type_name } => {
                write!(f, "no field operations registered for type {type_name}")
            }
            Error::InvalidFieldNames { type_name, names } => {
                write!(f, "invalid field names for {type_name}: {names:?}")
            }
            Error::MissingField { type_name, name } => {
                write!(f, "type {type_name} has no field named {name:?}")
            }
            Error::FlagConstruction { flag, reason } => {
                write!(f, "{flag} flag cannot be constructed: {reason}")
            }
            Error::TypeMismatch {
                field,
                expected,
                actual,
            } => {
                write!(f, "field {field:?}: expected type {expected}, got {actual}")
            }
        }
    }
}
