use core::fmt;

use crate::error::Error;
use crate::field::FieldInfo;

/// Narrows the set of fields an operation can see.
///
/// Every public operation has a `*_with` variant taking a `&dyn Flag`; the
/// plain variant passes [`NoFlag`]. A field the flag does not admit behaves
/// exactly as if the type never declared it: lookups fail with
/// [`Error::MissingField`] and replaces fail with
/// [`Error::InvalidFieldNames`].
pub trait Flag: fmt::Debug + Send + Sync {
    /// Whether `field` stays visible under this flag.
    fn admits(&self, field: &FieldInfo) -> bool {
        let _ = field;
        true
    }
}

/// The identity flag: admits every field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoFlag;

impl Flag for NoFlag {}

/// Hides fields whose descriptor is marked sensitive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SkipSensitive;

impl Flag for SkipSensitive {
    fn admits(&self, field: &FieldInfo) -> bool {
        !field.sensitive
    }
}

/// Hides an explicit list of fields by name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkipNamed {
    names: Vec<String>,
}

impl SkipNamed {
    /// Builds the flag from a list of field names to hide.
    ///
    /// The list may not contain empty names or duplicates; either fails with
    /// [`Error::FlagConstruction`].
    pub fn new<I, S>(names: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.iter().any(String::is_empty) {
            return Err(Error::FlagConstruction {
                flag: "SkipNamed",
                reason: "field names must be non-empty".to_owned(),
            });
        }
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(Error::FlagConstruction {
                    flag: "SkipNamed",
                    reason: format!("duplicate field name {name:?}"),
                });
            }
        }
        Ok(SkipNamed { names })
    }
}

impl Flag for SkipNamed {
    fn admits(&self, field: &FieldInfo) -> bool {
        !self.names.iter().any(|name| *name == field.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flag_admits_everything() {
        let sensitive = FieldInfo::new("token", "alloc::string::String").with_sensitive();
        assert!(NoFlag.admits(&sensitive));
        assert!(NoFlag.admits(&FieldInfo::new("x", "i64")));
    }

    #[test]
    fn skip_sensitive_keys_off_the_marker() {
        let flag = SkipSensitive;
        assert!(flag.admits(&FieldInfo::new("x", "i64")));
        assert!(!flag.admits(&FieldInfo::new("token", "alloc::string::String").with_sensitive()));
    }

    #[test]
    fn skip_named_hides_listed_fields() {
        let flag = SkipNamed::new(["b"]).unwrap();
        assert!(flag.admits(&FieldInfo::new("a", "i64")));
        assert!(!flag.admits(&FieldInfo::new("b", "i64")));
    }

    #[test]
    fn skip_named_rejects_bad_configurations() {
        assert!(matches!(
            SkipNamed::new(["", "a"]),
            Err(Error::FlagConstruction { flag: "SkipNamed", .. })
        ));
        assert!(matches!(
            SkipNamed::new(["a", "b", "a"]),
            Err(Error::FlagConstruction { flag: "SkipNamed", .. })
        ));
    }
}
