/// Describes one addressable field of a value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldInfo {
    /// Name of the field.
    pub name: String,

    /// Name of the field's declared type.
    ///
    /// For mapping-backed values this is the type of the current value under
    /// the key, since mappings declare no per-key types.
    pub type_name: &'static str,

    /// Whether the field is marked sensitive. Flags can hide sensitive
    /// fields from every operation; see [`SkipSensitive`](crate::SkipSensitive).
    pub sensitive: bool,
}

impl FieldInfo {
    /// Describes a regular (non-sensitive) field.
    pub fn new(name: impl Into<String>, type_name: &'static str) -> Self {
        FieldInfo {
            name: name.into(),
            type_name,
            sensitive: false,
        }
    }

    /// Marks the field as sensitive.
    pub fn with_sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }
}
