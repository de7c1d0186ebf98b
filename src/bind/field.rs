/// The declared kind of a bindable field.
///
/// Coercion itself is picked at compile time by the field type's
/// [`Bindable`](crate::Bindable) impl. `Kind` describes the same choice at
/// runtime, and `Kind::Record` links a field to its nested schema so the
/// whole tree can be walked without a value, as [`lookup_keys`](crate::lookup_keys)
/// does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Kind {
    Text,
    /// Signed integer of the given bit width.
    Signed(u32),
    /// Unsigned integer of the given bit width.
    Unsigned(u32),
    F32,
    F64,
    Bool,
    /// Raw bytes of the string, unencoded.
    Bytes,
    /// A nested record and its fields.
    Record(&'static [Field]),
}

/// Schema-level description of one record field.
///
/// Built in `const` context by [`record!`](crate::record), e.g.
/// `Field::new("port", Kind::Unsigned(16)).key("PORT").default("8080")`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub name: &'static str,
    /// Lookup key used instead of the one generated from the field path.
    pub key: Option<&'static str>,
    /// Literal used when no lookup yields a value.
    pub default: Option<&'static str>,
    pub kind: Kind,
}

impl Field {
    pub const fn new(name: &'static str, kind: Kind) -> Self {
        Self {
            name,
            key: None,
            default: None,
            kind,
        }
    }

    pub const fn key(mut self, key: &'static str) -> Self {
        self.key = Some(key);
        self
    }

    pub const fn default(mut self, default: &'static str) -> Self {
        self.default = Some(default);
        self
    }

    /// Field name as written in source, without a raw-identifier prefix.
    pub fn ident(&self) -> &'static str {
        self.name.strip_prefix("r#").unwrap_or(self.name)
    }
}
