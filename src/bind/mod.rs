//! Binding resolved string values into typed records.
//!
//! A record describes its fields through a static [`Field`] schema (usually
//! generated by [`record!`](crate::record)). The [`Binder`] walks that schema,
//! picks a string for every field from a [`Lookup`], and coerces it into the
//! field's declared [`Kind`].
//!
//! For each field the first non-empty value wins:
//! 1. the explicit `key` override, or else the generated key (the field path
//!    from the root record joined with `_` and upper-cased);
//! 2. the bare field name;
//! 3. the field's `default` literal.
//!
//! A field with no value keeps whatever it held before binding.

mod error;
mod field;
mod record;
mod value;

use std::borrow::Cow;

use tracing::trace;

pub use error::BindError;
pub use field::{Field, Kind};

/// Source of string values by key. An empty string counts as missing.
pub trait Lookup {
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>>;
}

impl<F> Lookup for F
where
    F: Fn(&str) -> Option<String>,
{
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        self(key).map(Cow::Owned)
    }
}

/// A record whose fields can be bound.
pub trait Record {
    const FIELDS: &'static [Field];

    fn bind_fields(&mut self, binder: &mut Binder<'_>) -> Result<(), BindError>;
}

/// A single field value: a leaf type with a coercion, or a nested record.
pub trait Bindable {
    const KIND: Kind;

    fn bind(&mut self, binder: &mut Binder<'_>, field: &Field) -> Result<(), BindError>;
}

/// Walks a record tree, tracking the path of enclosing record fields.
pub struct Binder<'a> {
    lookup: &'a dyn Lookup,
    path: Vec<&'static str>,
}

impl<'a> Binder<'a> {
    pub fn new(lookup: &'a dyn Lookup) -> Self {
        Self {
            lookup,
            path: Vec::new(),
        }
    }

    /// Binds one field of the record currently being walked.
    pub fn field<V: Bindable>(&mut self, field: &Field, value: &mut V) -> Result<(), BindError> {
        value.bind(self, field)
    }

    /// Binds the fields of a nested record, with `field` appended to the path.
    pub fn nested<R: Record>(&mut self, field: &Field, record: &mut R) -> Result<(), BindError> {
        self.path.push(field.ident());
        let result = record.bind_fields(self);
        self.path.pop();
        result
    }

    /// Picks the string value for `field`, or `None` if nothing provides one.
    pub fn resolve(&self, field: &Field) -> Option<String> {
        let key = match field.key {
            Some(key) => Cow::Borrowed(key),
            None => Cow::Owned(generated_key(&self.path, field)),
        };

        if let Some(value) = self.get(&key) {
            trace!(field = field.name, key = %key, "bound from key");
            return Some(value);
        }

        if let Some(value) = self.get(field.ident()) {
            trace!(field = field.name, "bound from field name");
            return Some(value);
        }

        match field.default {
            Some(default) if !default.is_empty() => {
                trace!(field = field.name, "bound from default");
                Some(default.to_owned())
            }
            _ => None,
        }
    }

    fn get(&self, key: &str) -> Option<String> {
        self.lookup
            .lookup(key)
            .filter(|value| !value.is_empty())
            .map(Cow::into_owned)
    }
}

/// Binds every field of `record` from `lookup`.
///
/// Stops at the first coercion failure; fields bound before it keep their
/// new values.
pub fn bind<T: Record>(record: &mut T, lookup: &dyn Lookup) -> Result<(), BindError> {
    record.bind_fields(&mut Binder::new(lookup))
}

/// Lists the first-tier lookup key of every leaf field of `T`.
///
/// Keys come in declaration order, nested records expanded in place. Each is
/// the field's `key` override or its generated key; the bare field name and
/// default fallbacks are not listed.
pub fn lookup_keys<T: Record>() -> Vec<String> {
    let mut keys = Vec::new();
    collect_keys(T::FIELDS, &mut Vec::new(), &mut keys);
    keys
}

fn collect_keys(fields: &[Field], path: &mut Vec<&'static str>, keys: &mut Vec<String>) {
    for field in fields {
        match field.kind {
            Kind::Record(nested) => {
                path.push(field.ident());
                collect_keys(nested, path, keys);
                path.pop();
            }
            _ => keys.push(match field.key {
                Some(key) => key.to_owned(),
                None => generated_key(path, field),
            }),
        }
    }
}

fn generated_key(path: &[&'static str], field: &Field) -> String {
    let mut key = String::new();
    for segment in path.iter().copied().chain([field.ident()]) {
        if !key.is_empty() {
            key.push('_');
        }
        key.push_str(segment);
    }
    key.to_uppercase()
}
