//! The flat variable table produced by tokenizing dotenv input.

use std::borrow::Cow;
use std::collections::HashMap;
use std::io::Read;

use super::parse::parse_vars;
use super::resolve::resolve_references;
use super::ConfigError;
use crate::bind::Lookup;

/// Mapping from variable name to its string value.
///
/// Names are case-sensitive. Inserting an existing name overwrites the
/// previous value, which is how later sources override earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vars {
    inner: HashMap<String, String>,
}

impl Vars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenizes `reader` into a fresh table.
    pub fn parse<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let mut vars = Self::new();
        vars.parse_into(reader)?;
        Ok(vars)
    }

    /// Tokenizes `reader` into this table, overwriting same-named entries.
    pub fn parse_into<R: Read>(&mut self, reader: R) -> Result<(), ConfigError> {
        parse_vars(reader, self).map_err(ConfigError::Input)
    }

    /// Returns a new table with every `$NAME` / `${NAME}` reference resolved.
    pub fn interpolate(&self) -> Result<Vars, ConfigError> {
        resolve_references(self)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.inner.insert(name.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_inner(self) -> HashMap<String, String> {
        self.inner
    }
}

impl From<HashMap<String, String>> for Vars {
    fn from(inner: HashMap<String, String>) -> Self {
        Self { inner }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Vars {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            inner: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Lookup for Vars {
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(Cow::Borrowed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_then_interpolate() {
        let vars = Vars::parse("A=1\nB=$A\n".as_bytes()).unwrap();
        assert_eq!(vars.get("A"), Some("1"));
        assert_eq!(vars.get("B"), Some("$A"));

        let resolved = vars.interpolate().unwrap();
        assert_eq!(resolved.get("A"), Some("1"));
        assert_eq!(resolved.get("B"), Some("1"));
    }

    #[test]
    fn test_parse_into_overwrites_in_order() {
        let mut vars = Vars::new();
        vars.parse_into("XX=first\n".as_bytes()).unwrap();
        vars.parse_into("XX=second\nYY=1".as_bytes()).unwrap();

        assert_eq!(vars.len(), 2);
        assert_eq!(vars.get("XX"), Some("second"));
    }

    #[test]
    fn test_lookup_borrows_value() {
        let vars: Vars = [("KEY", "value")].into_iter().collect();
        assert_eq!(vars.lookup("KEY").as_deref(), Some("value"));
        assert_eq!(vars.lookup("key"), None);
    }
}
