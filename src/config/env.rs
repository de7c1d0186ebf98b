use std::borrow::Cow;

use tracing::debug;

use crate::bind::{bind, BindError, Lookup, Record};

/// Looks keys up in the process environment.
///
/// With a prefix, the key `PORT` is read from `<prefix>PORT`. Variables that
/// are unset or not valid unicode count as missing.
#[derive(Debug, Clone, Default)]
pub struct Env {
    prefix: Option<String>,
}

impl Env {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prefixed(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }
}

impl Lookup for Env {
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        let value = match &self.prefix {
            Some(prefix) => std::env::var(format!("{prefix}{key}")),
            None => std::env::var(key),
        };
        value.ok().map(Cow::Owned)
    }
}

/// Binds a record straight from process environment variables.
///
/// No tokenizing or interpolation happens; values are taken as set.
pub fn from_env<T: Record + Default>() -> Result<T, BindError> {
    from_env_with(&Env::new())
}

/// Like [`from_env`], reading through the given [`Env`] (for a prefix).
pub fn from_env_with<T: Record + Default>(env: &Env) -> Result<T, BindError> {
    debug!(prefix = ?env.prefix, "binding config from environment");
    let mut record = T::default();
    bind(&mut record, env)?;
    Ok(record)
}
