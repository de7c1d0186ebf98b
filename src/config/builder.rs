use std::path::Path;

use tracing::debug;

use super::file::FileSource;
use super::source::{BytesSource, ConfigSource};
use super::{ConfigError, Vars};
use crate::bind::{bind, Record};
use crate::Error;

/// Conventional dotenv file name used by [`Config::dotenv`].
pub const DOTENV_FILE: &str = ".env";

/// Builder for loading configuration from dotenv sources.
///
/// Sources are tokenized in registration order into one variable table, with
/// later sources overriding same-named variables of earlier ones. References
/// are then resolved and the result is bound into the target record.
///
/// ## Variable References
///
/// Values can reference other variables with `$NAME` or `${NAME}`:
///
/// ```text
/// HOST=localhost
/// URL=http://$HOST /api
/// ```
///
/// Use `\$NAME` for a literal `$NAME`.
///
/// ## Example
///
/// ```no_run
/// use envbind::Config;
///
/// envbind::record! {
///     #[derive(Default)]
///     struct MyConfig {
///         name: String,
///         port: u16 => { default = "8080" },
///     }
/// }
///
/// let config: MyConfig = Config::builder()
///     .with_file("config/default.env", true)
///     .with_file("config/local.env", false)
///     .build()?;
/// # Ok::<(), envbind::Error>(())
/// ```
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .build() is called"]
pub struct Config {
    sources: Vec<Box<dyn ConfigSource>>,
}

impl Config {
    /// Creates a new configuration builder with no sources.
    pub fn builder() -> Self {
        Self::default()
    }

    /// Creates a builder that reads the required `.env` file from the
    /// working directory.
    pub fn dotenv() -> Self {
        Self::builder().with_file(DOTENV_FILE, true)
    }

    /// Adds a dotenv file to be loaded.
    ///
    /// If `required` is `true`, the build will fail if the file doesn't exist.
    /// Optional files that are missing are silently skipped.
    pub fn with_file(self, path: impl AsRef<Path>, required: bool) -> Self {
        self.with_source(FileSource::new(path, required))
    }

    /// Adds an in-memory dotenv buffer.
    pub fn with_bytes(self, input: impl Into<Vec<u8>>) -> Self {
        self.with_source(BytesSource::new(input))
    }

    /// Adds any other source.
    pub fn with_source(mut self, source: impl ConfigSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Loads every source and resolves references, returning the table.
    pub fn vars(self) -> Result<Vars, ConfigError> {
        let mut raw = Vars::new();

        for source in &self.sources {
            source.load_into(&mut raw)?;
        }

        debug!(
            sources = self.sources.len(),
            vars = raw.len(),
            "loaded dotenv sources"
        );

        raw.interpolate()
    }

    /// Builds a default `T` and binds the loaded configuration into it.
    pub fn build<T: Record + Default>(self) -> Result<T, Error> {
        let mut record = T::default();
        self.build_into(&mut record)?;
        Ok(record)
    }

    /// Binds the loaded configuration into an existing record.
    ///
    /// Fields without a value keep their current contents.
    pub fn build_into<T: Record>(self, record: &mut T) -> Result<(), Error> {
        let vars = self.vars()?;
        bind(record, &vars)?;
        Ok(())
    }
}
