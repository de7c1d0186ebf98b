//! File-based configuration source.

use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::source::ConfigSource;
use super::{ConfigError, Vars};

/// A configuration source that loads from a dotenv file.
///
/// Files can be marked as required or optional. Required files that don't exist
/// cause an error; optional files that don't exist are silently skipped.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    required: bool,
}

impl FileSource {
    /// Creates a new file source.
    ///
    /// If `required` is true, loading fails if the file doesn't exist.
    pub fn new(path: impl AsRef<Path>, required: bool) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            required,
        }
    }
}

impl ConfigSource for FileSource {
    fn load_into(&self, vars: &mut Vars) -> Result<(), ConfigError> {
        let read_error = |source| ConfigError::ReadError {
            path: self.path.clone(),
            source,
        };

        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && !self.required => {
                debug!(path = %self.path.display(), "optional config file not found, skipping");
                return Ok(());
            }
            Err(e) => return Err(read_error(e)),
        };

        // The file is closed when `file` drops, on success and on error alike.
        match vars.parse_into(file) {
            Ok(()) => {
                debug!(path = %self.path.display(), "loaded config file");
                Ok(())
            }
            Err(ConfigError::Input(e)) => Err(read_error(e)),
            Err(e) => Err(e),
        }
    }
}
