//! Loading dotenv sources into a variable table.

mod builder;
mod env;
mod error;
mod file;
mod json;
mod parse;
mod resolve;
mod source;
mod vars;

pub use builder::{Config, DOTENV_FILE};
pub use env::{from_env, from_env_with, Env};
pub use error::ConfigError;
pub use file::FileSource;
pub use json::from_json;
pub use resolve::resolve_references;
pub use source::{BytesSource, ConfigSource};
pub use vars::Vars;
