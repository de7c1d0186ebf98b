//! Dotenv loading with variable interpolation and typed binding.
//!
//! Text in `NAME=VALUE` form is tokenized into a [`Vars`] table, `$NAME` /
//! `${NAME}` references are resolved against that table, and the result is
//! bound into a record declared with [`record!`].

pub mod bind;
pub mod config;
mod error;

pub use bind::{bind, lookup_keys, BindError, Bindable, Binder, Field, Kind, Lookup, Record};
pub use config::{from_env, from_json, Config, ConfigError, Env, Vars};
pub use error::Error;
