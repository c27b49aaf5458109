//! Settings for the command line front end.
//!
//! Layered from built-in defaults, an optional settings file (any format the
//! `config` crate understands, `verbclad.toml` by default) and `VERBCLAD_*`
//! environment variables, later layers winning.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Result;

pub const DEFAULT_SETTINGS_FILE: &str = "verbclad";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// JSON file holding the parsed forest.
    pub resource: Option<PathBuf>,
    /// `tracing_subscriber::EnvFilter` directives.
    pub log_filter: String,
}

impl Settings {
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let source = match file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_SETTINGS_FILE).required(false),
        };
        let settings = Config::builder()
            .set_default("log_filter", "info")?
            .add_source(source)
            .add_source(Environment::with_prefix("VERBCLAD"))
            .build()?
            .try_deserialize::<Settings>()?;
        Ok(settings)
    }
}
