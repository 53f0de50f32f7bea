use std::{
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

use anyhow::Context;
use config::{Config, Environment, File};
use serde::Deserialize;
use tracing::warn;

pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(size) => size,
    None => unreachable!(),
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub source_path: PathBuf,
    pub page_size: usize,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from("fixtures/scorecard.json"),
            page_size: DEFAULT_PAGE_SIZE.get(),
            log_level: "info".into(),
        }
    }
}

impl Settings {
    /// Configured page size; zero falls back to the default.
    pub fn page_size(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.page_size).unwrap_or_else(|| {
            warn!(
                default = DEFAULT_PAGE_SIZE.get(),
                "page_size must be positive; using default"
            );
            DEFAULT_PAGE_SIZE
        })
    }
}

/// Defaults, then `scorecard.toml` in the working directory if present, then
/// `explicit` if given, then `APP__*` environment variables.
pub fn load_settings(explicit: Option<&Path>) -> anyhow::Result<Settings> {
    let mut builder = Config::builder().add_source(File::with_name("scorecard").required(false));
    if let Some(path) = explicit {
        builder = builder.add_source(File::from(path).required(true));
    }
    let raw = builder
        .add_source(
            Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("failed to assemble scorecard settings")?;

    raw.try_deserialize()
        .context("failed to parse scorecard settings")
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
