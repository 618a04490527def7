//! Layered generator configuration: defaults, then `schemagen.toml` (or
//! `--config`), then `SCHEMAGEN_*` variables, then flags.

use std::path::Path;

use anyhow::{Context, Result, bail};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::Serialize;
use vouch_schemagen::GeneratorConfig;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "schemagen.toml";

/// Environment prefix, e.g. `SCHEMAGEN_CRATE_PATH`.
pub const ENV_PREFIX: &str = "SCHEMAGEN_";

const KEYS: &[&str] = &[
    "crate_path",
    "containers",
    "container_modules",
    "bearing",
    "emit_reflect",
];

/// Scalar settings given as flags; unset ones leave lower layers alone.
#[derive(Debug, Default, Serialize)]
pub struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crate_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emit_reflect: Option<bool>,
}

pub fn load(explicit: Option<&Path>, overrides: &Overrides) -> Result<GeneratorConfig> {
    let mut figment = Figment::from(Serialized::defaults(GeneratorConfig::default()));

    match explicit {
        Some(path) => {
            if !path.is_file() {
                bail!("config file not found: {}", path.display());
            }
            tracing::debug!(path = %path.display(), "loading config file");
            figment = figment.merge(Toml::file(path));
        }
        None => {
            figment = figment.merge(Toml::file(DEFAULT_CONFIG_FILE));
        }
    }

    figment
        .merge(Env::prefixed(ENV_PREFIX).only(KEYS))
        .merge(Serialized::defaults(overrides))
        .extract()
        .context("invalid schemagen configuration")
}
