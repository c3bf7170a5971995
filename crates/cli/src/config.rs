//! CLI configuration utilities

use anyhow::{Context, Result};
use listkeeper_core::ClientConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the default configuration inside the state directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// File name of the durable token storage inside the state directory
pub const STORAGE_FILE_NAME: &str = "storage.json";

/// Settings for the terminal client
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Backend connection settings
    pub client: ClientConfig,
}

impl Settings {
    /// Load settings from defaults, an optional TOML file and `LISTKEEPER_*`
    /// environment variables, in that order of precedence
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing or any source fails to
    /// parse
    pub fn load(file: Option<&Path>, required: bool) -> Result<Self> {
        let defaults = ClientConfig::default();

        let mut builder = config::Config::builder()
            .set_default("client.server_url", defaults.server_url)?
            .set_default("client.api_path", defaults.api_path)?
            .set_default("client.auth_path", defaults.auth_path)?
            .set_default("client.user_agent", defaults.user_agent)?;

        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(required));
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix("LISTKEEPER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("failed to load configuration")?;

        let settings: Self = settings.try_deserialize()?;
        settings.client.validate()?;
        Ok(settings)
    }

    /// Resolve which file to read and load it. An explicit path must exist;
    /// the default path in the state directory is optional.
    pub fn load_for(state_dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(Some(path), true),
            None => Self::load(Some(&state_dir.join(CONFIG_FILE_NAME)), false),
        }
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Determine the state directory: explicit flag or `LISTKEEPER_STATE_DIR`,
/// then the platform data directory
pub fn resolve_state_dir(explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("listkeeper")
    })
}

/// Write the default configuration file
pub fn generate_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists, pass --force to overwrite",
            path.display()
        );
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, Settings::default().to_toml()?)
        .with_context(|| format!("failed to write {}", path.display()))
}
