//! Configuration for the layergen CLI
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `LAYERGEN_` prefix)
//! 2. `./layergen.toml` (project-local)
//! 3. `~/.config/layergen/config.toml` (user config, XDG)
//! 4. Hardcoded defaults (fallback)
//!
//! Command-line flags override all of these.
//!
//! # Example Configuration
//!
//! ```toml
//! output_dir = "./build"
//! package = "com.acme.shop"
//! validate = true
//! color = true
//! ```

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "LAYERGEN_";

/// Project-local configuration file name
pub const LOCAL_CONFIG_FILE: &str = "layergen.toml";

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Directory the archive is written to
    pub output_dir: PathBuf,

    /// Package path used when `--package` is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,

    /// Apply input syntax checks before generating
    pub validate: bool,

    /// Colored terminal output
    pub color: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            package: None,
            validate: true,
            color: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from the default locations
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - A configuration file cannot be read or parsed
    /// - Configuration values fail type conversion
    pub fn load() -> anyhow::Result<Self> {
        let mut figment = Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?));

        if let Some(user_config) = Self::user_config_path() {
            if user_config.exists() {
                figment = figment.merge(Toml::file(&user_config));
            }
        }

        let local_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX));

        let config = figment.extract()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// Environment variables still override values from the file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - The file does not exist or contains invalid TOML
    /// - Configuration values fail type conversion
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }

        let config = Figment::new()
            .merge(Toml::string(&toml::to_string(&Self::default())?))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()?;

        Ok(config)
    }

    /// User configuration path (`~/.config/layergen/config.toml` on Linux)
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("layergen").join("config.toml"))
    }
}
