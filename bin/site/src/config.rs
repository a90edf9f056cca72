//! Server configuration.
//!
//! Loaded via the `config` crate from `SITE_`-prefixed environment
//! variables. Leptos' own options (site address, package directory name)
//! come from `[package.metadata.leptos]` instead.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment};
use serde::Deserialize;

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Public origin of the site, used to build absolute sitemap URLs.
    #[serde(default = "default_public_url")]
    pub public_url: String,

    /// Directory holding the compiled wasm and CSS bundle served at `/pkg`.
    #[serde(default = "default_pkg_dir")]
    pub pkg_dir: String,
}

fn default_public_url() -> String {
    "http://127.0.0.1:3000".to_string()
}

fn default_pkg_dir() -> String {
    "target/site/pkg".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            public_url: default_public_url(),
            pkg_dir: default_pkg_dir(),
        }
    }
}

impl SiteConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(
            Config::builder().add_source(
                Environment::with_prefix("SITE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            ),
        )
    }

    fn load(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }
}
