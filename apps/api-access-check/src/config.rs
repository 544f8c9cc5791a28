//! Layered application configuration.
//!
//! Precedence, lowest first: built-in defaults, YAML file, environment
//! (`API_ACCESS__` prefix, `__` separates nested keys).

use std::path::Path;

use anyhow::Context;
use api_access::ApiAccessConfig;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use static_acl_plugin::StaticAclPluginConfig;

pub const ENV_PREFIX: &str = "API_ACCESS__";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub api_access: ApiAccessConfig,
    pub static_acl: StaticAclPluginConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default filter directive when neither `-v` nor `RUST_LOG` is given.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, an optional YAML file and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or any layer fails to
    /// deserialize into [`AppConfig`].
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(path) = path {
            if !path.is_file() {
                anyhow::bail!("config file does not exist: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("invalid configuration")
    }
}
