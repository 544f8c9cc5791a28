//! Configuration for the api-access module.

use api_access_sdk::DenialDisclosure;
use serde::{Deserialize, Serialize};

/// Module configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiAccessConfig {
    /// Name the checker is registered under in the [`CheckerRegistry`](crate::CheckerRegistry).
    pub checker_name: String,

    /// How denials are rendered by the calling layer.
    pub disclosure: DenialDisclosure,
}

impl Default for ApiAccessConfig {
    fn default() -> Self {
        Self {
            checker_name: "role-based".to_owned(),
            disclosure: DenialDisclosure::Uniform,
        }
    }
}
