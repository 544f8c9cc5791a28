//! Static API Access Plugin
//!
//! This plugin provides accounts and their bound access policies from
//! configuration. Useful for testing, development, and simple deployments.
//!
//! ## Configuration
//!
//! ```yaml
//! static_acl:
//!   policies:
//!     - id: "vm-reader"
//!       name: "VM read access"
//!       allow: ["listVMs"]
//!     - id: "net-admin"
//!       name: "Network admin"
//!       allow: ["*"]
//!       deny: ["deleteNetwork"]
//!   accounts:
//!     - id: "A2"
//!       name: "Operations"
//!       policies: ["vm-reader"]
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;


pub use config::StaticAclPluginConfig;
pub use domain::Service;
