//! API Access Module
//!
//! Role-based gate deciding whether a caller's account may invoke a named
//! operation. The gate resolves the account, fetches the policies bound to
//! it and grants the operation if any one of them permits it.
//!
//! Composing applications call [`register_checker`] once at startup and
//! hand the resulting [`CheckerRegistry`] to their request dispatch layer.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;
pub mod module;
pub mod registry;

pub use config::ApiAccessConfig;
pub use domain::{AccessChecker, ApiAccessLocalClient, DomainError, UnionPolicyEvaluator};
pub use module::register_checker;
pub use registry::CheckerRegistry;
