//! Domain layer for the static API access plugin.

pub mod client;
pub mod service;

pub use service::Service;
