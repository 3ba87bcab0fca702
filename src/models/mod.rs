//! Raw records read from the seed document and service configuration.

pub mod article;
pub mod category;
#[cfg(feature = "server")]
pub mod config;
