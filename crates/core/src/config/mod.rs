//! Configuration file loading and profile resolution.

pub mod loader;
pub mod types;
