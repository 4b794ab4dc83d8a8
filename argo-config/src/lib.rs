//! Configuration management for the Argo application manager.
//!
//! Provides environment detection, hierarchical configuration loading from
//! YAML files and environment variables, and the configuration types shared by
//! the API binary.

mod environment;
mod load;
pub mod shared;

pub use environment::*;
pub use load::*;
