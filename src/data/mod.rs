//! Runtime configuration
//!
//! Run tunables are read from an optional RON file so a run can be
//! reseeded or rebalanced without rebuilding.

pub mod config;

pub use config::{default_config_path, ConfigError, GameConfig};
