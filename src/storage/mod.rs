//! # Storage Layer
//!
//! File access for orbit maps and configuration.
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Orbit map | `CENTER)SATELLITE` lines | path given on the command line |
//! | Config | TOML | `--config` path, or `<config dir>/orbit-map/config.toml` |
//!
//! ## Key Types
//!
//! - [`MapFile`] - Reads an orbit map and indexes it as an [`OrbitGraph`](crate::domain::OrbitGraph)
//! - [`Config`] - User configuration

mod config;
mod map_file;

pub use config::{Config, ConfigError, FormatSetting};
pub use map_file::MapFile;
