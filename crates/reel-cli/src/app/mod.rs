//! Application-level utilities for the Reel CLI.
//!
//! This module provides:
//! - Application context for unified CLI + config handling
//! - Path resolution for the config file and data directory

mod context;
mod resolver;

pub use context::AppContext;
pub use resolver::{resolve_config_path, resolve_data_dir};
