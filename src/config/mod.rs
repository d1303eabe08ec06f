//! Configuration module for pepscan
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. Every section has built-in defaults, so a config file is only
//! needed to override them.

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, FetchConfig, OutputConfig, RegistryConfig};

// Re-export parser functions
pub use parser::load_config;
