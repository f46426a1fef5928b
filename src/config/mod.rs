//! Configuration loading, parsing, and validation for deploy-check.
//!
//! This module handles the optional `.deploy-check.yml` file:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use deploy_check::config::{load_config, DeployCheckConfig};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".deploy-check.yml"), "forbidden_dir: .cache").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.forbidden_dir, std::path::PathBuf::from(".cache"));
//! assert_eq!(config.required_file, DeployCheckConfig::default().required_file);
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{discover_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAMES};
pub use schema::{ConfigValueSettings, DeployCheckConfig, GitSettings, OrphanSettings};
pub use validator::{validate, validate_config, ValidationError};
