//! Configuration validation rules.
//!
//! Paths and the expected config entry must be non-empty, target paths must
//! stay inside the project, and the git executable must be named.

use crate::config::schema::DeployCheckConfig;
use crate::error::{DeployCheckError, Result};
use std::path::{Component, Path};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Config field the error refers to
    pub field: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Validate a configuration and return all errors.
///
/// This function collects all validation errors rather than stopping
/// at the first one, allowing users to fix multiple issues at once.
pub fn validate_config(config: &DeployCheckConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_project_path(&mut errors, "required_file", &config.required_file);
    check_project_path(&mut errors, "config_value.file", &config.config_value.file);
    check_project_path(&mut errors, "forbidden_dir", &config.forbidden_dir);
    check_project_path(&mut errors, "orphans.src_dir", &config.orphans.src_dir);

    if config.config_value.key.trim().is_empty() {
        errors.push(ValidationError::new(
            "config_value.key",
            "config_value.key must not be empty",
        ));
    }
    if config.config_value.value.trim().is_empty() {
        errors.push(ValidationError::new(
            "config_value.value",
            "config_value.value must not be empty",
        ));
    }
    if config.git.program.trim().is_empty() {
        errors.push(ValidationError::new(
            "git.program",
            "git.program must not be empty",
        ));
    }
    if let Some(remote) = &config.git.expected_remote {
        if remote.trim().is_empty() {
            errors.push(ValidationError::new(
                "git.expected_remote",
                "git.expected_remote must not be empty when set",
            ));
        }
    }
    if config.orphans.extensions.is_empty() {
        errors.push(ValidationError::new(
            "orphans.extensions",
            "orphans.extensions must list at least one extension",
        ));
    }

    errors
}

fn check_project_path(errors: &mut Vec<ValidationError>, field: &str, path: &Path) {
    if path.as_os_str().is_empty() {
        errors.push(ValidationError::new(
            field,
            format!("{} must not be empty", field),
        ));
        return;
    }

    let escapes = path.is_absolute()
        || path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)));
    if escapes {
        errors.push(ValidationError::new(
            field,
            format!(
                "{} must be relative to the project root, got '{}'",
                field,
                path.display()
            ),
        ));
    }
}

/// Validate configuration, returning first error as Result.
pub fn validate(config: &DeployCheckConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(DeployCheckError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
