//! Configuration file discovery and loading.
//!
//! The tool's own configuration is optional. Without a file the built-in
//! defaults apply, so the checklist runs with no setup at all.

use crate::config::schema::DeployCheckConfig;
use crate::config::validator::validate;
use crate::error::{DeployCheckError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File names looked up at the project root, in order.
pub const CONFIG_FILE_NAMES: &[&str] = &[".deploy-check.yml", ".deploy-check.yaml"];

/// Find the project's config file, if any.
pub fn discover_config(project_root: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| project_root.join(name))
        .find(|path| path.is_file())
}

/// Load a single config file and parse it into [`DeployCheckConfig`].
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<DeployCheckConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DeployCheckError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DeployCheckError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into [`DeployCheckConfig`].
///
/// An empty (or comment-only) document yields the defaults.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<DeployCheckConfig> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| DeployCheckError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;

    if value.is_null() {
        return Ok(DeployCheckConfig::default());
    }

    serde_yaml::from_value(value).map_err(|e| DeployCheckError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override, then validate it.
///
/// If `config_override` is provided, that file must exist. Otherwise the
/// project root is searched and the defaults are used when nothing is found.
pub fn load_config(
    project_root: &Path,
    config_override: Option<&Path>,
) -> Result<DeployCheckConfig> {
    let path = match config_override {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(project_root),
    };

    let config = match path {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)?
        }
        None => {
            tracing::debug!(
                "No config file in {}, using defaults",
                project_root.display()
            );
            DeployCheckConfig::default()
        }
    };

    validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn discover_finds_yml() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".deploy-check.yml"), "{}").unwrap();

        let found = discover_config(temp.path()).unwrap();
        assert!(found.ends_with(".deploy-check.yml"));
    }

    #[test]
    fn discover_finds_yaml_extension() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".deploy-check.yaml"), "{}").unwrap();

        let found = discover_config(temp.path()).unwrap();
        assert!(found.ends_with(".deploy-check.yaml"));
    }

    #[test]
    fn discover_returns_none_without_file() {
        let temp = TempDir::new().unwrap();
        assert!(discover_config(temp.path()).is_none());
    }

    #[test]
    fn load_without_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config, DeployCheckConfig::default());
    }

    #[test]
    fn load_discovered_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(".deploy-check.yml"),
            "required_file: README.md\nforbidden_dir: tmp\n",
        )
        .unwrap();

        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config.required_file, PathBuf::from("README.md"));
        assert_eq!(config.forbidden_dir, PathBuf::from("tmp"));
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.yml");

        let err = load_config(temp.path(), Some(&missing)).unwrap_err();
        assert!(matches!(err, DeployCheckError::ConfigNotFound { .. }));
    }

    #[test]
    fn explicit_file_overrides_discovery() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".deploy-check.yml"), "forbidden_dir: a").unwrap();
        let other = temp.path().join("other.yml");
        fs::write(&other, "forbidden_dir: b").unwrap();

        let config = load_config(temp.path(), Some(&other)).unwrap();
        assert_eq!(config.forbidden_dir, PathBuf::from("b"));
    }

    #[test]
    fn empty_file_uses_defaults() {
        let config = parse_config("# nothing here\n", Path::new("x.yml")).unwrap();
        assert_eq!(config, DeployCheckConfig::default());
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let err = parse_config("required_file: [unclosed", Path::new("bad.yml")).unwrap_err();
        match err {
            DeployCheckError::ConfigParseError { path, .. } => {
                assert_eq!(path, PathBuf::from("bad.yml"))
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn invalid_values_fail_validation() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".deploy-check.yml"), "required_file: ''").unwrap();

        let err = load_config(temp.path(), None).unwrap_err();
        assert!(matches!(
            err,
            DeployCheckError::ConfigValidationError { .. }
        ));
    }
}
