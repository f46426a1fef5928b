//! Configuration schema definitions for deploy-check.
//!
//! This module contains the structs that map to the optional
//! `.deploy-check.yml` file. Every field has a default, and the defaults
//! describe the stock checklist, so a project without the file gets exactly
//! the built-in behavior.

use regex::Regex;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{DeployCheckError, Result};

/// Root configuration structure for `.deploy-check.yml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeployCheckConfig {
    /// File that must exist at the project root.
    pub required_file: PathBuf,

    /// Key/value that must appear in a build configuration file.
    pub config_value: ConfigValueSettings,

    /// Directory that must NOT exist at deploy time.
    pub forbidden_dir: PathBuf,

    /// Version-control synchronization settings.
    pub git: GitSettings,

    /// Settings for the `orphans` command.
    pub orphans: OrphanSettings,
}

impl Default for DeployCheckConfig {
    fn default() -> Self {
        Self {
            required_file: PathBuf::from("DEPLOYMENT.md"),
            config_value: ConfigValueSettings::default(),
            forbidden_dir: PathBuf::from(".lovable"),
            git: GitSettings::default(),
            orphans: OrphanSettings::default(),
        }
    }
}

/// Expected `key: value` entry inside a configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigValueSettings {
    /// File to search, relative to the project root.
    pub file: PathBuf,

    /// Key name, matched literally.
    pub key: String,

    /// Expected value, matched literally. Numbers are accepted unquoted.
    #[serde(deserialize_with = "scalar_to_string")]
    pub value: String,
}

impl Default for ConfigValueSettings {
    fn default() -> Self {
        Self {
            file: PathBuf::from("vite.config.ts"),
            key: "port".to_string(),
            value: "8082".to_string(),
        }
    }
}

impl ConfigValueSettings {
    /// Pattern matching `key`, a colon and `value`, with any whitespace
    /// around the colon.
    ///
    /// A key or value that begins or ends in a word character is anchored on
    /// a word boundary there, so `report: 8082` and `port: 80820` do not
    /// satisfy `port: 8082`.
    pub fn pattern(&self) -> Result<Regex> {
        let pattern = format!(
            r"{}{}\s*:\s*{}{}",
            word_boundary(self.key.chars().next()),
            regex::escape(&self.key),
            regex::escape(&self.value),
            word_boundary(self.value.chars().last()),
        );
        Regex::new(&pattern).map_err(|e| DeployCheckError::ConfigValidationError {
            message: format!("config_value does not form a valid pattern: {}", e),
        })
    }

    /// The entry as it would be written, e.g. `port: 8082`.
    pub fn display(&self) -> String {
        format!("{}: {}", self.key, self.value)
    }
}

fn word_boundary(edge: Option<char>) -> &'static str {
    match edge {
        Some(c) if c.is_alphanumeric() || c == '_' => r"\b",
        _ => "",
    }
}

/// Git synchronization settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitSettings {
    /// Git executable name or path.
    pub program: String,

    /// Run `git fetch` before comparing with the upstream.
    pub fetch: bool,

    /// Substring that some remote name or URL must contain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_remote: Option<String>,
}

impl Default for GitSettings {
    fn default() -> Self {
        Self {
            program: "git".to_string(),
            fetch: true,
            expected_remote: None,
        }
    }
}

/// Orphan scan settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrphanSettings {
    /// Directory to scan, relative to the project root.
    pub src_dir: PathBuf,

    /// Extensions of files that may be orphans.
    pub extensions: Vec<String>,

    /// Extensions of files whose contents count as references.
    pub search_extensions: Vec<String>,

    /// File names never reported (entry points).
    pub ignore: Vec<String>,
}

impl Default for OrphanSettings {
    fn default() -> Self {
        Self {
            src_dir: PathBuf::from("src"),
            extensions: vec!["ts".to_string(), "tsx".to_string()],
            search_extensions: vec!["ts".to_string(), "tsx".to_string(), "css".to_string()],
            ignore: vec![
                "main.tsx".to_string(),
                "App.tsx".to_string(),
                "vite-env.d.ts".to_string(),
                "index.css".to_string(),
            ],
        }
    }
}

fn scalar_to_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_yaml::Value::deserialize(deserializer)? {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        other => Err(de::Error::custom(format!(
            "expected a string or number, found {:?}",
            other
        ))),
    }
}
