//! Configuration document loader describing settings and bundle definitions.
//!
//! These are plain data-transfer structs. Validation happens when the document is turned into
//! a [`crate::Registry`], so missing required fields deserialize to empty values here and are
//! reported as configuration errors with a precise location later on.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// File name looked up by the command line tool when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "bundles.config.json";

/// Parsed configuration document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BundleConfig {
  /// Global rendering settings.
  pub settings: SettingsConfig,
  /// Bundle definitions in declaration order.
  pub bundles: Vec<BundleDefinition>,
}

/// Raw settings section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SettingsConfig {
  /// Cache-busting token.
  pub version: Option<String>,
  /// Host for the `[cdn1]` placeholder.
  pub cdn1: Option<String>,
  /// Host for the `[cdn2]` placeholder.
  pub cdn2: Option<String>,
}

/// Raw bundle definition.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BundleDefinition {
  /// Unique bundle name.
  pub name: String,
  /// Files rendered in debug environments.
  pub debug: Vec<FileDefinition>,
  /// Files rendered in production.
  pub prod: Vec<FileDefinition>,
}

/// Raw file entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FileDefinition {
  /// Path or URL of the asset.
  pub src: String,
  /// Optional browser condition key such as `ie6`.
  pub browser: Option<String>,
}

/// Errors that can occur while reading a configuration document.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
  /// Failed to read the document from disk.
  #[error("failed to read {}: {source}", .path.display())]
  Io {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },
  /// Failed to parse a JSON document.
  #[error("failed to parse {}: {source}", .path.display())]
  Json {
    /// Path that caused the error.
    path: PathBuf,
    /// Source parse error.
    source: serde_json::Error,
  },
  /// Failed to parse a YAML document.
  #[error("failed to parse {}: {source}", .path.display())]
  Yaml {
    /// Path that caused the error.
    path: PathBuf,
    /// Source parse error.
    source: serde_yaml::Error,
  },
  /// The file extension does not name a supported format.
  #[error("unsupported configuration format for {} (expected .json, .yaml or .yml)", .path.display())]
  UnsupportedFormat {
    /// Path that caused the error.
    path: PathBuf,
  },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
  Json,
  Yaml,
}

impl ConfigFormat {
  fn from_path(path: &Path) -> Option<Self> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
      "json" => Some(Self::Json),
      "yaml" | "yml" => Some(Self::Yaml),
      _ => None,
    }
  }
}

impl BundleConfig {
  /// Read a configuration document, picking the format from the file extension.
  pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigLoadError> {
    let path = path.as_ref();
    let Some(format) = ConfigFormat::from_path(path) else {
      return Err(ConfigLoadError::UnsupportedFormat {
        path: path.to_path_buf(),
      });
    };

    let contents = fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
      path: path.to_path_buf(),
      source,
    })?;

    let config = match format {
      ConfigFormat::Json => {
        serde_json::from_str(&contents).map_err(|source| ConfigLoadError::Json {
          path: path.to_path_buf(),
          source,
        })?
      }
      ConfigFormat::Yaml => {
        serde_yaml::from_str(&contents).map_err(|source| ConfigLoadError::Yaml {
          path: path.to_path_buf(),
          source,
        })?
      }
    };

    tracing::debug!(path = %path.display(), ?format, "read bundle configuration");
    Ok(config)
  }

  /// Parse a JSON document held in memory.
  pub fn from_json_str(contents: &str) -> Result<Self, serde_json::Error> {
    serde_json::from_str(contents)
  }

  /// Parse a YAML document held in memory.
  pub fn from_yaml_str(contents: &str) -> Result<Self, serde_yaml::Error> {
    serde_yaml::from_str(contents)
  }
}
