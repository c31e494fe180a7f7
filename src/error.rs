//! Error types raised while building the registry and resolving bundles.

use thiserror::Error;

use crate::models::Variant;

/// Result alias used by the registry, resolver and pipeline.
pub type Result<T, E = BundleError> = std::result::Result<T, E>;

/// Errors surfaced by the bundle registry and resolver.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BundleError {
  /// The configuration cannot be turned into a registry. Fatal at startup.
  #[error("invalid bundle configuration: {0}")]
  ConfigInvalid(#[from] InvalidConfig),
  /// No bundle with the requested name exists in the registry.
  #[error("no bundle named `{0}` is configured")]
  UnknownBundle(String),
}

/// Specific reason a configuration document was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidConfig {
  /// A bundle definition has an empty or missing `name`.
  #[error("bundle #{index} has no name")]
  MissingName {
    /// Zero-based position of the bundle in the configuration.
    index: usize,
  },
  /// Two bundle definitions share the same name.
  #[error("bundle `{name}` is defined more than once")]
  DuplicateBundle {
    /// Name declared twice.
    name: String,
  },
  /// A file entry has an empty or missing `src`.
  #[error("file #{index} in the {variant} list of bundle `{bundle}` has no src")]
  MissingSource {
    /// Owning bundle.
    bundle: String,
    /// List the entry belongs to.
    variant: Variant,
    /// Zero-based position of the entry in its list.
    index: usize,
  },
  /// The same `src` appears twice in one list.
  #[error("`{src}` is listed more than once in the {variant} list of bundle `{bundle}`")]
  DuplicateSource {
    /// Owning bundle.
    bundle: String,
    /// List the entry belongs to.
    variant: Variant,
    /// Repeated source path.
    src: String,
  },
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn wraps_invalid_config_reasons() {
    let err = BundleError::from(InvalidConfig::DuplicateBundle {
      name: "main".into(),
    });
    assert_eq!(
      err.to_string(),
      "invalid bundle configuration: bundle `main` is defined more than once"
    );
  }

  #[test]
  fn names_the_variant_in_source_errors() {
    let err = InvalidConfig::MissingSource {
      bundle: "main".into(),
      variant: Variant::Debug,
      index: 2,
    };
    assert_eq!(
      err.to_string(),
      "file #2 in the debug list of bundle `main` has no src"
    );
  }
}
