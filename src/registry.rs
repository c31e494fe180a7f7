//! Immutable registry of configured bundles.

use std::collections::{BTreeMap, BTreeSet};

use crate::config::{BundleConfig, BundleDefinition, FileDefinition};
use crate::error::{InvalidConfig, Result};
use crate::models::{Bundle, FileEntry, Settings, Variant};

/// All configured bundles plus the global settings, built once at startup.
///
/// The registry exposes no mutation API; share it behind an `Arc` to serve concurrent readers.
#[derive(Debug, Clone, Default)]
pub struct Registry {
  settings: Settings,
  bundles: BTreeMap<String, Bundle>,
}

impl Registry {
  /// Validate a parsed configuration document and build the registry.
  ///
  /// Names and sources are kept exactly as written. Fails when a bundle name is blank or repeated,
  /// or when a file entry has a blank `src` or repeats a `src` already listed in the same list.
  pub fn load(config: BundleConfig) -> Result<Self> {
    let settings = Settings::new(
      config.settings.version,
      config.settings.cdn1,
      config.settings.cdn2,
    );

    let mut bundles = BTreeMap::new();
    for (index, definition) in config.bundles.into_iter().enumerate() {
      let bundle = build_bundle(index, definition)?;
      if bundles.contains_key(&bundle.name) {
        return Err(InvalidConfig::DuplicateBundle { name: bundle.name }.into());
      }
      bundles.insert(bundle.name.clone(), bundle);
    }

    tracing::info!(
      bundles = bundles.len(),
      version = settings.version.as_deref().unwrap_or(""),
      "bundle registry loaded"
    );

    Ok(Self { settings, bundles })
  }

  /// Global settings shared by every render call.
  pub fn settings(&self) -> &Settings {
    &self.settings
  }

  /// Find a bundle by its exact name.
  pub fn lookup(&self, name: &str) -> Option<&Bundle> {
    self.bundles.get(name)
  }

  /// Names of all registered bundles, sorted.
  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.bundles.keys().map(String::as_str)
  }

  /// Number of registered bundles.
  pub fn len(&self) -> usize {
    self.bundles.len()
  }

  /// Returns true when no bundles are configured.
  pub fn is_empty(&self) -> bool {
    self.bundles.is_empty()
  }
}

fn build_bundle(index: usize, definition: BundleDefinition) -> Result<Bundle> {
  let BundleDefinition { name, debug, prod } = definition;
  if name.trim().is_empty() {
    return Err(InvalidConfig::MissingName { index }.into());
  }

  let debug = build_files(&name, Variant::Debug, debug)?;
  let prod = build_files(&name, Variant::Prod, prod)?;

  Ok(Bundle { name, debug, prod })
}

fn build_files(
  bundle: &str,
  variant: Variant,
  definitions: Vec<FileDefinition>,
) -> Result<Vec<FileEntry>> {
  let mut seen = BTreeSet::new();
  let mut files = Vec::with_capacity(definitions.len());

  for (index, definition) in definitions.into_iter().enumerate() {
    if definition.src.trim().is_empty() {
      return Err(
        InvalidConfig::MissingSource {
          bundle: bundle.to_string(),
          variant,
          index,
        }
        .into(),
      );
    }

    if !seen.insert(definition.src.clone()) {
      return Err(
        InvalidConfig::DuplicateSource {
          bundle: bundle.to_string(),
          variant,
          src: definition.src,
        }
        .into(),
      );
    }

    files.push(match definition.browser {
      Some(browser) => FileEntry::with_browser(definition.src, browser),
      None => FileEntry::new(definition.src),
    });
  }

  Ok(files)
}
