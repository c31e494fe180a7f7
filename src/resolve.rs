//! Bundle lookup and debug/production list selection.

use crate::error::{BundleError, Result};
use crate::models::{FileEntry, Variant};
use crate::registry::Registry;

/// Look up `name` and return its debug list when `use_debug` is set, otherwise its production
/// list. The two lists are never merged.
pub fn resolve<'a>(registry: &'a Registry, name: &str, use_debug: bool) -> Result<&'a [FileEntry]> {
  let Some(bundle) = registry.lookup(name) else {
    return Err(BundleError::UnknownBundle(name.to_string()));
  };

  let variant = Variant::from_debug_flag(use_debug);
  let files = bundle.files(variant);
  tracing::debug!(bundle = name, %variant, files = files.len(), "resolved bundle");
  Ok(files)
}
