//! Cache-busting version suffix.

/// Append the cache-busting suffix `?v=<version>` when a version is configured.
pub fn append_version(url: String, version: Option<&str>) -> String {
  match version {
    Some(version) if !version.is_empty() => format!("{url}?v={version}"),
    _ => url,
  }
}
