//! Filtering and rewriting of resolved file lists into final asset URLs.
//!
//! Browser and suffix filtering, CDN placeholder substitution and version suffixing live in
//! separate submodules so each rule can be tested on its own.

mod cdn;
mod filters;
mod version;

pub use cdn::{CDN1_PLACEHOLDER, CDN2_PLACEHOLDER, substitute_cdn};
pub use filters::should_include;
pub use version::append_version;

use crate::browser::BrowserMatcher;
use crate::models::{AssetKind, FileEntry, Settings};

/// Turn a resolved file list into the URLs to emit for `kind`, preserving declaration order.
///
/// The same version rule applies to stylesheets and scripts.
pub fn render_urls<M>(
  entries: &[FileEntry],
  kind: AssetKind,
  settings: &Settings,
  matcher: &M,
) -> Vec<String>
where
  M: BrowserMatcher + ?Sized,
{
  entries
    .iter()
    .filter(|entry| {
      let keep = should_include(entry, kind, matcher);
      if !keep && kind.matches(&entry.src) {
        tracing::debug!(
          src = %entry.src,
          condition = entry.browser.as_deref().unwrap_or(""),
          "skipped entry with unmet browser condition"
        );
      }
      keep
    })
    .map(|entry| {
      append_version(
        substitute_cdn(&entry.src, settings),
        settings.version.as_deref(),
      )
    })
    .collect()
}
