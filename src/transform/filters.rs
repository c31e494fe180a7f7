//! Browser-condition and file-suffix filtering of resolved entries.

use crate::browser::BrowserMatcher;
use crate::models::{AssetKind, FileEntry};

/// Determine whether an entry survives filtering for the requested kind.
///
/// Entries without a browser condition are always eligible; conditioned entries need the host
/// matcher to accept their key. The `src` suffix must then match the kind exactly.
pub fn should_include<M>(entry: &FileEntry, kind: AssetKind, matcher: &M) -> bool
where
  M: BrowserMatcher + ?Sized,
{
  condition_met(entry.browser.as_deref(), matcher) && kind.matches(&entry.src)
}

fn condition_met<M>(condition: Option<&str>, matcher: &M) -> bool
where
  M: BrowserMatcher + ?Sized,
{
  match condition {
    None | Some("") => true,
    Some(key) => matcher.matches(key),
  }
}
