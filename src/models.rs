//! In-memory data model shared by the registry, resolver and renderer.

use std::fmt;

/// Global settings applied to every rendered asset reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
  /// Cache-busting token rendered as `?v=<version>`.
  pub version: Option<String>,
  /// Host substituted for the `[cdn1]` placeholder.
  pub cdn1: Option<String>,
  /// Host substituted for the `[cdn2]` placeholder.
  pub cdn2: Option<String>,
}

impl Settings {
  /// Build settings, treating empty strings the same as absent values.
  pub fn new(version: Option<String>, cdn1: Option<String>, cdn2: Option<String>) -> Self {
    Self {
      version: non_empty(version),
      cdn1: non_empty(cdn1),
      cdn2: non_empty(cdn2),
    }
  }
}

/// A single asset reference inside a bundle list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
  /// Path or URL, possibly containing `[cdn1]` / `[cdn2]` placeholders.
  pub src: String,
  /// Browser condition key gating the entry. `None` means always include.
  pub browser: Option<String>,
}

impl FileEntry {
  /// Entry without a browser condition.
  pub fn new(src: impl Into<String>) -> Self {
    Self {
      src: src.into(),
      browser: None,
    }
  }

  /// Entry gated on the given browser condition key.
  pub fn with_browser(src: impl Into<String>, browser: impl Into<String>) -> Self {
    Self {
      src: src.into(),
      browser: non_empty(Some(browser.into())),
    }
  }
}

/// Named group of asset references with separate debug and production lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
  /// Registry lookup key.
  pub name: String,
  /// Files used when rendering for a debug environment.
  pub debug: Vec<FileEntry>,
  /// Files used when rendering for production.
  pub prod: Vec<FileEntry>,
}

impl Bundle {
  /// Borrow the list for the requested variant.
  pub fn files(&self, variant: Variant) -> &[FileEntry] {
    match variant {
      Variant::Debug => &self.debug,
      Variant::Prod => &self.prod,
    }
  }
}

/// Which of a bundle's two file lists is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
  /// Development list.
  Debug,
  /// Production list.
  Prod,
}

impl Variant {
  /// Map the host's "is this a debug environment" flag onto a variant.
  pub fn from_debug_flag(use_debug: bool) -> Self {
    if use_debug { Self::Debug } else { Self::Prod }
  }
}

impl fmt::Display for Variant {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Debug => f.write_str("debug"),
      Self::Prod => f.write_str("prod"),
    }
  }
}

/// Kind of markup an asset reference renders to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
  /// Stylesheet, rendered as a `<link>` tag.
  Css,
  /// Script, rendered as a `<script>` tag.
  Js,
}

impl AssetKind {
  /// File suffix selecting entries of this kind.
  pub fn extension(self) -> &'static str {
    match self {
      Self::Css => ".css",
      Self::Js => ".js",
    }
  }

  /// Case-sensitive suffix test against a raw `src`.
  pub fn matches(self, src: &str) -> bool {
    src.ends_with(self.extension())
  }
}

impl fmt::Display for AssetKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Css => f.write_str("css"),
      Self::Js => f.write_str("js"),
    }
  }
}

pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
  value.filter(|value| !value.is_empty())
}
