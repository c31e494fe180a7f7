//! Per-request helper chaining resolution, filtering and markup rendering.

use crate::browser::BrowserMatcher;
use crate::error::Result;
use crate::markup::{css_tags, js_tags, tags_for};
use crate::models::AssetKind;
use crate::registry::Registry;
use crate::resolve::resolve;
use crate::transform::render_urls;

/// Markup blocks produced for one bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedBundle {
  /// Concatenated `<link>` tags.
  pub css: String,
  /// Concatenated `<script>` tags.
  pub js: String,
}

/// Renders bundles from a shared registry for one environment.
///
/// Cheap to construct; build one per request or keep one per environment.
#[derive(Debug, Clone, Copy)]
pub struct BundleRenderer<'a> {
  registry: &'a Registry,
  use_debug: bool,
}

impl<'a> BundleRenderer<'a> {
  /// Create a renderer selecting debug lists when `use_debug` is set.
  pub fn new(registry: &'a Registry, use_debug: bool) -> Self {
    Self {
      registry,
      use_debug,
    }
  }

  /// Final URLs of `kind` for the named bundle.
  pub fn urls<M>(&self, name: &str, kind: AssetKind, matcher: &M) -> Result<Vec<String>>
  where
    M: BrowserMatcher + ?Sized,
  {
    let files = resolve(self.registry, name, self.use_debug)?;
    Ok(render_urls(files, kind, self.registry.settings(), matcher))
  }

  /// Markup for a single asset kind of the named bundle.
  pub fn render<M>(&self, name: &str, kind: AssetKind, matcher: &M) -> Result<String>
  where
    M: BrowserMatcher + ?Sized,
  {
    let urls = self.urls(name, kind, matcher)?;
    Ok(tags_for(kind, &urls))
  }

  /// Both the stylesheet and script markup of the named bundle.
  pub fn render_bundle<M>(&self, name: &str, matcher: &M) -> Result<RenderedBundle>
  where
    M: BrowserMatcher + ?Sized,
  {
    let files = resolve(self.registry, name, self.use_debug)?;
    let settings = self.registry.settings();

    Ok(RenderedBundle {
      css: css_tags(&render_urls(files, AssetKind::Css, settings, matcher)),
      js: js_tags(&render_urls(files, AssetKind::Js, settings, matcher)),
    })
  }
}
