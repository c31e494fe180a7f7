//! HTML tag emission for rendered asset URLs.
//!
//! URLs are written verbatim; they come from trusted configuration, not user input.

use crate::models::AssetKind;

/// Render stylesheet URLs as concatenated `<link>` tags.
pub fn css_tags<S: AsRef<str>>(urls: &[S]) -> String {
  urls
    .iter()
    .map(|url| format!(r#"<link href="{}" rel="stylesheet" type="text/css">"#, url.as_ref()))
    .collect()
}

/// Render script URLs as concatenated `<script>` tags.
pub fn js_tags<S: AsRef<str>>(urls: &[S]) -> String {
  urls
    .iter()
    .map(|url| format!(r#"<script type="text/javascript" src="{}"></script>"#, url.as_ref()))
    .collect()
}

/// Render URLs with the tag shape matching `kind`.
pub fn tags_for<S: AsRef<str>>(kind: AssetKind, urls: &[S]) -> String {
  match kind {
    AssetKind::Css => css_tags(urls),
    AssetKind::Js => js_tags(urls),
  }
}
