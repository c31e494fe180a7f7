//! CDN host substitution for `[cdn1]` / `[cdn2]` placeholders.

use crate::models::Settings;

/// Placeholder replaced with [`Settings::cdn1`].
pub const CDN1_PLACEHOLDER: &str = "[cdn1]";
/// Placeholder replaced with [`Settings::cdn2`].
pub const CDN2_PLACEHOLDER: &str = "[cdn2]";

/// Replace every CDN placeholder in `src` with its configured host.
///
/// Each placeholder is handled independently: a token whose host is unset is left untouched.
pub fn substitute_cdn(src: &str, settings: &Settings) -> String {
  let mut value = src.to_string();
  for (placeholder, host) in [
    (CDN1_PLACEHOLDER, settings.cdn1.as_deref()),
    (CDN2_PLACEHOLDER, settings.cdn2.as_deref()),
  ] {
    if let Some(host) = host.filter(|host| !host.is_empty())
      && value.contains(placeholder)
    {
      value = value.replace(placeholder, host);
    }
  }
  value
}

#[cfg(test)]
mod tests {
  use super::*;

  fn settings(cdn1: Option<&str>, cdn2: Option<&str>) -> Settings {
    Settings::new(None, cdn1.map(String::from), cdn2.map(String::from))
  }

  #[test]
  fn replaces_cdn1_placeholder() {
    let result = substitute_cdn("[cdn1]/app.js", &settings(Some("https://cdn.example.com"), None));
    assert_eq!(result, "https://cdn.example.com/app.js");
  }

  #[test]
  fn leaves_placeholder_when_host_is_unset() {
    let result = substitute_cdn("[cdn1]/app.js", &settings(None, None));
    assert_eq!(result, "[cdn1]/app.js");

    let result = substitute_cdn("[cdn1]/app.js", &settings(Some(""), None));
    assert_eq!(result, "[cdn1]/app.js");
  }

  #[test]
  fn substitutes_each_host_independently() {
    let result = substitute_cdn(
      "[cdn1]/a.css?alt=[cdn2]/b.css",
      &settings(None, Some("https://static.example.com")),
    );
    assert_eq!(result, "[cdn1]/a.css?alt=https://static.example.com/b.css");
  }

  #[test]
  fn replaces_every_occurrence() {
    let result = substitute_cdn("[cdn1]/x/[cdn1]", &settings(Some("h"), None));
    assert_eq!(result, "h/x/h");
  }
}
