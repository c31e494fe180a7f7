//! Browser-condition predicates supplied by the host for each render call.

use std::sync::OnceLock;

use regex::Regex;

/// Condition key matching Internet Explorer 6.
pub const IE6: &str = "ie6";

/// Capability query answering "does the current request match condition `key`?".
///
/// Conditions are opt-in: an implementation must return `false` for keys it does not
/// recognise. Entries without a condition never reach the matcher.
pub trait BrowserMatcher {
  /// Returns `true` when the current request satisfies `condition`.
  fn matches(&self, condition: &str) -> bool;
}

impl<F> BrowserMatcher for F
where
  F: Fn(&str) -> bool,
{
  fn matches(&self, condition: &str) -> bool {
    self(condition)
  }
}

/// Matcher for callers with no request context. Every condition is unmet.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRequest;

impl BrowserMatcher for NoRequest {
  fn matches(&self, _condition: &str) -> bool {
    false
  }
}

/// Matcher derived from an inbound request's `User-Agent` header.
#[derive(Debug, Clone, Default)]
pub struct UserAgentMatcher {
  user_agent: String,
  lowercase_user_agent: String,
  tokens: Vec<(String, String)>,
}

impl UserAgentMatcher {
  /// Build a matcher for the given raw user agent.
  pub fn new(user_agent: impl Into<String>) -> Self {
    let user_agent = user_agent.into();
    Self {
      lowercase_user_agent: user_agent.to_ascii_lowercase(),
      user_agent,
      tokens: Vec::new(),
    }
  }

  /// Recognise an extra condition `key` that matches when the user agent contains `needle`,
  /// ignoring ASCII case.
  pub fn with_token(mut self, key: impl Into<String>, needle: impl Into<String>) -> Self {
    self
      .tokens
      .push((key.into(), needle.into().to_ascii_lowercase()));
    self
  }

  /// Internet Explorer major version advertised by the user agent, if any.
  pub fn ie_major_version(&self) -> Option<u32> {
    msie_pattern()
      .captures(&self.user_agent)
      .and_then(|captures| captures.get(1))
      .and_then(|major| major.as_str().parse().ok())
  }
}

impl BrowserMatcher for UserAgentMatcher {
  fn matches(&self, condition: &str) -> bool {
    if condition == IE6 {
      return self.ie_major_version() == Some(6);
    }

    if let Some((_, needle)) = self.tokens.iter().find(|(key, _)| key == condition) {
      return !needle.is_empty() && self.lowercase_user_agent.contains(needle.as_str());
    }

    tracing::debug!(condition, "unrecognised browser condition");
    false
  }
}

fn msie_pattern() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| Regex::new(r"MSIE (\d+)\.").expect("invalid MSIE regex"))
}
