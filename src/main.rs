use anyhow::{Context, Result};
use clap::Parser;

use asset_bundles::browser::{BrowserMatcher, NoRequest, UserAgentMatcher};
use asset_bundles::logging::init_logging;
use asset_bundles::{BundleConfig, BundleRenderer, Registry};

mod cli;

fn main() -> Result<()> {
  let args = cli::Args::parse();
  init_logging(args.verbose)?;

  for block in render_blocks(&args)? {
    println!("{block}");
  }
  Ok(())
}

/// Load the configuration and render one markup block per requested kind, CSS first.
fn render_blocks(args: &cli::Args) -> Result<Vec<String>> {
  let config = BundleConfig::from_path(&args.config)
    .with_context(|| format!("failed to load {}", args.config.display()))?;
  let registry = Registry::load(config).context("refusing to render with invalid configuration")?;

  let matcher: Box<dyn BrowserMatcher> = match &args.user_agent {
    Some(user_agent) => Box::new(UserAgentMatcher::new(user_agent.as_str())),
    None => Box::new(NoRequest),
  };

  let renderer = BundleRenderer::new(&registry, args.debug);
  let mut blocks = Vec::new();
  for &kind in args.kind.kinds() {
    let markup = renderer
      .render(&args.bundle, kind, matcher.as_ref())
      .with_context(|| format!("failed to render {kind} for bundle `{}`", args.bundle))?;
    blocks.push(markup);
  }
  Ok(blocks)
}

#[cfg(test)]
mod tests {
  use std::fs;
  use std::path::{Path, PathBuf};

  use asset_bundles::BundleError;
  use tempfile::tempdir;

  use super::*;

  const CONFIG: &str = r#"{
    "settings": { "version": "5" },
    "bundles": [
      {
        "name": "main",
        "debug": [{ "src": "/a.debug.css" }, { "src": "/b.debug.js" }],
        "prod": [
          { "src": "/a.css" },
          { "src": "/ie6.css", "browser": "ie6" },
          { "src": "/b.js" }
        ]
      }
    ]
  }"#;

  fn args(config: &Path, extra: &[&str]) -> cli::Args {
    let mut argv = vec!["asset-bundles", "--config", config.to_str().unwrap()];
    argv.extend_from_slice(extra);
    cli::Args::try_parse_from(argv).unwrap()
  }

  fn write_config(dir: &Path) -> PathBuf {
    let path = dir.join("bundles.config.json");
    fs::write(&path, CONFIG).expect("failed to write config");
    path
  }

  #[test]
  fn renders_css_block_then_js_block() {
    let temp = tempdir().expect("failed to create temp dir");
    let path = write_config(temp.path());

    let blocks = render_blocks(&args(&path, &["--bundle", "main", "--kind", "all"])).unwrap();
    assert_eq!(
      blocks,
      vec![
        r#"<link href="/a.css?v=5" rel="stylesheet" type="text/css">"#,
        r#"<script type="text/javascript" src="/b.js?v=5"></script>"#,
      ]
    );
  }

  #[test]
  fn debug_flag_selects_the_debug_list() {
    let temp = tempdir().expect("failed to create temp dir");
    let path = write_config(temp.path());

    let blocks =
      render_blocks(&args(&path, &["--bundle", "main", "--kind", "js", "--debug"])).unwrap();
    assert_eq!(
      blocks,
      vec![r#"<script type="text/javascript" src="/b.debug.js?v=5"></script>"#]
    );
  }

  #[test]
  fn user_agent_enables_browser_conditioned_entries() {
    let temp = tempdir().expect("failed to create temp dir");
    let path = write_config(temp.path());

    let blocks = render_blocks(&args(
      &path,
      &[
        "--bundle",
        "main",
        "--kind",
        "css",
        "--user-agent",
        "Mozilla/4.0 (compatible; MSIE 6.0; Windows NT 5.1)",
      ],
    ))
    .unwrap();
    assert_eq!(
      blocks,
      vec![concat!(
        r#"<link href="/a.css?v=5" rel="stylesheet" type="text/css">"#,
        r#"<link href="/ie6.css?v=5" rel="stylesheet" type="text/css">"#,
      )]
    );
  }

  #[test]
  fn unknown_bundle_is_reported() {
    let temp = tempdir().expect("failed to create temp dir");
    let path = write_config(temp.path());

    let err = render_blocks(&args(&path, &["--bundle", "missing"])).unwrap_err();
    assert_eq!(
      err.downcast_ref::<BundleError>(),
      Some(&BundleError::UnknownBundle("missing".into()))
    );
    assert!(format!("{err:#}").contains("no bundle named `missing`"));
  }

  #[test]
  fn missing_config_is_reported() {
    let temp = tempdir().expect("failed to create temp dir");
    let path = temp.path().join("absent.json");

    let err = render_blocks(&args(&path, &["--bundle", "main"])).unwrap_err();
    assert!(format!("{err:#}").contains("absent.json"));
  }
}
