//! Command line arguments for the `asset-bundles` binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use asset_bundles::AssetKind;
use asset_bundles::config::DEFAULT_CONFIG_FILE;

#[derive(Parser, Debug)]
#[command(name = "asset-bundles", version, about)]
pub struct Args {
  /// Path to the bundle configuration (.json, .yaml or .yml)
  #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
  pub config: PathBuf,

  /// Name of the bundle to render
  #[arg(long)]
  pub bundle: String,

  /// Render the debug file list instead of the production one
  #[arg(long, env = "ASSET_BUNDLES_DEBUG", default_value_t = false)]
  pub debug: bool,

  /// Which markup to emit
  #[arg(long, value_enum, default_value_t = KindArg::All)]
  pub kind: KindArg,

  /// User agent used to evaluate browser conditions such as `ie6`
  #[arg(long)]
  pub user_agent: Option<String>,

  /// Log resolution details to stderr
  #[arg(long, short, default_value_t = false)]
  pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
  Css,
  Js,
  All,
}

impl KindArg {
  pub fn kinds(self) -> &'static [AssetKind] {
    match self {
      Self::Css => &[AssetKind::Css],
      Self::Js => &[AssetKind::Js],
      Self::All => &[AssetKind::Css, AssetKind::Js],
    }
  }
}
