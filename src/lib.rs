#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod browser;
pub mod config;
pub mod error;
pub mod logging;
pub mod markup;
pub mod models;
pub mod pipeline;
pub mod registry;
pub mod resolve;
pub mod transform;

pub use browser::{BrowserMatcher, NoRequest, UserAgentMatcher};
pub use config::{BundleConfig, ConfigLoadError};
pub use error::{BundleError, InvalidConfig};
pub use models::{AssetKind, Bundle, FileEntry, Settings, Variant};
pub use pipeline::{BundleRenderer, RenderedBundle};
pub use registry::Registry;
pub use resolve::resolve;
pub use transform::render_urls;
