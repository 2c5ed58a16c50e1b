use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::HoneyError;
use crate::HoneyResult;
use crate::classify::DEFAULT_META_EXTENSION;
use crate::classify::DEFAULT_META_STEM;
use crate::classify::DEFAULT_PAGE_EXTENSIONS;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = ["honey.toml", ".honey.toml", ".config/honey.toml"];

/// Directories searched for pages, in order, when `pages_dir` is not set.
pub const PAGES_DIR_CANDIDATES: [&str; 2] = ["pages", "src/pages"];

/// Routes that are always skipped. API routes are served by the framework,
/// not rendered as pages.
pub const DEFAULT_EXCLUDED_ROUTES: [&str; 1] = ["/api"];

/// Configuration loaded from a `honey.toml` file.
///
/// ```toml
/// pages_dir = "docs/pages"
/// page_extensions = ["md", "mdx"]
/// theme = "honey-theme-docs"
///
/// [meta]
/// stem = "meta"
/// extension = "json"
///
/// [exclude]
/// routes = ["/drafts", "/blog/*"]
///
/// [search]
/// enabled = true
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct HoneyConfig {
	/// Pages directory relative to the project root. When absent, `pages/`
	/// and then `src/pages/` are tried.
	#[serde(default)]
	pub pages_dir: Option<PathBuf>,
	/// Extensions (without the leading dot) of content pages.
	#[serde(default = "default_page_extensions")]
	pub page_extensions: Vec<String>,
	/// Theme package handed to the rendering layer. Not used by the page map.
	#[serde(default)]
	pub theme: Option<String>,
	/// Section meta filename pattern.
	#[serde(default)]
	pub meta: MetaConfig,
	/// Routes to leave out of the page map.
	#[serde(default)]
	pub exclude: ExcludeConfig,
	/// Search index settings.
	#[serde(default)]
	pub search: SearchConfig,
}

impl Default for HoneyConfig {
	fn default() -> Self {
		Self {
			pages_dir: None,
			page_extensions: default_page_extensions(),
			theme: None,
			meta: MetaConfig::default(),
			exclude: ExcludeConfig::default(),
			search: SearchConfig::default(),
		}
	}
}

/// Filename pattern of section meta files: `{stem}.{extension}` or
/// `{stem}.{locale}.{extension}`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MetaConfig {
	#[serde(default = "default_meta_stem")]
	pub stem: String,
	#[serde(default = "default_meta_extension")]
	pub extension: String,
}

impl Default for MetaConfig {
	fn default() -> Self {
		Self {
			stem: default_meta_stem(),
			extension: default_meta_extension(),
		}
	}
}

/// Configuration for excluding directories from the page map.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ExcludeConfig {
	/// Glob patterns matched against the route of each directory. A matching
	/// directory is skipped together with everything below it.
	///
	/// These add to [`DEFAULT_EXCLUDED_ROUTES`]; `/api` is skipped either way.
	#[serde(default)]
	pub routes: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct SearchConfig {
	/// Restore the search index cache before each build.
	#[serde(default)]
	pub enabled: bool,
}

fn default_page_extensions() -> Vec<String> {
	DEFAULT_PAGE_EXTENSIONS
		.iter()
		.map(ToString::to_string)
		.collect()
}

fn default_meta_stem() -> String {
	DEFAULT_META_STEM.to_string()
}

fn default_meta_extension() -> String {
	DEFAULT_META_EXTENSION.to_string()
}

impl HoneyConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> HoneyResult<Option<HoneyConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content =
			std::fs::read_to_string(&config_path).map_err(|e| HoneyError::io(&config_path, e))?;
		let config = Self::parse(&content)?;

		Ok(Some(config))
	}

	/// Like [`HoneyConfig::load`], falling back to the defaults when no
	/// config file exists.
	pub fn load_or_default(root: &Path) -> HoneyResult<HoneyConfig> {
		Ok(Self::load(root)?.unwrap_or_default())
	}

	pub fn parse(content: &str) -> HoneyResult<HoneyConfig> {
		toml::from_str(content).map_err(|e| HoneyError::ConfigParse(e.to_string()))
	}
}

/// Find the pages directory of the project at `root`.
///
/// An explicit `pages_dir` is returned as is, without checking that it
/// exists; a missing directory surfaces when it is read.
pub fn find_pages_dir(root: &Path, config: Option<&HoneyConfig>) -> HoneyResult<PathBuf> {
	if let Some(pages_dir) = config.and_then(|c| c.pages_dir.as_ref()) {
		return Ok(root.join(pages_dir));
	}

	PAGES_DIR_CANDIDATES
		.iter()
		.map(|candidate| root.join(candidate))
		.find(|path| path.is_dir())
		.ok_or_else(|| HoneyError::PagesDirNotFound {
			root: root.display().to_string(),
		})
}
