//! Glue between the build system and the page-map builder.
//!
//! The build system calls [`BuildHook::before_compile`] once before every
//! compilation and waits for the completion callback. Each call performs one
//! full rebuild and installs the result in the [`PageMapCache`]; a failed
//! rebuild leaves the previous snapshot in place.

use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::HoneyResult;
use crate::builder::BuildOptions;
use crate::builder::PageMapBuilder;
use crate::cache::PageMapCache;
use crate::config::HoneyConfig;
use crate::config::find_pages_dir;
use crate::front_matter::FrontMatterParser;
use crate::page::PageMapSnapshot;
use crate::route::ROOT_ROUTE;

/// Restores the search index cache. Called before the page map is rebuilt
/// when `search.enabled` is set; failures are its own concern.
pub trait SearchCacheRestorer: Send + Sync {
	fn restore(&self);
}

impl<F> SearchCacheRestorer for F
where
	F: Fn() + Send + Sync,
{
	fn restore(&self) {
		self();
	}
}

pub struct BuildHook {
	root: PathBuf,
	config: HoneyConfig,
	builder: PageMapBuilder,
	cache: Arc<PageMapCache>,
	search_restorer: Option<Box<dyn SearchCacheRestorer>>,
}

impl BuildHook {
	/// Create a hook for the project at `root`.
	///
	/// Fails when the config holds an invalid exclude pattern.
	pub fn new(
		root: impl Into<PathBuf>,
		config: HoneyConfig,
		cache: Arc<PageMapCache>,
	) -> HoneyResult<Self> {
		let options = BuildOptions::from_config(Some(&config))?;

		Ok(Self {
			root: root.into(),
			config,
			builder: PageMapBuilder::new(options),
			cache,
			search_restorer: None,
		})
	}

	/// Load `honey.toml` from `root` (or use the defaults) and create a hook.
	pub fn from_root(root: impl Into<PathBuf>, cache: Arc<PageMapCache>) -> HoneyResult<Self> {
		let root = root.into();
		let config = HoneyConfig::load_or_default(&root)?;
		Self::new(root, config, cache)
	}

	#[must_use]
	pub fn with_search_restorer(mut self, restorer: impl SearchCacheRestorer + 'static) -> Self {
		self.search_restorer = Some(Box::new(restorer));
		self
	}

	#[must_use]
	pub fn with_front_matter_parser(mut self, parser: impl FrontMatterParser + 'static) -> Self {
		self.builder = self.builder.with_front_matter_parser(parser);
		self
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	pub fn config(&self) -> &HoneyConfig {
		&self.config
	}

	pub fn cache(&self) -> &Arc<PageMapCache> {
		&self.cache
	}

	/// Rebuild the page map and install it in the cache.
	pub fn rebuild(&self) -> HoneyResult<Arc<PageMapSnapshot>> {
		if self.config.search.enabled {
			match &self.search_restorer {
				Some(restorer) => restorer.restore(),
				None => warn!("search is enabled but no search cache restorer is registered"),
			}
		}

		let pages_dir = find_pages_dir(&self.root, Some(&self.config))?;
		debug!(pages_dir = %pages_dir.display(), "rebuilding page map");

		let snapshot = Arc::new(self.builder.build(&pages_dir, ROOT_ROUTE)?);
		self.cache.set(Arc::clone(&snapshot));
		info!(
			pages_dir = %pages_dir.display(),
			files = snapshot.file_map.len(),
			"installed page map"
		);

		Ok(snapshot)
	}

	/// Run [`BuildHook::rebuild`] and report the outcome through `done`.
	///
	/// All the work happens before this returns; `done` is called exactly once.
	pub fn before_compile<F>(&self, done: F)
	where
		F: FnOnce(HoneyResult<()>),
	{
		done(self.rebuild().map(|_| ()));
	}
}
