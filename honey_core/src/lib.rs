//! `honey_core` is the core library for the honey documentation engine. It
//! walks a pages directory, classifies every file it finds, and builds the
//! page map that themes use to render navigation, sidebars and tag listings.
//!
//! ## Build Pipeline
//!
//! ```text
//! build system
//!   → BuildHook (before every compilation)
//!   → find_pages_dir (pages/ or src/pages/)
//!   → PageMapBuilder (walks the tree, classifies files, reads front matter and meta files)
//!   → PageMapSnapshot { items, file_map }
//!   → PageMapCache::set
//!   → renderer reads PageMapCache::get
//! ```
//!
//! ## Modules
//!
//! - [`route`]: Locale and name extraction from filenames, route joining.
//! - [`classify`]: Content page / meta file / ignored classification.
//! - [`builder`]: The recursive directory walk producing a page tree and a
//!   flat index of the same nodes keyed by absolute path.
//! - [`cache`]: Holder for the latest snapshot.
//! - [`hook`]: The build-hook adapter tying the above together.
//! - [`config`]: `honey.toml` loading and pages directory discovery.
//! - [`tags`]: Tag lists and tag indexes for blog listings.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use honey_core::BuildHook;
//! use honey_core::PageMapCache;
//!
//! let cache = Arc::new(PageMapCache::new());
//! let hook = BuildHook::from_root(".", Arc::clone(&cache)).unwrap();
//!
//! hook.before_compile(|result| {
//! 	if let Err(e) = result {
//! 		eprintln!("{e}");
//! 	}
//! });
//!
//! if let Some(snapshot) = cache.get() {
//! 	for page in snapshot.pages() {
//! 		println!("{}", page.route);
//! 	}
//! }
//! ```

pub use builder::BuildOptions;
pub use builder::PageMapBuilder;
pub use cache::PageMapCache;
pub use classify::Classifier;
pub use classify::EntryKind;
pub use config::HoneyConfig;
pub use config::find_pages_dir;
pub use error::*;
pub use front_matter::FrontMatterParser;
pub use front_matter::ParsedFrontMatter;
pub use front_matter::YamlFrontMatter;
pub use hook::BuildHook;
pub use hook::SearchCacheRestorer;
pub use page::*;

pub mod builder;
pub mod cache;
pub mod classify;
pub mod config;
#[allow(unused_assignments)]
mod error;
pub mod front_matter;
pub mod hook;
pub mod meta;
mod page;
pub mod route;
pub mod tags;
