use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use globset::Glob;
use globset::GlobSet;
use globset::GlobSetBuilder;
use tracing::debug;
use tracing::trace;

use crate::HoneyError;
use crate::HoneyResult;
use crate::classify::Classifier;
use crate::classify::EntryKind;
use crate::config::DEFAULT_EXCLUDED_ROUTES;
use crate::config::HoneyConfig;
use crate::front_matter::FrontMatterParser;
use crate::front_matter::YamlFrontMatter;
use crate::meta::parse_meta_json;
use crate::page::FileMap;
use crate::page::FileNode;
use crate::page::MetaEntry;
use crate::page::PageEntry;
use crate::page::PageMapSnapshot;
use crate::page::PageNode;
use crate::page::SectionNode;
use crate::route::locale_of;
use crate::route::name_without_extension;
use crate::route::normalize_route;
use crate::route::to_route;

/// Options for controlling how a pages directory is walked.
///
/// Use [`BuildOptions::default()`] for the standard layout or
/// [`BuildOptions::from_config`] to construct from a [`HoneyConfig`].
#[derive(Debug, Clone)]
pub struct BuildOptions {
	/// Filename patterns for pages and meta files.
	pub classifier: Classifier,
	/// Route patterns of directories to skip: the always-excluded routes
	/// followed by the configured ones.
	pub exclude_routes: Vec<String>,
	exclude_set: GlobSet,
}

impl Default for BuildOptions {
	fn default() -> Self {
		let exclude_routes: Vec<String> = DEFAULT_EXCLUDED_ROUTES
			.iter()
			.map(ToString::to_string)
			.collect();
		let exclude_set = build_route_set(&exclude_routes).unwrap_or_else(|_| GlobSet::empty());

		Self {
			classifier: Classifier::default(),
			exclude_routes,
			exclude_set,
		}
	}
}

impl BuildOptions {
	/// Construct [`BuildOptions`] from a [`HoneyConfig`].
	///
	/// Fails when an exclude pattern is not a valid glob.
	pub fn from_config(config: Option<&HoneyConfig>) -> HoneyResult<Self> {
		let Some(config) = config else {
			return Ok(Self::default());
		};

		let classifier = Classifier {
			page_extensions: config
				.page_extensions
				.iter()
				.map(|ext| ext.trim_start_matches('.').to_string())
				.collect(),
			meta_stem: config.meta.stem.clone(),
			meta_extension: config.meta.extension.trim_start_matches('.').to_string(),
		};
		let exclude_routes: Vec<String> = DEFAULT_EXCLUDED_ROUTES
			.iter()
			.copied()
			.chain(config.exclude.routes.iter().map(String::as_str))
			.map(normalize_route)
			.collect();
		let exclude_set = build_route_set(&exclude_routes)?;

		Ok(Self {
			classifier,
			exclude_routes,
			exclude_set,
		})
	}

	/// Whether a directory served at `route` is left out of the page map.
	pub fn is_excluded_route(&self, route: &str) -> bool {
		self.exclude_set.is_match(route)
	}
}

fn build_route_set(patterns: &[String]) -> HoneyResult<GlobSet> {
	let mut builder = GlobSetBuilder::new();
	for pattern in patterns {
		let glob = Glob::new(pattern).map_err(|e| {
			HoneyError::ConfigParse(format!("invalid exclude route `{pattern}`: {e}"))
		})?;
		builder.add(glob);
	}

	builder
		.build()
		.map_err(|e| HoneyError::ConfigParse(format!("failed to build exclude routes: {e}")))
}

/// Walks a pages directory and builds a [`PageMapSnapshot`].
pub struct PageMapBuilder {
	options: BuildOptions,
	front_matter: Box<dyn FrontMatterParser>,
}

impl Default for PageMapBuilder {
	fn default() -> Self {
		Self::new(BuildOptions::default())
	}
}

impl PageMapBuilder {
	pub fn new(options: BuildOptions) -> Self {
		Self {
			options,
			front_matter: Box::new(YamlFrontMatter),
		}
	}

	/// Replace the YAML front matter parser.
	#[must_use]
	pub fn with_front_matter_parser(mut self, parser: impl FrontMatterParser + 'static) -> Self {
		self.front_matter = Box::new(parser);
		self
	}

	pub fn options(&self) -> &BuildOptions {
		&self.options
	}

	/// Walk `directory` and build the page map, with routes starting at
	/// `route_prefix`.
	///
	/// Entries keep the order the filesystem lists them in. Any read or parse
	/// failure aborts the whole build.
	pub fn build(&self, directory: &Path, route_prefix: &str) -> HoneyResult<PageMapSnapshot> {
		let root = std::path::absolute(directory).map_err(|e| HoneyError::io(directory, e))?;
		let mut file_map = FileMap::new();
		let mut ancestors = Vec::new();

		let items = self.collect_dir(
			&root,
			&normalize_route(route_prefix),
			&mut file_map,
			&mut ancestors,
		)?;

		debug!(
			root = %root.display(),
			files = file_map.len(),
			"built page map"
		);

		Ok(PageMapSnapshot { items, file_map })
	}

	fn collect_dir(
		&self,
		dir: &Path,
		route: &str,
		file_map: &mut FileMap,
		ancestors: &mut Vec<PathBuf>,
	) -> HoneyResult<Vec<PageNode>> {
		// Only directories on the current descent path count as a cycle.
		let canonical = dir.canonicalize().map_err(|e| HoneyError::io(dir, e))?;
		if ancestors.contains(&canonical) {
			return Err(HoneyError::SymlinkCycle {
				path: dir.display().to_string(),
			});
		}

		ancestors.push(canonical);
		let items = self.collect_entries(dir, route, file_map, ancestors);
		ancestors.pop();

		items
	}

	fn collect_entries(
		&self,
		dir: &Path,
		route: &str,
		file_map: &mut FileMap,
		ancestors: &mut Vec<PathBuf>,
	) -> HoneyResult<Vec<PageNode>> {
		let mut items = Vec::new();
		let entries = fs::read_dir(dir).map_err(|e| HoneyError::io(dir, e))?;

		for entry in entries {
			let entry = entry.map_err(|e| HoneyError::io(dir, e))?;
			let path = entry.path();
			let file_name = entry.file_name();
			let Some(name) = file_name.to_str() else {
				trace!(path = %path.display(), "skipping non utf-8 file name");
				continue;
			};

			if is_directory(&entry, &path)? {
				let child_route = to_route(route, name);
				if self.options.is_excluded_route(&child_route) {
					debug!(route = %child_route, "skipping excluded route");
					continue;
				}

				let children = self.collect_dir(&path, &child_route, file_map, ancestors)?;
				if children.is_empty() {
					trace!(route = %child_route, "pruning empty section");
					continue;
				}

				items.push(PageNode::Section(SectionNode {
					name: name.to_string(),
					route: child_route,
					children,
				}));
				continue;
			}

			match self.options.classifier.classify(name) {
				EntryKind::Content => {
					let page = Arc::new(self.read_page(&path, route, name)?);
					file_map.insert(path, FileNode::Page(Arc::clone(&page)));
					items.push(PageNode::Page(page));
				}
				EntryKind::Meta { locale } => {
					let meta = Arc::new(self.read_meta(&path, locale)?);
					file_map.insert(path, FileNode::Meta(Arc::clone(&meta)));
					items.push(PageNode::Meta(meta));
				}
				EntryKind::Ignored => {
					trace!(path = %path.display(), "ignoring file");
				}
			}
		}

		Ok(items)
	}

	fn read_page(&self, path: &Path, dir_route: &str, file_name: &str) -> HoneyResult<PageEntry> {
		let source = fs::read_to_string(path).map_err(|e| HoneyError::io(path, e))?;
		let parsed = self.front_matter.parse(&source, path)?;
		let name = name_without_extension(file_name);

		Ok(PageEntry {
			name: name.to_string(),
			route: to_route(dir_route, name),
			locale: locale_of(file_name).map(ToString::to_string),
			front_matter: (!parsed.data.is_empty()).then_some(parsed.data),
		})
	}

	fn read_meta(&self, path: &Path, locale: Option<String>) -> HoneyResult<MetaEntry> {
		let content = fs::read_to_string(path).map_err(|e| HoneyError::io(path, e))?;
		let meta = parse_meta_json(&content, path)?;

		Ok(MetaEntry {
			name: self.options.classifier.meta_name(),
			meta,
			locale,
		})
	}
}

/// Symlinks are followed, so a link to a directory is walked like one. A
/// dangling link is treated as a file and left to classification.
fn is_directory(entry: &fs::DirEntry, path: &Path) -> HoneyResult<bool> {
	let file_type = entry.file_type().map_err(|e| HoneyError::io(path, e))?;
	if !file_type.is_symlink() {
		return Ok(file_type.is_dir());
	}

	match fs::metadata(path) {
		Ok(metadata) => Ok(metadata.is_dir()),
		Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
			trace!(path = %path.display(), "dangling symlink");
			Ok(false)
		}
		Err(e) => Err(HoneyError::io(path, e)),
	}
}
