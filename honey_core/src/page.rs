use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;

/// Key/value data extracted from the front matter of a content page.
pub type FrontMatter = serde_json::Map<String, serde_json::Value>;

/// Key/value data parsed from a section meta file.
pub type MetaData = serde_json::Map<String, serde_json::Value>;

/// Flat lookup from the absolute path of a file to the node built for it.
pub type FileMap = BTreeMap<PathBuf, FileNode>;

/// An element of the page tree.
///
/// Page and meta nodes are reference counted so that the tree and the
/// [`FileMap`] share the very same node for a given file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PageNode {
	/// A directory with at least one page or meta file below it.
	Section(SectionNode),
	/// A content file.
	Page(Arc<PageEntry>),
	/// A section meta file, listed next to the pages of its directory.
	Meta(Arc<MetaEntry>),
}

impl PageNode {
	/// Route of the node. Meta descriptors have none.
	pub fn route(&self) -> Option<&str> {
		match self {
			Self::Section(section) => Some(&section.route),
			Self::Page(page) => Some(&page.route),
			Self::Meta(_) => None,
		}
	}

	pub fn name(&self) -> &str {
		match self {
			Self::Section(section) => &section.name,
			Self::Page(page) => &page.name,
			Self::Meta(meta) => &meta.name,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionNode {
	/// Directory name as listed by the filesystem.
	pub name: String,
	pub route: String,
	/// Never empty.
	pub children: Vec<PageNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEntry {
	/// Filename without extension and locale.
	pub name: String,
	pub route: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub locale: Option<String>,
	/// Present only when the front matter holds at least one key.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub front_matter: Option<FrontMatter>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetaEntry {
	/// Always the bare meta filename, e.g. `meta.json`, even for
	/// `meta.en-US.json`.
	pub name: String,
	pub meta: MetaData,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub locale: Option<String>,
}

/// A node registered in the [`FileMap`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FileNode {
	Page(Arc<PageEntry>),
	Meta(Arc<MetaEntry>),
}

impl FileNode {
	/// Whether `node` is the same allocation as this entry, not just an equal
	/// value.
	pub fn is_same_node(&self, node: &PageNode) -> bool {
		match (self, node) {
			(Self::Page(a), PageNode::Page(b)) => Arc::ptr_eq(a, b),
			(Self::Meta(a), PageNode::Meta(b)) => Arc::ptr_eq(a, b),
			_ => false,
		}
	}
}

impl From<FileNode> for PageNode {
	fn from(value: FileNode) -> Self {
		match value {
			FileNode::Page(page) => Self::Page(page),
			FileNode::Meta(meta) => Self::Meta(meta),
		}
	}
}

/// The result of one full walk of the pages directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMapSnapshot {
	/// Children of the pages root, in directory-listing order.
	pub items: Vec<PageNode>,
	/// Every page and meta node keyed by absolute path.
	pub file_map: FileMap,
}

impl PageMapSnapshot {
	pub fn is_empty(&self) -> bool {
		self.items.is_empty() && self.file_map.is_empty()
	}

	/// Look up the node built for an absolute file path.
	pub fn get_file(&self, path: &Path) -> Option<&FileNode> {
		self.file_map.get(path)
	}

	/// Iterate over every page in the tree, depth first, in tree order.
	pub fn pages(&self) -> Pages<'_> {
		Pages {
			stack: vec![self.items.iter()],
		}
	}

	/// Find the section or page served at `route`.
	///
	/// When a section and its `index` page share a route, the section is
	/// returned.
	pub fn find_route(&self, route: &str) -> Option<&PageNode> {
		find_route_in(&self.items, route)
	}
}

fn find_route_in<'a>(items: &'a [PageNode], route: &str) -> Option<&'a PageNode> {
	for item in items {
		match item {
			PageNode::Section(section) => {
				if section.route == route {
					return Some(item);
				}
				if is_route_prefix(&section.route, route) {
					if let Some(found) = find_route_in(&section.children, route) {
						return Some(found);
					}
				}
			}
			PageNode::Page(page) if page.route == route => return Some(item),
			PageNode::Page(_) | PageNode::Meta(_) => {}
		}
	}

	None
}

fn is_route_prefix(prefix: &str, route: &str) -> bool {
	prefix == "/"
		|| route
			.strip_prefix(prefix)
			.is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// Depth-first iterator over the pages of a [`PageMapSnapshot`].
#[derive(Debug)]
pub struct Pages<'a> {
	stack: Vec<std::slice::Iter<'a, PageNode>>,
}

impl<'a> Iterator for Pages<'a> {
	type Item = &'a Arc<PageEntry>;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			let iter = self.stack.last_mut()?;
			match iter.next() {
				Some(PageNode::Page(page)) => return Some(page),
				Some(PageNode::Section(section)) => self.stack.push(section.children.iter()),
				Some(PageNode::Meta(_)) => {}
				None => {
					self.stack.pop();
				}
			}
		}
	}
}
