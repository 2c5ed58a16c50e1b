use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::page::PageEntry;
use crate::page::PageMapSnapshot;

/// Front matter key holding a page's tags.
pub const TAG_KEY: &str = "tag";

/// Split a tag value into trimmed, non-empty tags.
///
/// A string is split on commas (`"rust, web"`); an array contributes its
/// string members.
pub fn split_tags(value: &Value) -> Vec<String> {
	let tags: Vec<&str> = match value {
		Value::String(tags) => tags.split(',').collect(),
		Value::Array(items) => items.iter().filter_map(Value::as_str).collect(),
		_ => Vec::new(),
	};

	tags.into_iter()
		.map(str::trim)
		.filter(|tag| !tag.is_empty())
		.map(ToString::to_string)
		.collect()
}

/// Tags of a page, read from the `tag` front matter key.
pub fn page_tags(page: &PageEntry) -> Vec<String> {
	page.front_matter
		.as_ref()
		.and_then(|front_matter| front_matter.get(TAG_KEY))
		.map(split_tags)
		.unwrap_or_default()
}

/// Routes of the pages carrying each tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagIndex {
	/// Tag name to page routes, in tree order.
	pub tags: BTreeMap<String, Vec<String>>,
}

impl TagIndex {
	pub fn from_snapshot(snapshot: &PageMapSnapshot) -> Self {
		let mut tags: BTreeMap<String, Vec<String>> = BTreeMap::new();

		for page in snapshot.pages() {
			for tag in page_tags(page) {
				let routes = tags.entry(tag).or_default();
				if !routes.contains(&page.route) {
					routes.push(page.route.clone());
				}
			}
		}

		Self { tags }
	}

	pub fn routes(&self, tag: &str) -> &[String] {
		self.tags.get(tag).map(Vec::as_slice).unwrap_or_default()
	}

	pub fn is_empty(&self) -> bool {
		self.tags.is_empty()
	}
}
