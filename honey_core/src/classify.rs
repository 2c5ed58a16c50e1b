use crate::route::is_locale_tag;

/// Default extensions treated as content pages.
pub const DEFAULT_PAGE_EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Default stem of a section metadata file.
pub const DEFAULT_META_STEM: &str = "meta";

/// Default extension of a section metadata file.
pub const DEFAULT_META_EXTENSION: &str = "json";

/// What a directory entry contributes to the page map.
///
/// Variants are checked in declaration order: a file whose extension is a
/// content extension is always [`EntryKind::Content`], even when its name
/// also looks like a meta file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
	/// A content page, e.g. `intro.md`.
	Content,
	/// A section metadata file, e.g. `meta.json` or `meta.en-US.json`.
	Meta { locale: Option<String> },
	/// Anything else. Not present in the page map.
	Ignored,
}

/// Filename patterns used to classify directory entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classifier {
	/// Extensions (without the leading dot) of content pages.
	pub page_extensions: Vec<String>,
	/// Stem of meta files.
	pub meta_stem: String,
	/// Extension (without the leading dot) of meta files.
	pub meta_extension: String,
}

impl Default for Classifier {
	fn default() -> Self {
		Self {
			page_extensions: DEFAULT_PAGE_EXTENSIONS
				.iter()
				.map(ToString::to_string)
				.collect(),
			meta_stem: DEFAULT_META_STEM.to_string(),
			meta_extension: DEFAULT_META_EXTENSION.to_string(),
		}
	}
}

impl Classifier {
	/// Classify a file by name. Directories must not be passed here.
	pub fn classify(&self, file_name: &str) -> EntryKind {
		if self.is_content(file_name) {
			return EntryKind::Content;
		}

		if let Some(locale) = self.meta_locale(file_name) {
			return EntryKind::Meta {
				locale: locale.map(ToString::to_string),
			};
		}

		EntryKind::Ignored
	}

	/// Whether the file has one of the configured content extensions.
	pub fn is_content(&self, file_name: &str) -> bool {
		file_name.rsplit_once('.').is_some_and(|(base, extension)| {
			!base.is_empty() && self.page_extensions.iter().any(|ext| ext == extension)
		})
	}

	/// Name given to every meta descriptor node, e.g. `meta.json`.
	pub fn meta_name(&self) -> String {
		format!("{}.{}", self.meta_stem, self.meta_extension)
	}

	/// Match the meta filename pattern. The outer `Option` is the match, the
	/// inner one the locale captured between stem and extension.
	fn meta_locale<'a>(&self, file_name: &'a str) -> Option<Option<&'a str>> {
		let rest = file_name
			.strip_prefix(self.meta_stem.as_str())?
			.strip_suffix(self.meta_extension.as_str())?
			.strip_suffix('.')?;

		if rest.is_empty() {
			return Some(None);
		}

		let locale = rest.strip_prefix('.')?;
		is_locale_tag(locale).then_some(Some(locale))
	}
}
