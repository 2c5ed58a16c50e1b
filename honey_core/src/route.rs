//! Filename and route helpers.
//!
//! Pages are named after their file stem and served at a route derived from
//! the directory they live in. A file can carry a locale between the stem and
//! the extension, e.g. `intro.en-US.md`.

/// Route of the pages root.
pub const ROOT_ROUTE: &str = "/";

/// Stem that contributes no segment to a route.
pub const INDEX_STEM: &str = "index";

/// Return the locale carried by a filename of the shape `name.LOCALE.ext`.
///
/// ```
/// use honey_core::route::locale_of;
///
/// assert_eq!(locale_of("intro.en-US.md"), Some("en-US"));
/// assert_eq!(locale_of("intro.md"), None);
/// ```
pub fn locale_of(file_name: &str) -> Option<&str> {
	let mut parts = file_name.rsplitn(3, '.');
	let _extension = parts.next()?;
	let locale = parts.next()?;
	let stem = parts.next()?;

	if stem.is_empty() || !is_locale_tag(locale) {
		return None;
	}

	Some(locale)
}

/// Strip the extension and, when present, the locale segment from a
/// filename.
///
/// Dotfiles without a further extension are returned unchanged.
pub fn name_without_extension(file_name: &str) -> &str {
	let Some((base, _)) = file_name.rsplit_once('.') else {
		return file_name;
	};

	if base.is_empty() {
		return file_name;
	}

	if locale_of(file_name).is_some() {
		if let Some((stem, _)) = base.rsplit_once('.') {
			return stem;
		}
	}

	base
}

/// Join a directory route and a stem into a page route.
///
/// The `index` stem resolves to the directory route itself.
pub fn to_route(dir_route: &str, stem: &str) -> String {
	let stem = if stem == INDEX_STEM { "" } else { stem };
	normalize_route(&format!("{dir_route}/{stem}"))
}

/// Normalize a route to forward slashes with a single leading slash and no
/// trailing slash.
pub fn normalize_route(route: &str) -> String {
	let segments: Vec<&str> = route
		.split(['/', '\\'])
		.filter(|segment| !segment.is_empty())
		.collect();

	format!("/{}", segments.join("/"))
}

/// Whether `tag` looks like a short language-region tag: a two or three
/// letter lowercase language, followed by at most two subtags of two to four
/// alphanumerics (`en`, `en-US`, `zh-Hant-TW`).
pub fn is_locale_tag(tag: &str) -> bool {
	let mut subtags = tag.split('-');
	let Some(language) = subtags.next() else {
		return false;
	};

	if !(2..=3).contains(&language.len()) || !language.bytes().all(|b| b.is_ascii_lowercase()) {
		return false;
	}

	let mut count = 0;
	for subtag in subtags {
		count += 1;
		if count > 2
			|| !(2..=4).contains(&subtag.len())
			|| !subtag.bytes().all(|b| b.is_ascii_alphanumeric())
		{
			return false;
		}
	}

	true
}
