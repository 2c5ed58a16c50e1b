use std::path::Path;

use serde_json::Value;

use crate::HoneyError;
use crate::HoneyResult;
use crate::page::FrontMatter;

const DELIMITER: &str = "---";

/// Front matter extracted from a content file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedFrontMatter {
	/// The parsed key/value mapping. Empty when the file has no front matter.
	pub data: FrontMatter,
	/// Everything after the closing delimiter.
	pub body: String,
}

/// Extracts front matter from the raw text of a content file.
///
/// `path` is only used for error messages.
pub trait FrontMatterParser: Send + Sync {
	fn parse(&self, source: &str, path: &Path) -> HoneyResult<ParsedFrontMatter>;
}

/// YAML front matter between two `---` lines at the very top of the file.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlFrontMatter;

impl FrontMatterParser for YamlFrontMatter {
	fn parse(&self, source: &str, path: &Path) -> HoneyResult<ParsedFrontMatter> {
		let Some((yaml, body)) = split_front_matter(source) else {
			return Ok(ParsedFrontMatter {
				data: FrontMatter::new(),
				body: source.to_string(),
			});
		};

		let data = parse_yaml_mapping(yaml).map_err(|reason| HoneyError::FrontMatter {
			path: path.display().to_string(),
			reason,
		})?;

		Ok(ParsedFrontMatter {
			data,
			body: body.to_string(),
		})
	}
}

/// Split `source` into its front matter block and the remaining body.
///
/// Returns `None` when the first line is not `---`. A block that is never
/// closed runs to the end of the file.
pub fn split_front_matter(source: &str) -> Option<(&str, &str)> {
	let source = source.strip_prefix('\u{feff}').unwrap_or(source);
	let mut lines = source.split_inclusive('\n');
	let opening = lines.next()?;
	if opening.trim_end() != DELIMITER {
		return None;
	}

	let start = opening.len();
	let mut offset = start;
	for line in lines {
		if line.trim_end() == DELIMITER {
			return Some((&source[start..offset], &source[offset + line.len()..]));
		}
		offset += line.len();
	}

	Some((&source[start..], ""))
}

fn parse_yaml_mapping(yaml: &str) -> Result<FrontMatter, String> {
	let has_content = yaml
		.lines()
		.map(str::trim)
		.any(|line| !line.is_empty() && !line.starts_with('#'));
	if !has_content {
		return Ok(FrontMatter::new());
	}

	let value: Value = serde_yaml_ng::from_str(yaml).map_err(|e| e.to_string())?;
	match value {
		Value::Null => Ok(FrontMatter::new()),
		Value::Object(map) => Ok(map),
		other => Err(format!("expected a mapping, found {}", value_kind(&other))),
	}
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}
