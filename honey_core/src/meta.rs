use std::path::Path;

use serde_json::Value;

use crate::HoneyError;
use crate::HoneyResult;
use crate::front_matter::value_kind;
use crate::page::MetaData;

/// Parse the body of a section meta file. The document must be a JSON
/// object; key order is preserved.
pub fn parse_meta_json(content: &str, path: &Path) -> HoneyResult<MetaData> {
	let content = content.strip_prefix('\u{feff}').unwrap_or(content);
	let value: Value = serde_json::from_str(content).map_err(|e| HoneyError::MetaJson {
		path: path.display().to_string(),
		reason: e.to_string(),
	})?;

	match value {
		Value::Object(map) => Ok(map),
		other => Err(HoneyError::MetaJson {
			path: path.display().to_string(),
			reason: format!("expected a JSON object, found {}", value_kind(&other)),
		}),
	}
}
