use std::path::Path;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum HoneyError {
	#[error("failed to read `{path}`: {source}")]
	#[diagnostic(code(honey::io_error))]
	Io {
		path: String,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to parse meta file `{path}`: {reason}")]
	#[diagnostic(
		code(honey::meta_json),
		help("make sure the meta file is a valid JSON object")
	)]
	MetaJson { path: String, reason: String },

	#[error("failed to parse front matter in `{path}`: {reason}")]
	#[diagnostic(
		code(honey::front_matter),
		help("front matter must be a YAML mapping between two `---` lines")
	)]
	FrontMatter { path: String, reason: String },

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(honey::config_parse),
		help("check that honey.toml is valid TOML")
	)]
	ConfigParse(String),

	#[error("couldn't find a `pages` directory under `{root}`")]
	#[diagnostic(
		code(honey::pages_dir_not_found),
		help("create `pages/` or `src/pages/` under the project root, or set `pages_dir` in honey.toml")
	)]
	PagesDirNotFound { root: String },

	#[error("symlink cycle detected at: `{path}`")]
	#[diagnostic(
		code(honey::symlink_cycle),
		help("remove the circular symlink from the pages directory")
	)]
	SymlinkCycle { path: String },
}

impl HoneyError {
	/// Wrap an io error with the path that produced it.
	pub fn io(path: &Path, source: std::io::Error) -> Self {
		Self::Io {
			path: path.display().to_string(),
			source,
		}
	}
}

pub type HoneyResult<T> = Result<T, HoneyError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
