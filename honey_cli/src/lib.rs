use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Build and inspect the page map of a honey documentation site.",
	long_about = "honey walks the pages directory of a documentation or blog site and builds \
	              the page map that themes use for navigation, sidebars and tag \
	              listings.\n\nQuick start:\n  honey init    Create honey.toml and a first \
	              page\n  honey map     Print the page tree\n  honey routes  List every page \
	              route\n  honey tags    List pages by tag"
)]
pub struct HoneyCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the project root directory.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Initialize honey in a project.
	///
	/// Creates a `honey.toml` file and a `pages/index.md` page in the project
	/// root. Files that already exist are left untouched.
	Init,
	/// Build the page map and print it.
	///
	/// Walks the pages directory once, exactly as a build would before
	/// compiling, and prints the resulting tree of sections, pages and meta
	/// files.
	Map {
		/// Output format. Use `text` for an indented tree or `json` for the
		/// serialized page map.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
	/// List every page route with the file it is built from.
	Routes,
	/// List the tags found in page front matter and the routes carrying
	/// them.
	Tags {
		/// Output format. Use `text` for human-readable output or `json` for
		/// programmatic consumption.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text output with colors and formatting.
	Text,
	/// JSON output for programmatic consumption.
	Json,
}
