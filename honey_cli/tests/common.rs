use std::path::Path;

use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

pub fn honey_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("honey"));
	cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
	cmd
}

/// Write `content` to `root/relative`, creating parent directories.
#[allow(dead_code)]
pub fn write_file(root: &Path, relative: &str, content: &str) -> std::io::Result<()> {
	let path = root.join(relative);
	if let Some(parent) = path.parent() {
		std::fs::create_dir_all(parent)?;
	}
	std::fs::write(path, content)
}

/// A small docs site: a home page, a guide section with a meta file, and an
/// api directory that never reaches the page map.
#[allow(dead_code)]
pub fn docs_site(root: &Path) -> std::io::Result<()> {
	write_file(root, "pages/index.md", "# Home\n")?;
	write_file(root, "pages/guide/index.md", "# Guide\n")?;
	write_file(
		root,
		"pages/guide/setup.md",
		"---\ntitle: Setup\ntag: rust, cli\n---\n# Setup\n",
	)?;
	write_file(root, "pages/guide/meta.json", r#"{"index": "Guide", "setup": "Setup"}"#)?;
	write_file(root, "pages/api/secret.md", "# Secret\n")?;
	Ok(())
}
