mod common;

use clap::Parser;
use honey_cli::Commands;
use honey_cli::HoneyCli;
use honey_cli::OutputFormat;
use honey_core::AnyEmptyResult;
use predicates::prelude::PredicateBooleanExt;
use serde_json::Value;

#[test]
fn map_prints_page_tree() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::docs_site(tmp.path())?;

	common::honey_cmd()
		.arg("map")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("index /\n"))
		.stdout(predicates::str::contains("guide/ /guide\n"))
		.stdout(predicates::str::contains("  setup /guide/setup\n"))
		.stdout(predicates::str::contains("  meta.json (meta)\n"))
		.stdout(predicates::str::contains("3 page(s), 4 file(s)"))
		.stdout(predicates::str::contains("secret").not());

	Ok(())
}

#[test]
fn map_json_serializes_items() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::docs_site(tmp.path())?;

	let output = common::honey_cmd()
		.arg("map")
		.arg("--format")
		.arg("json")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.get_output()
		.stdout
		.clone();

	let items: Value = serde_json::from_slice(&output)?;
	let items = items.as_array().ok_or("expected an array")?;
	assert_eq!(items.len(), 2);

	let guide = items
		.iter()
		.find(|item| item["name"] == "guide")
		.ok_or("missing guide section")?;
	assert_eq!(guide["route"], "/guide");

	let children = guide["children"].as_array().ok_or("expected children")?;
	let setup = children
		.iter()
		.find(|child| child["name"] == "setup")
		.ok_or("missing setup page")?;
	assert_eq!(setup["route"], "/guide/setup");
	assert_eq!(setup["frontMatter"]["title"], "Setup");

	let index = children
		.iter()
		.find(|child| child["name"] == "index")
		.ok_or("missing guide index")?;
	assert!(index.get("frontMatter").is_none());
	assert!(index.get("locale").is_none());

	let meta = children
		.iter()
		.find(|child| child["name"] == "meta.json")
		.ok_or("missing meta descriptor")?;
	let keys: Vec<&String> = meta["meta"]
		.as_object()
		.ok_or("expected meta object")?
		.keys()
		.collect();
	assert_eq!(keys, ["index", "setup"]);

	assert!(items.iter().all(|item| item["name"] != "api"));

	Ok(())
}

#[test]
fn map_reports_empty_site() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_file(tmp.path(), "pages/logo.png", "png")?;

	common::honey_cmd()
		.arg("map")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("No pages found."));

	Ok(())
}

#[test]
fn map_fails_without_pages_dir() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::honey_cmd()
		.arg("map")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("honey::pages_dir_not_found"));

	Ok(())
}

#[test]
fn map_fails_on_malformed_meta() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_file(tmp.path(), "pages/index.md", "# Home\n")?;
	common::write_file(tmp.path(), "pages/docs/meta.json", "{ broken")?;

	common::honey_cmd()
		.arg("map")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("honey::meta_json"));

	Ok(())
}

#[test]
fn map_fails_on_invalid_config() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_file(tmp.path(), "honey.toml", "page_extensions = md\n")?;
	common::write_file(tmp.path(), "pages/index.md", "# Home\n")?;

	common::honey_cmd()
		.arg("map")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("honey::config_parse"));

	Ok(())
}

#[test]
fn map_respects_config() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_file(
		tmp.path(),
		"honey.toml",
		"pages_dir = \"docs\"\ntheme = \"honey-theme-docs\"\n\n[exclude]\nroutes = \
		 [\"/drafts\"]\n",
	)?;
	common::write_file(tmp.path(), "docs/guide.md", "# Guide\n")?;
	common::write_file(tmp.path(), "docs/api/endpoint.md", "# Endpoint\n")?;
	common::write_file(tmp.path(), "docs/drafts/wip.md", "# Wip\n")?;

	common::honey_cmd()
		.arg("map")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("guide /guide\n"))
		.stdout(predicates::str::contains("theme: honey-theme-docs\n"))
		.stdout(predicates::str::contains("endpoint").not())
		.stdout(predicates::str::contains("wip").not());

	Ok(())
}

#[test]
fn verbose_logs_to_stderr() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::docs_site(tmp.path())?;

	common::honey_cmd()
		.arg("--verbose")
		.arg("map")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stderr(predicates::str::contains("installed page map"))
		.stderr(predicates::str::contains("skipping excluded route"));

	common::honey_cmd()
		.arg("map")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stderr(predicates::str::is_empty());

	Ok(())
}

#[test]
fn map_command_is_accepted_by_cli_parser() {
	let cli = HoneyCli::parse_from(["honey", "map"]);
	match cli.command {
		Some(Commands::Map { format }) => assert!(matches!(format, OutputFormat::Text)),
		_ => panic!("expected Map command"),
	}

	let cli = HoneyCli::parse_from(["honey", "map", "--format", "json", "--verbose"]);
	assert!(cli.verbose);
	match cli.command {
		Some(Commands::Map { format }) => assert!(matches!(format, OutputFormat::Json)),
		_ => panic!("expected Map command"),
	}
}

#[test]
fn missing_subcommand_exits_with_usage_hint() {
	common::honey_cmd()
		.assert()
		.code(1)
		.stderr(predicates::str::contains("honey --help"));
}
