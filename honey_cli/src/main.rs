use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::Parser;
use honey_cli::Commands;
use honey_cli::HoneyCli;
use honey_cli::OutputFormat;
use honey_core::AnyEmptyResult;
use honey_core::AnyError;
use honey_core::AnyResult;
use honey_core::BuildHook;
use honey_core::FileNode;
use honey_core::HoneyConfig;
use honey_core::PageMapCache;
use honey_core::PageMapSnapshot;
use honey_core::PageNode;
use honey_core::find_pages_dir;
use honey_core::tags::TagIndex;
use owo_colors::OwoColorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,cyan) => {
		if color_enabled() {
			format!("{}", $text.cyan())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,dimmed) => {
		if color_enabled() {
			format!("{}", $text.dimmed())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = HoneyCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	init_tracing(&args);

	let result = match args.command {
		Some(Commands::Init) => run_init(&args),
		Some(Commands::Map { format }) => run_map(&args, format),
		Some(Commands::Routes) => run_routes(&args),
		Some(Commands::Tags { format }) => run_tags(&args, format),
		None => {
			eprintln!("No subcommand specified. Run `honey --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		match e.downcast::<honey_core::HoneyError>() {
			Ok(honey_err) => {
				let report: miette::Report = (*honey_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

/// Logs go to stderr so that stdout stays parseable. `RUST_LOG` takes
/// precedence over `--verbose`.
fn init_tracing(args: &HoneyCli) {
	let default_level = if args.verbose { "debug" } else { "warn" };
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_target(false)
		.with_writer(std::io::stderr)
		.try_init()
		.ok();
}

fn resolve_root(args: &HoneyCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Fire the build hook once, the way a build does before compiling, and read
/// the page map back from the cache together with the effective config.
fn build_page_map(args: &HoneyCli) -> AnyResult<(HoneyConfig, Arc<PageMapSnapshot>)> {
	let root = resolve_root(args);
	let cache = Arc::new(PageMapCache::new());
	let hook = BuildHook::from_root(&root, Arc::clone(&cache))?;

	let mut outcome = Ok(());
	hook.before_compile(|result| outcome = result);
	outcome?;

	let snapshot = cache
		.get()
		.ok_or_else(|| AnyError::from("the page map cache was cleared during the build"))?;

	Ok((hook.config().clone(), snapshot))
}

fn run_init(args: &HoneyCli) -> AnyEmptyResult {
	let root = resolve_root(args);
	let config_path = root.join("honey.toml");

	if config_path.exists() {
		println!("Config file already exists: {}", config_path.display());
	} else {
		let sample_config = "# honey configuration\n\n# Pages directory relative to the project \
		                     root. Defaults to pages/ or src/pages/.\n# pages_dir = \
		                     \"pages\"\n\n# Extensions of content pages.\npage_extensions = \
		                     [\"md\", \"mdx\"]\n\n# Section meta files: meta.json and \
		                     meta.<locale>.json.\n[meta]\nstem = \"meta\"\nextension = \
		                     \"json\"\n\n# Extra directory routes left out of the page map. \
		                     /api is always skipped.\n[exclude]\n# routes = \
		                     [\"/drafts\"]\n\n[search]\nenabled = false\n";

		std::fs::write(&config_path, sample_config)?;
		println!("Created honey.toml");
	}

	let config = HoneyConfig::load(&root)?;
	let pages_dir = find_pages_dir(&root, config.as_ref()).unwrap_or_else(|_| root.join("pages"));
	let index_path = pages_dir.join("index.md");

	if index_path.exists() {
		println!("Page already exists: {}", index_path.display());
	} else {
		std::fs::create_dir_all(&pages_dir)?;
		std::fs::write(
			&index_path,
			"---\ntitle: Home\n---\n\n# Welcome\n\nThis page is served at `/`.\n",
		)?;
		println!("Created page: {}", index_path.display());

		println!();
		println!("Next steps:");
		println!("  1. Add pages next to {}", index_path.display());
		println!("  2. Order them with a meta.json file in each directory");
		println!("  3. Run `honey map` to see the page map");
	}

	Ok(())
}

fn run_map(args: &HoneyCli, format: OutputFormat) -> AnyEmptyResult {
	let (config, snapshot) = build_page_map(args)?;

	match format {
		OutputFormat::Json => {
			println!("{}", serde_json::to_string_pretty(&snapshot.items)?);
		}
		OutputFormat::Text => {
			if snapshot.items.is_empty() {
				println!("No pages found.");
				return Ok(());
			}

			print_nodes(&snapshot.items, 0);
			println!(
				"\n{} page(s), {} file(s)",
				snapshot.pages().count(),
				snapshot.file_map.len()
			);
			if let Some(theme) = &config.theme {
				println!("theme: {theme}");
			}
		}
	}

	Ok(())
}

fn print_nodes(items: &[PageNode], depth: usize) {
	let indent = "  ".repeat(depth);

	for item in items {
		match item {
			PageNode::Section(section) => {
				let name = format!("{}/", section.name);
				println!(
					"{indent}{} {}",
					colored!(name, bold),
					colored!(section.route, dimmed)
				);
				print_nodes(&section.children, depth + 1);
			}
			PageNode::Page(page) => {
				let locale = page
					.locale
					.as_deref()
					.map(|locale| format!(" [{locale}]"))
					.unwrap_or_default();
				println!(
					"{indent}{} {}{locale}",
					page.name,
					colored!(page.route, cyan)
				);
			}
			PageNode::Meta(meta) => {
				let locale = meta
					.locale
					.as_deref()
					.map(|locale| format!(" [{locale}]"))
					.unwrap_or_default();
				println!("{indent}{} {}{locale}", meta.name, colored!("(meta)", dimmed));
			}
		}
	}
}

fn run_routes(args: &HoneyCli) -> AnyEmptyResult {
	let (_, snapshot) = build_page_map(args)?;
	let pages: Vec<_> = snapshot
		.file_map
		.iter()
		.filter_map(|(path, node)| match node {
			FileNode::Page(page) => Some((page, path)),
			FileNode::Meta(_) => None,
		})
		.collect();

	if pages.is_empty() {
		println!("No pages found.");
		return Ok(());
	}

	let width = pages
		.iter()
		.map(|(page, _)| page.route.len())
		.max()
		.unwrap_or_default();
	for (page, path) in &pages {
		let route = format!("{:<width$}", page.route);
		println!("{} {}", colored!(route, cyan), path.display());
	}

	debug!(pages = pages.len(), "listed routes");
	println!("\n{} route(s)", pages.len());

	Ok(())
}

fn run_tags(args: &HoneyCli, format: OutputFormat) -> AnyEmptyResult {
	let (_, snapshot) = build_page_map(args)?;
	let index = TagIndex::from_snapshot(&snapshot);

	match format {
		OutputFormat::Json => {
			println!("{}", serde_json::to_string_pretty(&index.tags)?);
		}
		OutputFormat::Text => {
			if index.is_empty() {
				println!("No tags found.");
				return Ok(());
			}

			for (tag, routes) in &index.tags {
				println!("{} ({})", colored!(tag, bold), routes.len());
				for route in routes {
					println!("  {route}");
				}
			}
		}
	}

	Ok(())
}

