use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{OutputFormat, TriggerArg, ViewArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `bookworm` binary.
#[derive(Parser, Debug)]
#[command(
	name = "bookworm",
	version,
	long_version = long_version(),
	about = "Search a remote book catalog from the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "BOOKWORM_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'a',
		long = "api-url",
		value_name = "URL",
		help = "Base URL of the catalog service (default: http://localhost:8000)"
	)]
	pub(crate) api_url: Option<String>,
	#[arg(
		long = "page-size",
		value_name = "NUM",
		help = "Number of results requested per page (default: 10)"
	)]
	pub(crate) page_size: Option<u32>,
	#[arg(
		long = "timeout",
		value_name = "SECS",
		help = "Catalog request timeout in seconds (default: 30)"
	)]
	pub(crate) timeout: Option<u64>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Search for this query on launch (default: none)"
	)]
	pub(crate) query: Option<String>,
	#[arg(
		long,
		value_enum,
		help = "When searches are issued: on Enter, or after typing pauses (default: explicit)"
	)]
	pub(crate) trigger: Option<TriggerArg>,
	#[arg(
		long = "debounce-ms",
		value_name = "MS",
		help = "Quiet period before a live search fires (default: 500)"
	)]
	pub(crate) debounce_ms: Option<u64>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'v',
		long = "view",
		value_enum,
		help = "View shown on launch (default: browse, or search with --query)"
	)]
	pub(crate) view: Option<ViewArg>,
	#[arg(
		long = "log-level",
		value_name = "FILTER",
		help = "Log filter used when RUST_LOG is unset (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Write logs to this file (default: bookworm.log in the data directory)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'b',
		long = "batch",
		requires = "query",
		help = "Print one page of results for --query instead of opening the interface"
	)]
	pub(crate) batch: bool,
	#[arg(
		long = "page",
		value_name = "NUM",
		default_value_t = 1,
		value_parser = clap::value_parser!(u32).range(1..),
		help = "Page printed in batch mode"
	)]
	pub(crate) page: u32,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
