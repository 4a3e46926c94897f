use std::fmt::Write;

use bookworm::app_dirs::{self, AppDir};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};

use crate::settings::default_config_files;

/// Version banner listing where bookworm looks for configuration and where
/// it writes logs.
pub(super) fn long_version() -> &'static str {
	Box::leak(version_details().into_boxed_str())
}

fn version_details() -> String {
	let mut details = format!("bookworm {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	for dir in AppDir::ALL {
		let location = match dir.path() {
			Ok(path) => path.display().to_string(),
			Err(err) => format!("unavailable ({err})"),
		};
		let _ = writeln!(details, "{dir} directory: {location} (${})", dir.env_var());
	}
	let _ = writeln!(details, "config files searched:");
	for path in default_config_files() {
		let _ = writeln!(details, "  {}", path.display());
	}
	match app_dirs::default_log_file() {
		Ok(path) => {
			let _ = write!(details, "default log file: {}", path.display());
		}
		Err(err) => {
			let _ = write!(details, "default log file: unavailable ({err})");
		}
	}
	details
}

/// Help colours: section headers stand out, flags read like commands.
pub(super) fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.placeholder(AnsiColor::Cyan.on_default())
		.error(AnsiColor::Red.on_default().effects(Effects::BOLD))
		.valid(AnsiColor::Green.on_default())
		.invalid(AnsiColor::Red.on_default())
}
