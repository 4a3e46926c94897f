use std::fmt::Write;

use bookworm_tui::TriggerPolicy;

use super::ResolvedConfig;

pub(super) fn format_summary(config: &ResolvedConfig) -> String {
	let mut text = String::from("Effective configuration:\n");
	let _ = writeln!(text, "  Catalog URL: {}", config.api.base_url);
	let _ = writeln!(text, "  Request timeout: {}s", config.api.timeout.as_secs());
	let _ = writeln!(text, "  Page size: {}", config.api.page_size);
	let _ = writeln!(text, "  Search trigger: {}", trigger_label(config.trigger));
	if let Some(query) = &config.initial_query {
		let _ = writeln!(text, "  Initial query: {query}");
	}
	let _ = writeln!(text, "  UI theme: {}", config.theme_name);
	let _ = writeln!(text, "  Start view: {}", config.start_view);
	let _ = writeln!(text, "  Log level: {}", config.log.level);
	match config.log.log_path() {
		Ok(path) => {
			let _ = writeln!(text, "  Log file: {}", path.display());
		}
		Err(err) => {
			let _ = writeln!(text, "  Log file: unavailable ({err})");
		}
	}
	if config.config_files.is_empty() {
		text.push_str("  Config files: (none)\n");
	} else {
		let _ = writeln!(text, "  Config files:");
		for path in &config.config_files {
			let _ = writeln!(text, "    {}", path.display());
		}
	}
	text
}

fn trigger_label(trigger: TriggerPolicy) -> String {
	match trigger {
		TriggerPolicy::Explicit => "explicit (Enter)".to_string(),
		TriggerPolicy::Live { quiet } => format!("live ({} ms pause)", quiet.as_millis()),
	}
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;
	use std::time::Duration;

	use bookworm::logging::LogOptions;
	use bookworm_catalog::HttpCatalogConfig;
	use bookworm_tui::{View, style};
	use insta::assert_snapshot;

	use super::*;

	#[test]
	fn summary_lists_effective_values() {
		let config = ResolvedConfig {
			api: HttpCatalogConfig::default(),
			trigger: TriggerPolicy::Live {
				quiet: Duration::from_millis(300),
			},
			initial_query: Some("dune".into()),
			theme_name: "slate".into(),
			theme: style::default_theme(),
			start_view: View::Search,
			log: LogOptions {
				level: "debug".into(),
				file: Some(PathBuf::from("/tmp/bookworm.log")),
			},
			config_files: vec![PathBuf::from("/etc/bookworm/config.toml")],
		};

		assert_snapshot!(format_summary(&config).trim_end(), @r"
		Effective configuration:
		  Catalog URL: http://localhost:8000
		  Request timeout: 30s
		  Page size: 10
		  Search trigger: live (300 ms pause)
		  Initial query: dune
		  UI theme: slate
		  Start view: search
		  Log level: debug
		  Log file: /tmp/bookworm.log
		  Config files:
		    /etc/bookworm/config.toml
		");
	}

	#[test]
	fn explicit_trigger_mentions_enter() {
		assert_eq!(trigger_label(TriggerPolicy::Explicit), "explicit (Enter)");
	}
}
