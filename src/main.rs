mod cli;
mod settings;
mod workflow;

use anyhow::{Context, Result};
use cli::{CliArgs, parse_cli, print_page, print_summary};
use settings::ResolvedConfig;
use workflow::CatalogWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in bookworm_tui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_catalog(&cli, resolved)
}

/// Run the batch search or the interactive session and print its result in
/// the chosen format.
fn run_catalog(cli: &CliArgs, settings: ResolvedConfig) -> Result<()> {
	let workflow = CatalogWorkflow::from_config(settings)?;

	if cli.batch {
		let query = cli
			.query
			.as_deref()
			.context("batch mode needs --query")?;
		let results = workflow.run_batch(query, cli.page)?;
		return print_page(cli.output, query.trim(), cli.page, &results);
	}

	let summary = workflow.run()?;
	print_summary(cli.output, &summary)
}
