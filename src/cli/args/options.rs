use clap::ValueEnum;

/// Search trigger policies accepted via the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum TriggerArg {
	Explicit,
	Live,
}

impl TriggerArg {
	/// Return the string representation consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			TriggerArg::Explicit => "explicit",
			TriggerArg::Live => "live",
		}
	}
}

/// Views the interface can open on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ViewArg {
	Browse,
	Search,
	Account,
}

impl ViewArg {
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			ViewArg::Browse => "browse",
			ViewArg::Search => "search",
			ViewArg::Account => "account",
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
