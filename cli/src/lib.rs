mod config;
pub use config::*;

mod inspect;
pub use inspect::*;

mod normalize;
pub use normalize::*;

mod check;
pub use check::*;

mod relations;
pub use relations::*;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
	#[error("could not read input: {0}")]
	Io(#[from] std::io::Error),

	#[error("invalid json: {0}")]
	Json(#[from] serde_json::Error),

	#[error("failed reading document: {0}")]
	Vocabulary(#[from] astypes::Error),

	#[error("no vocabulary type named '{0}'")]
	UnknownType(String),

	#[error("document changed while round tripping, first difference at {0}")]
	RoundTrip(String),
}

#[derive(Debug, Clone, clap::Subcommand)]
pub enum CliCommand {
	/// show type, relations and property kinds of a document
	Inspect {
		/// json file to read, or - for stdin
		file: String,
	},

	/// read a document and write it back
	Normalize {
		/// json file to read, or - for stdin
		file: String,

		#[arg(long, default_value_t = false)]
		/// sort non-functional properties into canonical order, overrides config value
		sort: bool,

		#[arg(long, default_value_t = false)]
		/// never add a @context, overrides config value
		no_context: bool,
	},

	/// verify that a document survives a round trip unchanged
	Check {
		/// json file to read, or - for stdin
		file: String,
	},

	/// list ancestors, descendants and disjoint types of a vocabulary type
	Relations {
		/// type name, such as Note or OrderedCollectionPage
		name: String,
	},
}

pub fn run(config: &Config, command: CliCommand) -> Result<(), CliError> {
	tracing::debug!("running cli task: {command:?}");
	let manager = astypes::Manager::standard();
	match command {
		CliCommand::Inspect { file } =>
			inspect(&manager, &read_document(&file)?),
		CliCommand::Normalize { file, sort, no_context } =>
			normalize(config, &manager, &read_document(&file)?, sort, no_context),
		CliCommand::Check { file } =>
			check(&manager, &read_document(&file)?),
		CliCommand::Relations { name } =>
			relations(&name),
	}
}

/// Parses json from `path`, `-` meaning stdin.
pub fn read_document(path: &str) -> Result<serde_json::Value, CliError> {
	let raw = if path == "-" {
		std::io::read_to_string(std::io::stdin())?
	} else {
		std::fs::read_to_string(path)?
	};
	Ok(serde_json::from_str(&raw)?)
}
