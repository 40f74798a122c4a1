//! Command implementations and argument parsing for the kindred CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use kindred_core::{
    CountingStrategy, KindredBuilder, KindredError, TokenSource, VariantRanking, define_error_codes,
};
use kindred_providers_text::{TextCorpus, TextCorpusError, WindowHeader};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const STDIN_NAME: &str = "stdin";
const STDIN_PATH: &str = "-";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "kindred", about = "Rank groups of spelling variants that appear close together.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Rank the variant groups of a document.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Input document; reads standard input when omitted or `-`.
    pub path: Option<PathBuf>,

    /// Counting strategy.
    #[arg(long, value_enum, default_value_t = StrategyArg::Sequential)]
    pub strategy: StrategyArg,

    /// Override name for the data source (defaults to the file stem or `stdin`).
    #[arg(long)]
    pub name: Option<String>,
}

/// Counting strategies selectable on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Count on the calling thread.
    #[default]
    Sequential,
    /// Count on the rayon thread pool.
    Parallel,
}

impl From<StrategyArg> for CountingStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Sequential => Self::Sequential,
            StrategyArg::Parallel => Self::Parallel,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Opening the input document failed.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The document could not be read or its header is malformed.
    #[error(transparent)]
    Corpus(#[from] TextCorpusError),
    /// Core pipeline failed.
    #[error(transparent)]
    Core(#[from] KindredError),
}

define_error_codes! {
    /// Stable codes describing [`CliError`] variants.
    enum CliErrorCode for CliError {
        /// Opening the input failed.
        Io => Io { .. } => "CLI_IO",
        /// Reading or parsing the document failed.
        Corpus => Corpus(..) => "CLI_CORPUS",
        /// The core pipeline failed.
        Core => Core(..) => "CLI_CORE",
    }
}

impl CliError {
    /// Stable code of the wrapped provider or core error, if any.
    #[must_use]
    pub fn source_code(&self) -> Option<&'static str> {
        match self {
            Self::Io { .. } => None,
            Self::Corpus(err) => Some(err.code().as_str()),
            Self::Core(err) => Some(err.code().as_str()),
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name of the data source, used in diagnostics.
    pub data_source: String,
    /// Window read from the document header, if there was one.
    pub header: Option<WindowHeader>,
    /// Ranked variant groups.
    pub ranking: VariantRanking,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be read or parsed, or the
/// pipeline fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kindred_cli::cli::{Cli, Command, RunCommand, StrategyArg, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "1\ncat cats bat\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path: Some(file.path().to_path_buf()),
///         strategy: StrategyArg::Sequential,
///         name: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.ranking.len(), 1);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(path = field::Empty, strategy = field::Empty),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand {
        path,
        strategy,
        name,
    } = command;
    let path = path.filter(|path| path.as_os_str() != STDIN_PATH);
    let span = Span::current();
    span.record(
        "path",
        field::display(path.as_deref().map_or(STDIN_NAME.into(), Path::to_string_lossy)),
    );
    let strategy = CountingStrategy::from(strategy);
    span.record("strategy", field::display(strategy.as_str()));

    let chosen_name = derive_data_source_name(path.as_deref(), name.as_deref());
    let summary = match path {
        Some(path) => run_with_reader(&chosen_name, open_reader(&path)?, strategy)?,
        None => run_with_reader(&chosen_name, io::stdin().lock(), strategy)?,
    };

    info!(
        data_source = summary.data_source.as_str(),
        ranked = summary.ranking.len(),
        "command completed"
    );
    Ok(summary)
}

/// Reads a document from `reader` and ranks its variant groups.
///
/// # Errors
/// Returns [`CliError::Corpus`] for unreadable or malformed input and
/// [`CliError::Core`] when the pipeline fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::io::Cursor;
/// # use kindred_cli::cli::run_with_reader;
/// # use kindred_core::CountingStrategy;
/// # use kindred_providers_text::WindowHeader;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let input = Cursor::new("0\ncat cat\n");
/// let summary = run_with_reader("demo", input, CountingStrategy::Sequential)?;
/// assert_eq!(summary.header, Some(WindowHeader::Radius(0)));
/// assert!(summary.ranking.is_empty());
/// # Ok(())
/// # }
/// ```
pub fn run_with_reader<R: BufRead>(
    name: &str,
    reader: R,
    strategy: CountingStrategy,
) -> Result<ExecutionSummary, CliError> {
    let corpus = TextCorpus::try_from_reader(name, reader)?;
    let kindred = KindredBuilder::new().with_strategy(strategy).build()?;
    let ranking = kindred.run(&corpus)?;
    Ok(ExecutionSummary {
        data_source: corpus.name().to_owned(),
        header: corpus.header(),
        ranking,
    })
}

fn open_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_data_source_name(path: Option<&Path>, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }
    let Some(path) = path else {
        return STDIN_NAME.to_owned();
    };
    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "data_source".to_owned())
}

/// Renders `summary` as one `representative: count` line per ranked group.
///
/// An empty ranking writes nothing.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kindred_cli::cli::{ExecutionSummary, render_summary};
/// # use kindred_core::{RankedCluster, VariantRanking};
/// # use kindred_providers_text::WindowHeader;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     data_source: "demo".into(),
///     header: Some(WindowHeader::Radius(1)),
///     ranking: VariantRanking::from_unsorted(vec![
///         RankedCluster::new("dig", 4, vec!["dig".into(), "dog".into()]),
///     ]),
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "dig: 4\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    for entry in &summary.ranking {
        writeln!(writer, "{}: {}", entry.representative(), entry.count())?;
    }
    Ok(())
}
