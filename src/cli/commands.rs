use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use clap::parser::ValueSource;
use clap::{ArgAction, ArgMatches, CommandFactory, FromArgMatches, Parser};

use super::args::normalize_args;
use super::interactive::run_interactive;
use crate::VERSION;
use crate::engine::Operation;
use crate::history::{ExportFormat, HistoryManager, HistoryStore};
use crate::utils::get_history_path;

const USAGE: &str = "Usage: -a <number> -b <number> -op <operation>";

#[derive(Parser, Debug)]
#[command(name = "calculator")]
#[command(about = "Command-line calculator with persisted calculation history", long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// First number
    #[arg(short = 'a', default_value_t = 0.0, allow_negative_numbers = true)]
    pub a: f64,

    /// Second number
    #[arg(short = 'b', default_value_t = 0.0, allow_negative_numbers = true)]
    pub b: f64,

    /// Operation: add, sub, mul, div, sqrt, pow, sin, cos
    #[arg(long)]
    pub op: Option<String>,

    /// Number of decimal places
    #[arg(long, default_value_t = 2)]
    pub precision: usize,

    /// Show detailed calculation
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub verbose: bool,

    /// Show version information
    #[arg(long)]
    pub version: bool,

    /// Start interactive mode
    #[arg(long)]
    pub interactive: bool,

    /// Show calculation history
    #[arg(long)]
    pub show_history: bool,

    /// Export history to JSON file
    #[arg(long, value_name = "PATH")]
    pub export_json: Option<PathBuf>,

    /// Export history to CSV file
    #[arg(long, value_name = "PATH")]
    pub export_csv: Option<PathBuf>,

    /// Export history to TXT report
    #[arg(long, value_name = "PATH")]
    pub export_txt: Option<PathBuf>,

    /// History file (default: $CALCULATOR_HISTORY_FILE or calculator_history.json)
    #[arg(long, value_name = "PATH")]
    pub history_file: Option<PathBuf>,
}

/// Parse the process arguments and run the selected mode
pub fn run() -> Result<()> {
    let matches = Cli::command().get_matches_from(normalize_args(std::env::args_os()));
    let cli = Cli::from_arg_matches(&matches)?;

    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    dispatch(&cli, count_explicit_flags(&matches), &mut out)
}

/// Parse an explicit argument list, for callers that are not `main`
pub fn parse_args<I, T>(args: I) -> Result<(Cli, usize)>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let matches = Cli::command().try_get_matches_from(normalize_args(args))?;
    let cli = Cli::from_arg_matches(&matches)?;
    Ok((cli, count_explicit_flags(&matches)))
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .try_init();
}

/// Flags the user actually typed, as opposed to defaults
fn count_explicit_flags(matches: &ArgMatches) -> usize {
    matches
        .ids()
        .filter(|id| matches.value_source(id.as_str()) == Some(ValueSource::CommandLine))
        .count()
}

/// Select and run one mode, in priority order
pub fn dispatch(cli: &Cli, flag_count: usize, out: &mut dyn Write) -> Result<()> {
    if cli.version {
        writeln!(out, "Calculator v{}", VERSION)?;
        return Ok(());
    }

    let mut history = HistoryManager::open(get_history_path(cli.history_file.as_deref()));

    if cli.interactive {
        let stdin = io::stdin();
        run_interactive(&mut history, stdin.lock(), out, cli.precision)
            .context("Interactive session failed")?;
        return Ok(());
    }

    if cli.show_history {
        history.show(out)?;
        return Ok(());
    }

    let exports = [
        (ExportFormat::Json, &cli.export_json),
        (ExportFormat::Csv, &cli.export_csv),
        (ExportFormat::Txt, &cli.export_txt),
    ];
    if let Some((format, Some(path))) = exports.into_iter().find(|(_, path)| path.is_some()) {
        return export_history(&history, format, path, out);
    }

    run_one_shot(cli, flag_count, &mut history, out)
}

fn export_history(
    history: &HistoryManager,
    format: ExportFormat,
    path: &Path,
    out: &mut dyn Write,
) -> Result<()> {
    let count = history
        .export(format, path)
        .with_context(|| format!("Failed to export history as {}", format.name()))?;
    writeln!(out, "History exported to {} ({} calculations)", path.display(), count)?;
    Ok(())
}

fn run_one_shot(
    cli: &Cli,
    flag_count: usize,
    history: &mut dyn HistoryStore,
    out: &mut dyn Write,
) -> Result<()> {
    if flag_count < 2 {
        bail!("all flags are required\n{}", USAGE);
    }

    let op_name = cli.op.as_deref().filter(|name| !name.is_empty());
    let Some(op_name) = op_name else {
        bail!("operation is required\n{}", USAGE);
    };

    let operation = Operation::from_name(op_name).map_err(|e| {
        let valid: Vec<&str> = Operation::ALL.iter().map(|op| op.name()).collect();
        anyhow!("{} (valid operations: {})", e, valid.join(", "))
    })?;

    let result = operation.apply(cli.a, cli.b)?;
    history.add(&operation.describe(cli.a, cli.b), result);

    let p = cli.precision;
    if !cli.verbose {
        writeln!(out, "{:.*}", p, result)?;
    } else if operation.arity() == 1 {
        writeln!(out, "Calculating: {}({:.*}) = {:.*}", operation.name(), p, cli.a, p, result)?;
    } else {
        writeln!(
            out,
            "Calculating: {:.*} {} {:.*} = {:.*}",
            p,
            cli.a,
            operation.symbol(),
            p,
            cli.b,
            p,
            result
        )?;
    }

    Ok(())
}
