//! CLI definition, settings resolution and pipeline dispatch.

use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::console_report::{format_group_table, format_overall};
use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::file_discovery::discover_files;
use crate::adapters::file_report_adapter::FileReportAdapter;
use crate::domain::aggregate::{
    AggregateStats, GroupedStats, aggregate_by_stake_tier, aggregate_by_type, aggregate_overall,
};
use crate::domain::error::TourneyError;
use crate::domain::filter::filter_records;
use crate::domain::record::TournamentRecord;
use crate::domain::settings::{Delimiter, Mode, RunSettings, TextEncoding, parse_setting};
use crate::ports::config_port::ConfigPort;
use crate::ports::record_source::RecordSource;
use crate::ports::report_port::ReportPort;

#[derive(Parser, Debug)]
#[command(
    name = "tourneystats",
    about = "Poker tournament result aggregator (PokerCraft summary exports)"
)]
pub struct Cli {
    /// Processing mode [default: summaries]
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,
    /// CSV file or directory of exports
    #[arg(long)]
    pub input: PathBuf,
    /// Directory for generated artifacts [default: ./output]
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Keep only records in this currency (e.g. USD)
    #[arg(long)]
    pub currency: Option<String>,
    /// Earliest date to keep (YYYY-MM-DD)
    #[arg(long)]
    pub min_date: Option<NaiveDate>,
    /// Latest date to keep (YYYY-MM-DD)
    #[arg(long)]
    pub max_date: Option<NaiveDate>,
    /// CSV field delimiter [default: ,]
    #[arg(long)]
    pub delimiter: Option<Delimiter>,
    /// Input file encoding [default: utf-8]
    #[arg(long)]
    pub encoding: Option<TextEncoding>,
    /// Verbose logging
    #[arg(long)]
    pub verbose: bool,
    /// Skip the per-group console tables
    #[arg(long)]
    pub no_console_table: bool,
    /// Optional INI file supplying defaults for the options above
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Everything a finished run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub records: Vec<TournamentRecord>,
    pub overall: AggregateStats,
    pub by_stake_tier: GroupedStats,
    pub by_type: GroupedStats,
    pub artifacts: Vec<PathBuf>,
}

pub fn run(cli: Cli) -> ExitCode {
    let settings = match resolve_settings(&cli) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    init_logging(settings.verbose);

    match run_batch(&settings) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            (&e).into()
        }
    }
}

/// Install the `env_logger` backend; `RUST_LOG` overrides the default level.
pub fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_target(false)
        .format_timestamp(None)
        .try_init();
}

fn resolve_settings(cli: &Cli) -> Result<RunSettings, TourneyError> {
    match &cli.config {
        Some(path) => {
            let config = FileConfigAdapter::load(path)?;
            build_settings(cli, Some(&config as &dyn ConfigPort))
        }
        None => build_settings(cli, None),
    }
}

/// Merge command-line flags over config values over built-in defaults.
pub fn build_settings(
    cli: &Cli,
    config: Option<&dyn ConfigPort>,
) -> Result<RunSettings, TourneyError> {
    let lookup = |section: &str, key: &str| config.and_then(|c| c.get_non_empty(section, key));
    let switch = |section: &str, key: &str, default: bool| {
        config.map_or(default, |c| c.get_bool(section, key, default))
    };

    let mut settings = RunSettings::new(cli.input.clone());

    settings.mode = match (cli.mode, lookup("input", "mode")) {
        (Some(mode), _) => mode,
        (None, Some(raw)) => parse_setting("input", "mode", &raw)?,
        (None, None) => Mode::default(),
    };
    settings.delimiter = match (cli.delimiter, lookup("input", "delimiter")) {
        (Some(d), _) => d,
        (None, Some(raw)) => parse_setting("input", "delimiter", &raw)?,
        (None, None) => Delimiter::default(),
    };
    settings.encoding = match (cli.encoding, lookup("input", "encoding")) {
        (Some(e), _) => e,
        (None, Some(raw)) => parse_setting("input", "encoding", &raw)?,
        (None, None) => TextEncoding::default(),
    };

    if let Some(dir) = cli.output.clone().or_else(|| lookup("output", "dir").map(PathBuf::from)) {
        settings.output_dir = dir;
    }

    settings.filter.currency = cli.currency.clone().or_else(|| lookup("filter", "currency"));
    settings.filter.min_date = match (cli.min_date, lookup("filter", "min_date")) {
        (Some(d), _) => Some(d),
        (None, Some(raw)) => Some(parse_config_date("min_date", &raw)?),
        (None, None) => None,
    };
    settings.filter.max_date = match (cli.max_date, lookup("filter", "max_date")) {
        (Some(d), _) => Some(d),
        (None, Some(raw)) => Some(parse_config_date("max_date", &raw)?),
        (None, None) => None,
    };

    settings.verbose = cli.verbose || switch("logging", "verbose", false);
    settings.console_table = !cli.no_console_table && switch("output", "console_table", true);

    Ok(settings)
}

fn parse_config_date(key: &str, raw: &str) -> Result<NaiveDate, TourneyError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        TourneyError::invalid("filter", key, format!("invalid {key} format, expected YYYY-MM-DD"))
    })
}

/// Discover input files and run the pipeline with the filesystem adapters.
pub fn run_batch(settings: &RunSettings) -> Result<RunOutcome, TourneyError> {
    log::info!("Searching for files in {}", settings.input.display());
    let files = discover_files(&settings.input, settings.mode)?;
    if files.is_empty() {
        return Err(TourneyError::NoFilesFound {
            path: settings.input.clone(),
        });
    }
    log::info!("Found {} files", files.len());

    let source = CsvAdapter::new(settings.delimiter, settings.encoding);
    let sink = FileReportAdapter::new();
    run_pipeline(&source, &sink, settings, &files)
}

/// Load, filter, aggregate, print and write artifacts.
pub fn run_pipeline(
    source: &dyn RecordSource,
    sink: &dyn ReportPort,
    settings: &RunSettings,
    files: &[PathBuf],
) -> Result<RunOutcome, TourneyError> {
    // Stage 1: Load
    let report = source.load(files);
    log::info!(
        "Loaded {} records from {} files ({} skipped, {} rows without a valid date)",
        report.records.len(),
        report.files_read,
        report.skipped.len(),
        report.dropped_rows,
    );
    for reason in report.reasons() {
        log::debug!("skipped: {reason}");
    }
    if report.records.is_empty() {
        return Err(TourneyError::NoRecordsLoaded);
    }

    // Stage 2: Filter
    let records = filter_records(&report.records, &settings.filter);
    if records.is_empty() {
        return Err(TourneyError::AllRecordsFiltered);
    }
    if !settings.filter.is_empty() {
        log::info!("{} records after filtering", records.len());
    }

    // Stage 3: Aggregate
    let overall = aggregate_overall(&records);
    let by_stake_tier = aggregate_by_stake_tier(&records);
    let by_type = aggregate_by_type(&records);

    // Stage 4: Console
    print!("{}", format_overall(&overall));
    if settings.console_table {
        print!("{}", format_group_table("BY LIMITS", &by_stake_tier));
        print!("{}", format_group_table("BY TOURNAMENT TYPE", &by_type));
    }

    // Stage 5: Artifacts
    let artifacts = vec![
        sink.write_records(&records, &settings.output_dir)?,
        sink.write_overall(&overall, &settings.output_dir)?,
    ];

    Ok(RunOutcome {
        records,
        overall,
        by_stake_tier,
        by_type,
        artifacts,
    })
}
