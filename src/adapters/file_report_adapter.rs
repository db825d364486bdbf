//! Flat-file artifact writer implementing ReportPort.
//!
//! Produces `tournaments_aggregated.csv` and `summary_overall.json` in the
//! output directory, creating it if needed.

use crate::domain::aggregate::AggregateStats;
use crate::domain::error::TourneyError;
use crate::domain::record::TournamentRecord;
use crate::domain::stake_tier::StakeTier;
use crate::ports::report_port::ReportPort;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const RECORDS_FILE: &str = "tournaments_aggregated.csv";
pub const OVERALL_FILE: &str = "summary_overall.json";

const RECORD_COLUMNS: [&str; 11] = [
    "date",
    "tournament",
    "buyin_total",
    "rake",
    "prize",
    "profit",
    "placement",
    "field_size",
    "currency",
    "type",
    "limit_group",
];

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Serialize)]
struct RecordRow<'a> {
    date: String,
    tournament: &'a str,
    buyin_total: f64,
    rake: f64,
    prize: f64,
    profit: f64,
    placement: Option<u32>,
    field_size: Option<u32>,
    currency: &'a str,
    tournament_type: &'a str,
    limit_group: &'static str,
}

impl<'a> From<&'a TournamentRecord> for RecordRow<'a> {
    fn from(r: &'a TournamentRecord) -> Self {
        Self {
            date: r.date.format(DATE_FORMAT).to_string(),
            tournament: &r.tournament,
            buyin_total: r.buyin_total,
            rake: r.rake,
            prize: r.prize,
            profit: r.profit,
            placement: r.placement,
            field_size: r.field_size,
            currency: &r.currency,
            tournament_type: &r.tournament_type,
            limit_group: StakeTier::from_buyin(r.buyin_total).label(),
        }
    }
}

#[derive(Debug, Default)]
pub struct FileReportAdapter;

impl FileReportAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl ReportPort for FileReportAdapter {
    fn write_records(
        &self,
        records: &[TournamentRecord],
        output_dir: &Path,
    ) -> Result<PathBuf, TourneyError> {
        fs::create_dir_all(output_dir)?;
        let path = output_dir.join(RECORDS_FILE);

        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&path)?;
        wtr.write_record(RECORD_COLUMNS)?;
        for record in records {
            wtr.serialize(RecordRow::from(record))?;
        }
        wtr.flush()?;

        log::info!("CSV saved: {}", path.display());
        Ok(path)
    }

    fn write_overall(
        &self,
        stats: &AggregateStats,
        output_dir: &Path,
    ) -> Result<PathBuf, TourneyError> {
        fs::create_dir_all(output_dir)?;
        let path = output_dir.join(OVERALL_FILE);

        let mut file = fs::File::create(&path)?;
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut file, formatter);
        stats.serialize(&mut ser)?;
        file.flush()?;

        log::info!("JSON saved: {}", path.display());
        Ok(path)
    }
}
