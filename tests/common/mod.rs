#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tourneystats::domain::aggregate::AggregateStats;
use tourneystats::domain::error::TourneyError;
use tourneystats::domain::loader::LoadReport;
pub use tourneystats::domain::record::{RecordFields, TournamentRecord};
use tourneystats::domain::settings::RunSettings;
use tourneystats::ports::record_source::RecordSource;
use tourneystats::ports::report_port::ReportPort;

pub const HEADER: &str = "Date,Tournament,BuyIn,Rake,Result,Placement,FieldSize,Currency,Type";

/// Returns a fixed report regardless of the files requested.
pub struct MockRecordSource {
    pub report: LoadReport,
    pub requested: RefCell<Vec<PathBuf>>,
}

impl MockRecordSource {
    pub fn with_records(records: Vec<TournamentRecord>) -> Self {
        Self {
            report: LoadReport {
                files_read: 1,
                records,
                ..Default::default()
            },
            requested: RefCell::new(Vec::new()),
        }
    }
}

impl RecordSource for MockRecordSource {
    fn load(&self, files: &[PathBuf]) -> LoadReport {
        self.requested.borrow_mut().extend_from_slice(files);
        self.report.clone()
    }
}

/// Captures what the pipeline asked to write instead of touching disk.
#[derive(Default)]
pub struct RecordingReport {
    pub records: RefCell<Vec<TournamentRecord>>,
    pub overall: RefCell<Option<AggregateStats>>,
    pub fail: bool,
}

impl ReportPort for RecordingReport {
    fn write_records(
        &self,
        records: &[TournamentRecord],
        output_dir: &Path,
    ) -> Result<PathBuf, TourneyError> {
        if self.fail {
            return Err(TourneyError::Io(std::io::Error::other("disk full")));
        }
        self.records.borrow_mut().extend_from_slice(records);
        Ok(output_dir.join("records"))
    }

    fn write_overall(
        &self,
        stats: &AggregateStats,
        output_dir: &Path,
    ) -> Result<PathBuf, TourneyError> {
        *self.overall.borrow_mut() = Some(stats.clone());
        Ok(output_dir.join("overall"))
    }
}

pub fn at(date: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S").unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn make_record(when: &str, buyin: f64, prize: f64, currency: &str, t_type: &str) -> TournamentRecord {
    TournamentRecord::new(
        at(when),
        RecordFields {
            tournament: Some("Test MTT"),
            buyin_total: buyin,
            prize,
            currency: Some(currency),
            tournament_type: Some(t_type),
            ..Default::default()
        },
    )
}

pub fn settings_for(input: &Path, output: &Path) -> RunSettings {
    let mut settings = RunSettings::new(input.to_path_buf());
    settings.output_dir = output.to_path_buf();
    settings.console_table = false;
    settings
}

pub fn write_csv(dir: &Path, name: &str, rows: &[&str]) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let mut content = String::from(HEADER);
    content.push('\n');
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    fs::write(&path, content).unwrap();
    path
}
