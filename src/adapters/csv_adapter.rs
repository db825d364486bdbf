//! CSV summary export adapter implementing RecordSource.

use crate::domain::loader::{ColumnMap, LoadReport, SkipReason};
use crate::domain::record::TournamentRecord;
use crate::domain::settings::{Delimiter, TextEncoding};
use crate::ports::record_source::RecordSource;
use csv::StringRecord;
use std::fs;
use std::path::{Path, PathBuf};

pub struct CsvAdapter {
    delimiter: Delimiter,
    encoding: TextEncoding,
}

impl CsvAdapter {
    pub fn new(delimiter: Delimiter, encoding: TextEncoding) -> Self {
        Self {
            delimiter,
            encoding,
        }
    }

    fn reader<'a>(&self, text: &'a str) -> csv::Reader<&'a [u8]> {
        csv::ReaderBuilder::new()
            .delimiter(self.delimiter.byte())
            .flexible(true)
            .from_reader(text.as_bytes())
    }

    fn load_file(&self, path: &Path) -> Result<FileLoad, SkipReason> {
        log::debug!("Reading file: {}", path.display());

        let bytes = fs::read(path).map_err(|e| SkipReason::Unreadable(e.to_string()))?;
        let text = self.encoding.decode(&bytes)?;
        let mut rdr = self.reader(&text);

        let headers = rdr
            .headers()
            .map_err(|e| SkipReason::Unreadable(e.to_string()))?;
        let names = header_names(headers, self.encoding.keeps_bom() && text.starts_with('\u{feff}'));
        let columns = ColumnMap::from_headers(names.iter().map(String::as_str))
            .map_err(SkipReason::MissingColumns)?;

        let mut load = FileLoad::default();
        for result in rdr.records() {
            let row = result.map_err(|e| SkipReason::Unreadable(e.to_string()))?;
            match columns.to_record(|i| row.get(i)) {
                Some(record) => load.records.push(record),
                None => {
                    load.dropped_rows += 1;
                    log::debug!(
                        "Invalid date, skipping row in {}: {:?}",
                        path.display(),
                        row.iter().collect::<Vec<_>>()
                    );
                }
            }
        }
        Ok(load)
    }
}

/// Rows taken from one file; merged into the report only if the whole file parsed.
#[derive(Default)]
struct FileLoad {
    records: Vec<TournamentRecord>,
    dropped_rows: usize,
}

/// The csv reader drops a leading BOM. When the encoding keeps it, it is
/// restored onto the first header so a `\u{feff}Date` column stays unmatched.
fn header_names(headers: &StringRecord, restore_bom: bool) -> Vec<String> {
    headers
        .iter()
        .enumerate()
        .map(|(i, name)| {
            if restore_bom && i == 0 {
                format!("\u{feff}{name}")
            } else {
                name.to_string()
            }
        })
        .collect()
}

impl RecordSource for CsvAdapter {
    fn load(&self, files: &[PathBuf]) -> LoadReport {
        let mut report = LoadReport::default();

        for path in files {
            match self.load_file(path) {
                Ok(load) => {
                    report.files_read += 1;
                    report.dropped_rows += load.dropped_rows;
                    report.records.extend(load.records);
                }
                Err(reason) => {
                    match &reason {
                        SkipReason::MissingColumns(_) => {
                            log::warn!("Skipping {}: {}", path.display(), reason)
                        }
                        _ => log::error!("Failed to read '{}': {}", path.display(), reason),
                    }
                    report.skip(path.clone(), reason);
                }
            }
        }

        report
    }
}
