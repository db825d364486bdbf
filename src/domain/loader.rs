//! Header validation and row-to-record mapping for summary exports.
//!
//! Headers are checked once per file and turned into a [`ColumnMap`]; rows
//! are then mapped by column index.

use super::coercion::{parse_amount, parse_date, to_amount, to_count};
use super::record::{RecordFields, TournamentRecord};
use super::settings::DecodeError;
use std::fmt;
use std::path::PathBuf;

pub const REQUIRED_COLUMNS: [&str; 4] = ["Date", "Tournament", "BuyIn", "Result"];

/// Column positions resolved from a file's header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    date: usize,
    tournament: usize,
    buyin: usize,
    result: usize,
    rake: Option<usize>,
    placement: Option<usize>,
    field_size: Option<usize>,
    currency: Option<usize>,
    tournament_type: Option<usize>,
}

impl ColumnMap {
    /// Resolve columns by exact, case-sensitive header name.
    ///
    /// On failure returns the required columns that are missing, in
    /// declaration order.
    pub fn from_headers<'h, I>(headers: I) -> Result<Self, Vec<String>>
    where
        I: IntoIterator<Item = &'h str>,
    {
        let headers: Vec<&str> = headers.into_iter().collect();
        // The last column wins when a header name repeats.
        let find = |name: &str| headers.iter().rposition(|h| *h == name);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|&&name| find(name).is_none())
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(missing);
        }

        let required = |name: &str| find(name).unwrap_or_default();
        Ok(Self {
            date: required("Date"),
            tournament: required("Tournament"),
            buyin: required("BuyIn"),
            result: required("Result"),
            rake: find("Rake"),
            placement: find("Placement"),
            field_size: find("FieldSize"),
            currency: find("Currency"),
            tournament_type: find("Type"),
        })
    }

    /// Map one row to a record. `cell(i)` returns the raw text at column `i`,
    /// or `None` when the row is shorter than the header.
    ///
    /// Returns `None` only when the date is missing or unparseable.
    pub fn to_record<'r, F>(&self, cell: F) -> Option<TournamentRecord>
    where
        F: Fn(usize) -> Option<&'r str>,
    {
        let text = |i: usize| cell(i).unwrap_or("");
        let optional = |i: Option<usize>| i.and_then(&cell);

        let date = parse_date(text(self.date))?;

        let amount = |column: &str, raw: &str| {
            if !raw.is_empty() && parse_amount(raw).is_none() {
                log::debug!("unparseable {column} value '{raw}', using 0.0");
            }
            to_amount(raw)
        };

        Some(TournamentRecord::new(
            date,
            RecordFields {
                tournament: cell(self.tournament),
                buyin_total: amount("BuyIn", text(self.buyin)),
                rake: self.rake.map_or(0.0, |i| amount("Rake", text(i))),
                prize: amount("Result", text(self.result)),
                placement: optional(self.placement).and_then(to_count),
                field_size: optional(self.field_size).and_then(to_count),
                currency: optional(self.currency),
                tournament_type: optional(self.tournament_type),
            },
        ))
    }
}

/// Why a file contributed no records.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SkipReason {
    #[error("missing required columns {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("cannot read file: {0}")]
    Unreadable(String),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: SkipReason,
}

impl fmt::Display for SkippedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.reason)
    }
}

/// Outcome of loading a batch of files.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Records across all files, in file-then-row order.
    pub records: Vec<TournamentRecord>,
    pub files_read: usize,
    pub skipped: Vec<SkippedFile>,
    /// Rows dropped for lacking a parseable date.
    pub dropped_rows: usize,
}

impl LoadReport {
    pub fn skip(&mut self, path: PathBuf, reason: SkipReason) {
        self.skipped.push(SkippedFile { path, reason });
    }

    /// Human-readable skip reasons, one per skipped file.
    pub fn reasons(&self) -> Vec<String> {
        self.skipped.iter().map(ToString::to_string).collect()
    }
}
