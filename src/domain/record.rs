//! Normalized tournament result row.

use chrono::NaiveDateTime;

pub const DEFAULT_TOURNAMENT: &str = "Unknown";
pub const DEFAULT_CURRENCY: &str = "UNKNOWN";
pub const DEFAULT_TYPE: &str = "Unknown";

#[derive(Debug, Clone, PartialEq)]
pub struct TournamentRecord {
    pub date: NaiveDateTime,
    pub tournament: String,
    pub buyin_total: f64,
    pub rake: f64,
    pub prize: f64,
    pub profit: f64,
    pub placement: Option<u32>,
    pub field_size: Option<u32>,
    pub currency: String,
    pub tournament_type: String,
}

/// Raw field values for a [`TournamentRecord`], before defaults apply.
#[derive(Debug, Clone, Default)]
pub struct RecordFields<'a> {
    pub tournament: Option<&'a str>,
    pub buyin_total: f64,
    pub rake: f64,
    pub prize: f64,
    pub placement: Option<u32>,
    pub field_size: Option<u32>,
    pub currency: Option<&'a str>,
    pub tournament_type: Option<&'a str>,
}

impl TournamentRecord {
    /// Build a record, deriving `profit` and filling text defaults.
    ///
    /// An absent tournament name becomes "Unknown"; blank (after trim)
    /// currency and type fall back to their defaults.
    pub fn new(date: NaiveDateTime, fields: RecordFields<'_>) -> Self {
        let currency = non_blank(fields.currency).unwrap_or(DEFAULT_CURRENCY);
        let tournament_type = non_blank(fields.tournament_type).unwrap_or(DEFAULT_TYPE);
        Self {
            date,
            tournament: fields.tournament.unwrap_or(DEFAULT_TOURNAMENT).to_string(),
            buyin_total: fields.buyin_total,
            rake: fields.rake,
            prize: fields.prize,
            profit: fields.prize - fields.buyin_total,
            placement: fields.placement,
            field_size: fields.field_size,
            currency: currency.to_string(),
            tournament_type: tournament_type.to_string(),
        }
    }

    /// Whether the entry finished in the money.
    pub fn is_itm(&self) -> bool {
        self.prize > 0.0
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
