//! Artifact output port trait.

use crate::domain::aggregate::AggregateStats;
use crate::domain::error::TourneyError;
use crate::domain::record::TournamentRecord;
use std::path::{Path, PathBuf};

/// Port for writing run artifacts into an output directory.
pub trait ReportPort {
    /// Write one row per record; returns the path written.
    fn write_records(
        &self,
        records: &[TournamentRecord],
        output_dir: &Path,
    ) -> Result<PathBuf, TourneyError>;

    fn write_overall(
        &self,
        stats: &AggregateStats,
        output_dir: &Path,
    ) -> Result<PathBuf, TourneyError>;
}
