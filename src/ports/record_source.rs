//! Record loading port trait.

use crate::domain::loader::LoadReport;
use std::path::PathBuf;

pub trait RecordSource {
    /// Load every readable file in order. Never fails as a whole: per-file
    /// problems are collected in the returned report.
    fn load(&self, files: &[PathBuf]) -> LoadReport;
}
