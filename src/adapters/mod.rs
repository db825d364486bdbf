//! Concrete adapter implementations for ports.

pub mod csv_adapter;
pub mod file_config_adapter;
pub mod file_discovery;
pub mod file_report_adapter;
pub mod console_report;
