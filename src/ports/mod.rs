//! Port traits decoupling the pipeline from its I/O.

pub mod config_port;
pub mod record_source;
pub mod report_port;
