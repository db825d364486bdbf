//! Core domain types and logic.

pub mod coercion;
pub mod record;
pub mod loader;
pub mod filter;
pub mod stake_tier;
pub mod aggregate;
pub mod settings;
pub mod error;
