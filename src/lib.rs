//! Stable registry library
//!
//! Mints randomized racehorses (name, body stats, campaign, status flags)
//! into a small rolling stable persisted to a local key-value store.

pub mod config;
pub mod data;
pub mod error;
pub mod format;
pub mod horse;
pub mod naming;
pub mod persistence;
pub mod random;
pub mod render;
pub mod stable;
