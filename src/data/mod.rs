//! Static reference data: name word banks, enumerations, and the race
//! program / track directory.

pub mod names;
pub mod tables;

pub use tables::{RaceDefinition, TrackDefinition};
