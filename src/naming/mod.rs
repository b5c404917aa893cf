//! Horse name generation.
//!
//! Names are drawn from fixed word banks using weighted templates, with a
//! bounded retry loop enforcing the length cap and no immediate repeats.

pub mod composer;
pub mod tokens;

pub use composer::{Identity, NameComposer, NameTemplate, MAX_NAME_LENGTH, NAME_ATTEMPTS};
