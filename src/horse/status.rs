//! Status flags: an insertion-ordered set capped at four entries.

use serde::{Deserialize, Serialize};

use super::Horse;
use crate::data::tables::{
    COMBATIVE_FLAG, DISEASE_FLAGS, LEANING_FLAGS, NATURE_FLAGS, RIVALRY_PENDING_FLAG,
};
use crate::random::{pick, RandomSource};

/// Maximum number of status flags on a profile.
pub const STATUS_CAP: usize = 4;

/// Chance that the nature slot is the combative flag.
const COMBATIVE_CHANCE: f64 = 0.6;

/// Ordered, duplicate-free status flags.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct StatusFlags(Vec<String>);

impl StatusFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a flag unless it is already present. Returns whether it was added.
    pub fn insert(&mut self, flag: impl Into<String>) -> bool {
        let flag = flag.into();
        if self.0.contains(&flag) {
            return false;
        }
        self.0.push(flag);
        true
    }

    /// Keep only the first `cap` flags.
    pub fn truncate(&mut self, cap: usize) {
        self.0.truncate(cap);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, flag: &str) -> bool {
        self.0.iter().any(|f| f == flag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Draw a fresh flag set: nature, leaning, rivalry, health, in that order.
    pub fn generate(herd: &[Horse], rng: &mut impl RandomSource) -> Self {
        let mut flags = Self::new();

        if rng.chance(COMBATIVE_CHANCE) {
            flags.insert(COMBATIVE_FLAG);
        } else {
            flags.insert(*pick(rng, NATURE_FLAGS));
        }
        flags.insert(*pick(rng, LEANING_FLAGS));

        if herd.is_empty() {
            flags.insert(RIVALRY_PENDING_FLAG);
        } else {
            let rival = pick(rng, herd);
            flags.insert(format!("Rivals {}", rival.identity.label));
        }

        flags.insert(*pick(rng, DISEASE_FLAGS));
        flags.truncate(STATUS_CAP);
        flags
    }
}

impl From<Vec<String>> for StatusFlags {
    fn from(raw: Vec<String>) -> Self {
        let mut flags = Self::new();
        for flag in raw {
            flags.insert(flag);
        }
        flags.truncate(STATUS_CAP);
        flags
    }
}

impl From<StatusFlags> for Vec<String> {
    fn from(flags: StatusFlags) -> Self {
        flags.0
    }
}
