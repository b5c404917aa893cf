//! Display name composition.
//!
//! Names are built from weighted structural templates over the first, middle
//! and last word banks, then rejection-sampled against the length cap and
//! the previous mint's label.

use serde::{Deserialize, Serialize};

use super::tokens::{collapse_whitespace, leading_word, trailing_word};
use crate::data::names::{FIRST_NAMES, LAST_NAMES, MIDDLE_NAMES};
use crate::error::ComposerError;
use crate::random::{pick, pick_weighted, RandomSource, Weighted};

/// Maximum label length, in characters.
pub const MAX_NAME_LENGTH: usize = 18;

/// Candidates drawn before falling back to the fixed name.
pub const NAME_ATTEMPTS: usize = 400;

/// Connectives always present in the middle-word pool.
const CONNECTIVES: &[&str] = &["Over", "of", "from", "Under", "by", "upon"];

/// Longest middle-bank word admitted to the connective pool.
const MAX_MIDDLE_WORD: usize = 7;

/// A horse's name parts and display label.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    pub first: String,
    pub middle: String,
    pub last: String,
    pub label: String,
}

/// Structural name templates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameTemplate {
    /// "Starlight Mane"
    DoubleSpaced,
    /// "Starlightmane"
    DoubleFused,
    /// "Starlight of Mane"
    Triple,
}

impl NameTemplate {
    const WEIGHTED: [Weighted<NameTemplate>; 3] = [
        Weighted { value: NameTemplate::DoubleSpaced, weight: 0.4 },
        Weighted { value: NameTemplate::DoubleFused, weight: 0.4 },
        Weighted { value: NameTemplate::Triple, weight: 0.2 },
    ];

    pub fn choose(rng: &mut impl RandomSource) -> Self {
        pick_weighted(rng, &Self::WEIGHTED)
    }
}

/// Composes identities from word banks.
#[derive(Clone, Debug)]
pub struct NameComposer {
    first_names: Vec<String>,
    last_names: Vec<String>,
    middle_pool: Vec<String>,
    max_length: usize,
}

impl NameComposer {
    /// Build a composer over custom word banks.
    ///
    /// The first and last banks must be non-empty. The middle bank may be
    /// empty, in which case only the fixed connectives are used.
    pub fn new<S: AsRef<str>>(
        first_names: &[S],
        middle_names: &[S],
        last_names: &[S],
    ) -> Result<Self, ComposerError> {
        if first_names.is_empty() {
            return Err(ComposerError::EmptyList("first"));
        }
        if last_names.is_empty() {
            return Err(ComposerError::EmptyList("last"));
        }

        Ok(Self {
            first_names: first_names.iter().map(|s| s.as_ref().to_string()).collect(),
            last_names: last_names.iter().map(|s| s.as_ref().to_string()).collect(),
            middle_pool: middle_word_pool(middle_names),
            max_length: MAX_NAME_LENGTH,
        })
    }

    /// Composer over the built-in word banks.
    pub fn builtin() -> Self {
        Self {
            first_names: FIRST_NAMES.iter().map(|s| s.to_string()).collect(),
            last_names: LAST_NAMES.iter().map(|s| s.to_string()).collect(),
            middle_pool: middle_word_pool(MIDDLE_NAMES),
            max_length: MAX_NAME_LENGTH,
        }
    }

    /// Override the label length cap.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn middle_pool(&self) -> &[String] {
        &self.middle_pool
    }

    /// Compose an identity whose label fits the cap and differs from
    /// `previous_label`, falling back to the fixed name after
    /// [`NAME_ATTEMPTS`] rejected candidates.
    pub fn compose(&self, previous_label: &str, rng: &mut impl RandomSource) -> Identity {
        for _ in 0..NAME_ATTEMPTS {
            let candidate = self.candidate(rng);
            if candidate.label.chars().count() <= self.max_length && candidate.label != previous_label {
                return candidate;
            }
        }

        tracing::debug!(
            "Name composition exhausted {} attempts (previous: {:?}), using fallback",
            NAME_ATTEMPTS,
            previous_label
        );
        self.fallback()
    }

    /// Draw one unchecked candidate.
    pub fn candidate(&self, rng: &mut impl RandomSource) -> Identity {
        let template = NameTemplate::choose(rng);
        self.candidate_with(template, rng)
    }

    /// Draw one unchecked candidate for a given template.
    pub fn candidate_with(&self, template: NameTemplate, rng: &mut impl RandomSource) -> Identity {
        let first_source = pick(rng, &self.first_names);
        let first = leading_word(first_source);
        let last_source = pick(rng, &self.last_names);
        let last = trailing_word(last_source);

        match template {
            NameTemplate::Triple => {
                let middle = pick(rng, &self.middle_pool).clone();
                let label = collapse_whitespace(&format!("{} {} {}", first, middle, last));
                Identity { first, middle, last, label }
            }
            NameTemplate::DoubleFused => {
                let fused: String = last
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .collect::<String>()
                    .to_lowercase();
                let label = format!("{}{}", first, fused);
                Identity { first, middle: String::new(), last: fused, label }
            }
            NameTemplate::DoubleSpaced => {
                let label = collapse_whitespace(&format!("{} {}", first, last));
                Identity { first, middle: String::new(), last, label }
            }
        }
    }

    /// The fixed name used when sampling gives up. Not length- or
    /// repeat-checked.
    pub fn fallback(&self) -> Identity {
        let first = leading_word(&self.first_names[0]);
        let last = trailing_word(&self.last_names[0]);
        let label = format!("{} {}", first, last).trim().to_string();
        Identity { first, middle: String::new(), last, label }
    }
}

impl Default for NameComposer {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Connectives followed by short leading words of the middle bank, in order,
/// without duplicates.
fn middle_word_pool<S: AsRef<str>>(middle_names: &[S]) -> Vec<String> {
    let mut pool: Vec<String> = Vec::new();
    let harvested = middle_names
        .iter()
        .map(|entry| leading_word(entry.as_ref()))
        .filter(|word| !word.is_empty() && word.chars().count() <= MAX_MIDDLE_WORD);

    for word in CONNECTIVES.iter().map(|s| s.to_string()).chain(harvested) {
        if !pool.contains(&word) {
            pool.push(word);
        }
    }
    pool
}
