//! The rolling stable and mint orchestration.
//!
//! [`StableState`] is the whole in-memory state: the newest-first history
//! and the last minted identity. [`mint_horse`] is the single mutation.

pub mod registry;

use crate::horse::{Horse, ProfileBuilder};
use crate::naming::{Identity, NameComposer};
use crate::random::RandomSource;

pub use registry::Registry;

/// Default number of horses kept in the stable.
pub const INVENTORY_LIMIT: usize = 6;

/// Newest-first rolling history plus the last minted identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StableState {
    horses: Vec<Horse>,
    last_mint: Option<Identity>,
    capacity: usize,
}

impl StableState {
    /// A capacity below one is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            horses: Vec::with_capacity(capacity + 1),
            last_mint: None,
            capacity,
        }
    }

    /// Rebuild from stored horses (already newest first), truncated to
    /// `capacity`.
    pub fn restore(mut horses: Vec<Horse>, last_mint: Option<Identity>, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        horses.truncate(capacity);
        Self { horses, last_mint, capacity }
    }

    pub fn horses(&self) -> &[Horse] {
        &self.horses
    }

    pub fn newest(&self) -> Option<&Horse> {
        self.horses.first()
    }

    pub fn get(&self, index: usize) -> Option<&Horse> {
        self.horses.get(index)
    }

    pub fn len(&self) -> usize {
        self.horses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.horses.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn last_mint(&self) -> Option<&Identity> {
        self.last_mint.as_ref()
    }

    /// Insert at the front, evicting the oldest horse beyond capacity.
    /// Returns the evicted horse, if any.
    pub fn push_front(&mut self, horse: Horse) -> Option<Horse> {
        self.horses.insert(0, horse);
        if self.horses.len() > self.capacity {
            self.horses.pop()
        } else {
            None
        }
    }
}

impl Default for StableState {
    fn default() -> Self {
        Self::new(INVENTORY_LIMIT)
    }
}

/// Mint one horse into `state` and return it.
///
/// The name avoids the previous mint's label even if that horse has since
/// been evicted; the profile reads the current stable for rivalries.
pub fn mint_horse<'a>(
    state: &'a mut StableState,
    composer: &NameComposer,
    builder: &ProfileBuilder,
    rng: &mut impl RandomSource,
) -> &'a Horse {
    let previous = state.last_mint.as_ref().map(|i| i.label.as_str()).unwrap_or("");
    let horse = Horse::compose(composer, builder, &state.horses, previous, rng);

    tracing::debug!("Minted {} ({})", horse.identity.label, horse.id);

    state.last_mint = Some(horse.identity.clone());
    if let Some(evicted) = state.push_front(horse) {
        tracing::debug!("Evicted {} from the stable", evicted.identity.label);
    }
    &state.horses[0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ChaChaSource;

    fn mint_n(state: &mut StableState, n: usize, rng: &mut ChaChaSource) -> Vec<Horse> {
        let composer = NameComposer::builtin();
        let builder = ProfileBuilder::default();
        (0..n).map(|_| mint_horse(state, &composer, &builder, rng).clone()).collect()
    }

    #[test]
    fn test_history_size_and_order() {
        for n in 0..12 {
            let mut rng = ChaChaSource::from_seed(n as u64);
            let mut state = StableState::default();
            let minted = mint_n(&mut state, n, &mut rng);
            assert_eq!(state.len(), n.min(INVENTORY_LIMIT));
            if let Some(last) = minted.last() {
                assert_eq!(state.newest(), Some(last));
            }
            // Newest first: the stable is the tail of the mint order, reversed.
            let expected: Vec<&Horse> = minted.iter().rev().take(INVENTORY_LIMIT).collect();
            let actual: Vec<&Horse> = state.horses().iter().collect();
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn test_consecutive_labels_differ() {
        let mut rng = ChaChaSource::from_seed(55);
        let mut state = StableState::default();
        let minted = mint_n(&mut state, 40, &mut rng);
        for pair in minted.windows(2) {
            assert_ne!(pair[0].identity.label, pair[1].identity.label);
        }
        assert_eq!(state.last_mint(), Some(&minted[39].identity));
    }

    #[test]
    fn test_last_mint_avoided_with_empty_history() {
        let composer = NameComposer::new(&["Atlas Runner"], &[] as &[&str], &["Open Field", "Red Rover"]).unwrap();
        let builder = ProfileBuilder::default();
        let previous = composer.fallback();
        assert_eq!(previous.label, "Atlas Field");

        for seed in 0..20 {
            let mut rng = ChaChaSource::from_seed(seed);
            let mut state = StableState::restore(Vec::new(), Some(previous.clone()), INVENTORY_LIMIT);
            assert!(state.is_empty());
            let horse = mint_horse(&mut state, &composer, &builder, &mut rng);
            assert_ne!(horse.identity.label, previous.label);
        }
    }

    #[test]
    fn test_zero_capacity_keeps_newest() {
        let mut rng = ChaChaSource::from_seed(2);
        let mut state = StableState::new(0);
        let minted = mint_n(&mut state, 3, &mut rng);
        assert_eq!(state.len(), 1);
        assert_eq!(state.newest(), minted.last());
    }

    #[test]
    fn test_rivals_drawn_from_current_stable() {
        let mut rng = ChaChaSource::from_seed(23);
        let mut state = StableState::default();
        let minted = mint_n(&mut state, 8, &mut rng);
        assert!(minted[0].stats.statuses.contains("Rivalry Pending"));
        for (i, horse) in minted.iter().enumerate().skip(1) {
            let herd_labels: Vec<String> = minted[..i]
                .iter()
                .rev()
                .take(INVENTORY_LIMIT)
                .map(|h| format!("Rivals {}", h.identity.label))
                .collect();
            assert!(
                horse.stats.statuses.iter().any(|s| herd_labels.iter().any(|l| l == s)),
                "{:?} has no rival from {:?}", horse.stats.statuses, herd_labels
            );
        }
    }

    #[test]
    fn test_restore_truncates() {
        let mut rng = ChaChaSource::from_seed(1);
        let mut state = StableState::new(10);
        let minted = mint_n(&mut state, 9, &mut rng);
        let restored = StableState::restore(state.horses().to_vec(), None, INVENTORY_LIMIT);
        assert_eq!(restored.len(), INVENTORY_LIMIT);
        assert_eq!(restored.newest(), minted.last());
    }
}
