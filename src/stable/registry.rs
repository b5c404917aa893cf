//! A stable bound to a state store.
//!
//! Hydrates on open, persists after every mint, and remembers which horse
//! is currently shown.

use super::{mint_horse, StableState};
use crate::config::RegistryConfig;
use crate::error::ConfigError;
use crate::horse::{Horse, ProfileBuilder};
use crate::naming::NameComposer;
use crate::persistence::{hydrate, persist, StateStore};
use crate::random::RandomSource;

pub struct Registry<S: StateStore> {
    state: StableState,
    composer: NameComposer,
    builder: ProfileBuilder,
    store: S,
    storage_key: String,
    active: usize,
    hydrated: bool,
}

impl<S: StateStore> Registry<S> {
    /// Open a registry over `store`, restoring any stored stable. The config
    /// is validated first.
    pub fn open(config: &RegistryConfig, store: S, rng: &mut impl RandomSource) -> Result<Self, ConfigError> {
        let composer = NameComposer::builtin().with_max_length(config.max_name_length);
        Self::with_parts(config, store, composer, ProfileBuilder::default(), rng)
    }

    /// Open with a custom composer and profile builder.
    pub fn with_parts(
        config: &RegistryConfig,
        store: S,
        composer: NameComposer,
        builder: ProfileBuilder,
        rng: &mut impl RandomSource,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let restored = hydrate(&store, &config.storage_key, config.inventory_limit, builder.catalog(), rng);
        let hydrated = restored.is_some();
        let state = restored.unwrap_or_else(|| StableState::new(config.inventory_limit));

        Ok(Self {
            state,
            composer,
            builder,
            store,
            storage_key: config.storage_key.clone(),
            active: 0,
            hydrated,
        })
    }

    /// Whether the stable came from the store.
    pub fn hydrated(&self) -> bool {
        self.hydrated
    }

    pub fn state(&self) -> &StableState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mint a horse, make it active and persist the stable.
    pub fn mint(&mut self, rng: &mut impl RandomSource) -> &Horse {
        mint_horse(&mut self.state, &self.composer, &self.builder, rng);
        self.active = 0;
        persist(&mut self.store, &self.storage_key, &self.state);
        &self.state.horses()[0]
    }

    /// Mint one horse if the stable is empty. Returns whether it minted.
    pub fn ensure_seeded(&mut self, rng: &mut impl RandomSource) -> bool {
        if !self.state.is_empty() {
            return false;
        }
        tracing::debug!("Stable is empty, minting a first horse");
        self.mint(rng);
        true
    }

    /// The horse shown in the detail view.
    pub fn active(&self) -> Option<&Horse> {
        self.state.get(self.active)
    }

    /// Show the horse at `index`. Out-of-range indices leave the selection
    /// unchanged and return `None`.
    pub fn select(&mut self, index: usize) -> Option<&Horse> {
        if index >= self.state.len() {
            return None;
        }
        self.active = index;
        self.state.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{DisabledStore, FileStore, MemoryStore};
    use crate::random::ChaChaSource;
    use tempfile::TempDir;

    #[test]
    fn test_mints_persist_and_rehydrate() {
        let temp = TempDir::new().unwrap();
        let config = RegistryConfig {
            state_dir: Some(temp.path().to_path_buf()),
            ..Default::default()
        };
        let mut rng = ChaChaSource::from_seed(5);

        let mut registry = Registry::open(&config, FileStore::new(temp.path()), &mut rng).unwrap();
        assert!(!registry.hydrated());
        for _ in 0..9 {
            registry.mint(&mut rng);
        }
        let expected = registry.state().clone();
        assert_eq!(expected.len(), 6);

        let reopened = Registry::open(&config, FileStore::new(temp.path()), &mut rng).unwrap();
        assert!(reopened.hydrated());
        assert_eq!(reopened.state(), &expected);
        assert_eq!(reopened.active(), expected.newest());
    }

    #[test]
    fn test_memory_only_when_store_disabled() {
        let mut rng = ChaChaSource::from_seed(6);
        let mut registry = Registry::open(&RegistryConfig::default(), DisabledStore, &mut rng).unwrap();
        assert!(registry.ensure_seeded(&mut rng));
        assert!(!registry.ensure_seeded(&mut rng));
        registry.mint(&mut rng);
        assert_eq!(registry.state().len(), 2);
    }

    #[test]
    fn test_selection() {
        let mut rng = ChaChaSource::from_seed(7);
        let mut registry = Registry::open(&RegistryConfig::default(), MemoryStore::new(), &mut rng).unwrap();
        assert!(registry.active().is_none());
        for _ in 0..3 {
            registry.mint(&mut rng);
        }
        let third = registry.state().get(2).cloned();
        assert_eq!(registry.select(2).cloned(), third);
        assert_eq!(registry.active().cloned(), third);
        assert!(registry.select(3).is_none());
        assert_eq!(registry.active().cloned(), third);

        let newest = registry.mint(&mut rng).clone();
        assert_eq!(registry.active(), Some(&newest));
    }

    #[test]
    fn test_corrupt_store_starts_fresh() {
        let mut rng = ChaChaSource::from_seed(8);
        let store = MemoryStore::new().with_entry("super-honse-state", "{\"stable\": [1, 2, 3]}");
        let mut registry = Registry::open(&RegistryConfig::default(), store, &mut rng).unwrap();
        assert!(!registry.hydrated());
        assert!(registry.state().is_empty());
        registry.mint(&mut rng);
        assert_eq!(registry.state().len(), 1);
    }

    #[test]
    fn test_custom_limits_apply() {
        let config = RegistryConfig {
            max_name_length: 12,
            inventory_limit: 2,
            ..Default::default()
        };
        let mut rng = ChaChaSource::from_seed(9);
        let mut registry = Registry::open(&config, MemoryStore::new(), &mut rng).unwrap();
        for _ in 0..5 {
            let label = registry.mint(&mut rng).identity.label.clone();
            assert!(label.chars().count() <= 12 || label == "Atlas Field");
        }
        assert_eq!(registry.state().len(), 2);
    }

    #[test]
    fn test_invalid_config_refused() {
        let config = RegistryConfig {
            max_name_length: 0,
            ..Default::default()
        };
        let mut rng = ChaChaSource::from_seed(10);
        assert!(matches!(
            Registry::open(&config, MemoryStore::new(), &mut rng),
            Err(ConfigError::Invalid { field: "max_name_length", .. })
        ));
    }
}
