//! The persisted stable document.
//!
//! One JSON document per storage key:
//! `{ "version": 1, "stable": [Horse...], "lastMint": Identity | null }`.
//! Documents written before the version field existed read as version 1.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use super::store::StateStore;
use super::validate::{validate_horse, validate_identity};
use crate::horse::{ensure_schema, Catalog, Horse};
use crate::naming::Identity;
use crate::random::RandomSource;
use crate::stable::StableState;

/// Format version for forward compatibility.
pub const SNAPSHOT_VERSION: u64 = 1;

/// Default storage key.
pub const STORAGE_KEY: &str = "super-honse-state";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotOut<'a> {
    version: u64,
    stable: &'a [Horse],
    last_mint: Option<&'a Identity>,
}

/// Why a stored document was discarded as a whole.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("document is not an object")]
    NotAnObject,

    #[error("snapshot version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u64, supported: u64 },
}

/// Serialize the stable to its document form.
pub fn encode_snapshot(state: &StableState) -> Result<String, serde_json::Error> {
    serde_json::to_string(&SnapshotOut {
        version: SNAPSHOT_VERSION,
        stable: state.horses(),
        last_mint: state.last_mint(),
    })
}

/// Outcome of decoding a document.
#[derive(Debug)]
pub struct Decoded {
    /// The restored stable, `None` when no record survived validation.
    pub state: Option<StableState>,
    /// Records dropped by validation.
    pub rejected: usize,
}

/// Decode a stored document.
///
/// Records failing validation are dropped; survivors are truncated to
/// `capacity` and back-filled. A missing or invalid `lastMint` falls back to
/// the newest survivor's identity.
pub fn decode_snapshot(
    text: &str,
    capacity: usize,
    catalog: &Catalog,
    rng: &mut impl RandomSource,
) -> Result<Decoded, SnapshotError> {
    let document: Value = serde_json::from_str(text)?;
    let object = document.as_object().ok_or(SnapshotError::NotAnObject)?;

    let version = object.get("version").and_then(Value::as_u64).unwrap_or(1);
    if version > SNAPSHOT_VERSION {
        return Err(SnapshotError::UnsupportedVersion {
            found: version,
            supported: SNAPSHOT_VERSION,
        });
    }

    let records: &[Value] = object
        .get("stable")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[]);

    let mut rejected = 0;
    let mut horses: Vec<Horse> = Vec::new();
    for (index, record) in records.iter().enumerate() {
        match validate_horse(record) {
            Ok(horse) => horses.push(horse),
            Err(reason) => {
                rejected += 1;
                tracing::warn!("Dropping stored horse #{}: {}", index, reason);
            }
        }
    }

    horses.truncate(capacity);
    for horse in horses.iter_mut() {
        ensure_schema(horse, catalog, rng);
    }

    if horses.is_empty() {
        return Ok(Decoded { state: None, rejected });
    }

    let last_mint = object
        .get("lastMint")
        .and_then(|v| validate_identity(v).ok())
        .unwrap_or_else(|| horses[0].identity.clone());

    Ok(Decoded {
        state: Some(StableState::restore(horses, Some(last_mint), capacity)),
        rejected,
    })
}

/// Load the stable from `store`, or `None` when there is nothing usable.
///
/// Never fails: an unavailable store, a missing key, an unreadable or
/// malformed document all mean "no prior state". Problems with the document
/// itself are logged as warnings.
pub fn hydrate<S: StateStore + ?Sized>(
    store: &S,
    key: &str,
    capacity: usize,
    catalog: &Catalog,
    rng: &mut impl RandomSource,
) -> Option<StableState> {
    if !store.is_available() {
        tracing::debug!("State store unavailable, starting in memory");
        return None;
    }

    let text = match store.read(key) {
        Ok(Some(text)) => text,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!("Failed to read stored stable: {}", e);
            return None;
        }
    };

    match decode_snapshot(&text, capacity, catalog, rng) {
        Ok(Decoded { state: Some(state), rejected }) => {
            tracing::info!("Restored {} horses ({} rejected)", state.len(), rejected);
            Some(state)
        }
        Ok(Decoded { state: None, rejected }) => {
            if rejected > 0 {
                tracing::warn!("Stored stable had no valid horses ({} rejected)", rejected);
            }
            None
        }
        Err(e) => {
            tracing::warn!("Failed to hydrate stored stable: {}", e);
            None
        }
    }
}

/// Overwrite the stored document with `state`. Returns whether anything was
/// written; failures are logged and the in-memory state stands.
pub fn persist<S: StateStore + ?Sized>(store: &mut S, key: &str, state: &StableState) -> bool {
    if !store.is_available() {
        return false;
    }

    let text = match encode_snapshot(state) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("Failed to encode stable: {}", e);
            return false;
        }
    };

    match store.write(key, &text) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Failed to persist stable: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::horse::ProfileBuilder;
    use crate::naming::NameComposer;
    use crate::persistence::store::{DisabledStore, MemoryStore};
    use crate::random::ChaChaSource;
    use crate::stable::{mint_horse, INVENTORY_LIMIT};
    use serde_json::json;

    fn minted_state(n: usize, seed: u64) -> StableState {
        let mut rng = ChaChaSource::from_seed(seed);
        let mut state = StableState::default();
        let composer = NameComposer::builtin();
        let builder = ProfileBuilder::default();
        for _ in 0..n {
            mint_horse(&mut state, &composer, &builder, &mut rng);
        }
        state
    }

    #[test]
    fn test_round_trip_preserves_stable() {
        let state = minted_state(8, 42);
        let text = encode_snapshot(&state).unwrap();
        let mut rng = ChaChaSource::from_seed(0);
        let decoded = decode_snapshot(&text, INVENTORY_LIMIT, &Catalog::builtin(), &mut rng).unwrap();
        assert_eq!(decoded.rejected, 0);
        assert_eq!(decoded.state.unwrap(), state);
    }

    #[test]
    fn test_invalid_entry_dropped_then_truncated() {
        let state = minted_state(6, 7);
        let mut document: Value = serde_json::from_str(&encode_snapshot(&state).unwrap()).unwrap();
        let stable = document["stable"].as_array_mut().unwrap();
        stable.insert(2, json!({ "identity": { "first": "Broken" }, "stats": {} }));
        stable.push(serde_json::to_value(&state.horses()[0]).unwrap());
        assert_eq!(stable.len(), 8);

        let mut rng = ChaChaSource::from_seed(0);
        let decoded = decode_snapshot(&document.to_string(), INVENTORY_LIMIT, &Catalog::builtin(), &mut rng).unwrap();
        assert_eq!(decoded.rejected, 1);
        let restored = decoded.state.unwrap();
        assert_eq!(restored.len(), INVENTORY_LIMIT);
        assert_eq!(restored.horses(), state.horses());
    }

    #[test]
    fn test_legacy_document_backfilled() {
        let document = json!({
            "stable": [{
                "id": "legacy",
                "identity": { "first": "Rusty", "middle": "", "last": "Rover", "label": "Rusty Rover" },
                "stats": { "bodyMap": [], "temperament": "Stoic", "strideLength": "24 ft", "width": "30 in",
                           "age": 3, "coatColor": "Bay", "statuses": [] }
            }]
        });
        let mut rng = ChaChaSource::from_seed(1);
        let decoded = decode_snapshot(&document.to_string(), INVENTORY_LIMIT, &Catalog::builtin(), &mut rng).unwrap();
        let state = decoded.state.unwrap();
        let horse = state.newest().unwrap();
        assert!(horse.stats.campaign.is_some());
        assert!(horse.stats.height().is_some());
        assert_eq!(horse.stats.total_purse, Some(0));
        // No lastMint stored: fall back to the newest horse.
        assert_eq!(state.last_mint().map(|i| i.label.as_str()), Some("Rusty Rover"));
    }

    #[test]
    fn test_null_id_and_float_age_kept() {
        let document = json!({
            "stable": [{
                "id": null,
                "identity": { "first": "Rusty", "middle": "", "last": "Rover", "label": "Rusty Rover" },
                "stats": { "bodyMap": [], "temperament": "Stoic", "age": 5.0, "coatColor": null }
            }]
        });
        let mut rng = ChaChaSource::from_seed(2);
        let decoded = decode_snapshot(&document.to_string(), INVENTORY_LIMIT, &Catalog::builtin(), &mut rng).unwrap();
        assert_eq!(decoded.rejected, 0);
        let state = decoded.state.unwrap();
        let horse = state.newest().unwrap();
        assert!(horse.id.as_str().starts_with("horse-"));
        assert_eq!(horse.stats.age, 5);
    }

    #[test]
    fn test_whole_document_failures() {
        let catalog = Catalog::builtin();
        let mut rng = ChaChaSource::from_seed(1);
        assert!(matches!(
            decode_snapshot("{not json", 6, &catalog, &mut rng),
            Err(SnapshotError::Parse(_))
        ));
        assert!(matches!(decode_snapshot("[]", 6, &catalog, &mut rng), Err(SnapshotError::NotAnObject)));
        assert!(matches!(
            decode_snapshot(r#"{"version": 9, "stable": []}"#, 6, &catalog, &mut rng),
            Err(SnapshotError::UnsupportedVersion { found: 9, .. })
        ));

        let empty = decode_snapshot(r#"{"stable": "nope"}"#, 6, &catalog, &mut rng).unwrap();
        assert!(empty.state.is_none());
    }

    #[test]
    fn test_hydrate_and_persist_through_stores() {
        let catalog = Catalog::builtin();
        let mut rng = ChaChaSource::from_seed(3);
        let state = minted_state(3, 9);

        let mut store = MemoryStore::new();
        assert!(hydrate(&store, STORAGE_KEY, 6, &catalog, &mut rng).is_none());
        assert!(persist(&mut store, STORAGE_KEY, &state));
        assert_eq!(hydrate(&store, STORAGE_KEY, 6, &catalog, &mut rng), Some(state.clone()));

        let corrupt = MemoryStore::new().with_entry(STORAGE_KEY, "][");
        assert!(hydrate(&corrupt, STORAGE_KEY, 6, &catalog, &mut rng).is_none());

        let mut disabled = DisabledStore;
        assert!(!persist(&mut disabled, STORAGE_KEY, &state));
        assert!(hydrate(&disabled, STORAGE_KEY, 6, &catalog, &mut rng).is_none());
    }
}
