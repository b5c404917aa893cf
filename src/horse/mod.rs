//! Horse entities: identity, profile, campaign and status flags.

pub mod campaign;
mod lenient;
pub mod profile;
pub mod schema;
pub mod status;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::naming::{Identity, NameComposer};
use crate::random::RandomSource;

pub use campaign::{AssignedTrack, Campaign, Catalog};
pub use profile::{BodyPartStats, Profile, ProfileBuilder};
pub use schema::ensure_schema;
pub use status::{StatusFlags, STATUS_CAP};

/// Opaque horse identifier. New horses get UUID v4 text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HorseId(String);

impl HorseId {
    /// UUID v4 built from the random source.
    pub fn generate(rng: &mut impl RandomSource) -> Self {
        let uuid = uuid::Builder::from_random_bytes(rng.bytes16()).into_uuid();
        Self(uuid.to_string())
    }

    /// `horse-<unix millis>-<0..=99999>`, for records stored without an id.
    pub fn timestamped(rng: &mut impl RandomSource) -> Self {
        let millis = chrono::Utc::now().timestamp_millis();
        Self(format!("horse-{}-{}", millis, rng.int_inclusive(0, 99_999)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for HorseId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for HorseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A minted horse.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Horse {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: HorseId,
    pub identity: Identity,
    pub stats: Profile,
}

impl Horse {
    /// Mint a horse: id, then name (avoiding `previous_label`), then stats
    /// read against `herd`.
    pub fn compose(
        composer: &NameComposer,
        builder: &ProfileBuilder,
        herd: &[Horse],
        previous_label: &str,
        rng: &mut impl RandomSource,
    ) -> Self {
        let id = HorseId::generate(rng);
        let identity = composer.compose(previous_label, rng);
        let stats = builder.build(herd, rng);
        let mut horse = Self { id, identity, stats };
        ensure_schema(&mut horse, builder.catalog(), rng);
        horse
    }

    pub fn label(&self) -> &str {
        &self.identity.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ChaChaSource;

    #[test]
    fn test_generated_ids_are_uuid_v4() {
        let mut rng = ChaChaSource::from_seed(1);
        let id = HorseId::generate(&mut rng);
        let parsed = uuid::Uuid::parse_str(id.as_str()).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_ne!(id, HorseId::generate(&mut rng));
    }

    #[test]
    fn test_seeded_compose_is_reproducible() {
        let composer = NameComposer::builtin();
        let builder = ProfileBuilder::default();
        let a = Horse::compose(&composer, &builder, &[], "", &mut ChaChaSource::from_seed(31));
        let b = Horse::compose(&composer, &builder, &[], "", &mut ChaChaSource::from_seed(31));
        assert_eq!(a, b);
    }

    #[test]
    fn test_horse_json_shape() {
        let mut rng = ChaChaSource::from_seed(8);
        let horse = Horse::compose(&NameComposer::builtin(), &ProfileBuilder::default(), &[], "", &mut rng);
        let json = serde_json::to_value(&horse).unwrap();
        assert!(json["id"].is_string());
        assert!(json["identity"]["label"].is_string());
        assert!(json["stats"]["bodyMap"].is_array());
        assert!(json["stats"]["totalPurse"].is_u64());
        assert!(json["stats"]["preferredGoing"].is_string());
        assert_eq!(json["stats"]["statuses"].as_array().unwrap().len(), horse.stats.statuses.len());
    }
}
