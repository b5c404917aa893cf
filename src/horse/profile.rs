//! Horse statistical profiles.
//!
//! A profile carries the body map, scalar attributes, the campaign
//! assignment and status flags. Fields added after the first release are
//! optional on disk and filled in by [`super::schema::ensure_schema`].

use serde::{Deserialize, Serialize};

use super::campaign::{Campaign, Catalog};
use super::lenient;
use super::status::StatusFlags;
use super::Horse;
use crate::data::tables::{BodySlot, BODY_SLOTS, COAT_COLORS, TEMPERAMENTS};
use crate::random::{pick, RandomSource};

/// Inclusive percentage ranges for each body metric.
pub const CONFORMATION_RANGE: (u32, u32) = (62, 98);
pub const STRENGTH_RANGE: (u32, u32) = (55, 100);
pub const STAMINA_RANGE: (u32, u32) = (50, 100);

/// Measurement ranges `(min, max, unit)`, drawn to one decimal place.
pub const STRIDE_LENGTH: (f64, f64, &str) = (22.0, 28.0, "ft");
pub const WIDTH: (f64, f64, &str) = (25.0, 33.0, "in");
pub const HEIGHT: (f64, f64, &str) = (15.0, 17.2, "hh");

/// Age range in years.
pub const AGE_RANGE: (u32, u32) = (2, 12);

/// Metrics for one anatomical slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyPartStats {
    #[serde(default, deserialize_with = "lenient::text")]
    pub key: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub label: String,
    #[serde(default, deserialize_with = "lenient::whole")]
    pub conformation: u32,
    #[serde(default, deserialize_with = "lenient::whole")]
    pub strength: u32,
    #[serde(default, deserialize_with = "lenient::whole")]
    pub stamina: u32,
}

impl BodyPartStats {
    fn generate(slot: &BodySlot, rng: &mut impl RandomSource) -> Self {
        Self {
            key: slot.key.to_string(),
            label: slot.label.to_string(),
            conformation: rng.int_inclusive(CONFORMATION_RANGE.0, CONFORMATION_RANGE.1),
            strength: rng.int_inclusive(STRENGTH_RANGE.0, STRENGTH_RANGE.1),
            stamina: rng.int_inclusive(STAMINA_RANGE.0, STAMINA_RANGE.1),
        }
    }
}

/// A horse's stats.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(deserialize_with = "lenient::items")]
    pub body_map: Vec<BodyPartStats>,
    pub temperament: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub stride_length: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub width: String,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub height: Option<String>,
    #[serde(default, deserialize_with = "lenient::whole")]
    pub age: u32,
    #[serde(default, deserialize_with = "lenient::purse")]
    pub total_purse: Option<u64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub coat_color: String,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub preferred_track: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub preferred_going: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional")]
    pub campaign: Option<Campaign>,
    #[serde(default, deserialize_with = "lenient::flags")]
    pub statuses: StatusFlags,
}

impl Profile {
    pub fn height(&self) -> Option<&str> {
        self.height.as_deref()
    }

    pub fn total_purse(&self) -> u64 {
        self.total_purse.unwrap_or(0)
    }

    pub fn preferred_track(&self) -> Option<&str> {
        self.preferred_track.as_deref()
    }

    pub fn preferred_going(&self) -> Option<&str> {
        self.preferred_going.as_deref()
    }
}

/// Builds fresh profiles against a race/track catalog.
#[derive(Clone, Debug, Default)]
pub struct ProfileBuilder {
    catalog: Catalog,
}

impl ProfileBuilder {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Build a complete profile. `herd` is only read, to name a rival.
    pub fn build(&self, herd: &[Horse], rng: &mut impl RandomSource) -> Profile {
        let campaign = self.catalog.assign(rng);
        let body_map = BODY_SLOTS.iter().map(|slot| BodyPartStats::generate(slot, rng)).collect();
        let temperament = pick(rng, TEMPERAMENTS).to_string();
        let stride_length = measurement(STRIDE_LENGTH, rng);
        let width = measurement(WIDTH, rng);
        let height = measurement(HEIGHT, rng);
        let age = rng.int_inclusive(AGE_RANGE.0, AGE_RANGE.1);
        let coat_color = pick(rng, COAT_COLORS).to_string();
        let statuses = StatusFlags::generate(herd, rng);

        Profile {
            body_map,
            temperament,
            stride_length,
            width,
            height: Some(height),
            age,
            total_purse: Some(0),
            coat_color,
            preferred_track: Some(campaign.track.surface().to_string()),
            preferred_going: Some(campaign.track.going.clone()),
            campaign: Some(campaign),
            statuses,
        }
    }
}

/// Draw a measurement and render it with its unit, e.g. `"24.6 ft"`.
/// Whole values print without a decimal (`"25 ft"`).
pub fn measurement(range: (f64, f64, &str), rng: &mut impl RandomSource) -> String {
    let (min, max, unit) = range;
    format!("{} {}", rng.tenths(min, max), unit)
}
