//! One-time upgrade of stored horses to the current field set.

use super::campaign::Catalog;
use super::profile::{measurement, HEIGHT};
use super::{Horse, HorseId};
use crate::data::tables::{TRACK_GOINGS, TRACK_TYPES};
use crate::random::{pick, RandomSource};

fn is_blank(field: &Option<String>) -> bool {
    field.as_deref().map_or(true, str::is_empty)
}

/// Fill any missing id, height, purse, campaign and preferred track/going in
/// place. Present fields are never touched, so a second call changes nothing
/// and fresh horses pass through untouched.
pub fn ensure_schema<'a>(horse: &'a mut Horse, catalog: &Catalog, rng: &mut impl RandomSource) -> &'a mut Horse {
    if horse.id.is_empty() {
        horse.id = HorseId::timestamped(rng);
    }

    let stats = &mut horse.stats;

    if is_blank(&stats.height) {
        stats.height = Some(measurement(HEIGHT, rng));
    }
    if stats.total_purse.is_none() {
        stats.total_purse = Some(0);
    }
    if stats.campaign.is_none() {
        stats.campaign = Some(catalog.assign(rng));
    }
    if is_blank(&stats.preferred_track) {
        stats.preferred_track = Some(match &stats.campaign {
            Some(campaign) => campaign.track.surface().to_string(),
            None => pick(rng, TRACK_TYPES).to_string(),
        });
    }
    if is_blank(&stats.preferred_going) {
        stats.preferred_going = Some(match &stats.campaign {
            Some(campaign) => campaign.track.going.clone(),
            None => pick(rng, TRACK_GOINGS).to_string(),
        });
    }

    horse
}
