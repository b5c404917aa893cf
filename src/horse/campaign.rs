//! Race and track assignment.

use serde::{Deserialize, Serialize};

use crate::data::tables::{race_program, track_directory};
use crate::data::{RaceDefinition, TrackDefinition};
use crate::error::CatalogError;
use crate::random::{pick, RandomSource};

/// A track with the going drawn for this campaign.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignedTrack {
    #[serde(flatten)]
    pub definition: TrackDefinition,
    pub going: String,
}

impl AssignedTrack {
    pub fn surface(&self) -> &str {
        &self.definition.surface
    }
}

/// The race, track and going bundled into a profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    pub race: RaceDefinition,
    pub track: AssignedTrack,
}

/// The race program and track directory campaigns are drawn from.
#[derive(Clone, Debug)]
pub struct Catalog {
    races: Vec<RaceDefinition>,
    tracks: Vec<TrackDefinition>,
}

impl Catalog {
    /// Build a catalog, rejecting empty tables and tracks without goings.
    pub fn new(races: Vec<RaceDefinition>, tracks: Vec<TrackDefinition>) -> Result<Self, CatalogError> {
        if races.is_empty() {
            return Err(CatalogError::NoRaces);
        }
        if tracks.is_empty() {
            return Err(CatalogError::NoTracks);
        }
        if let Some(track) = tracks.iter().find(|t| t.goings.is_empty()) {
            return Err(CatalogError::NoGoings(track.name.clone()));
        }
        Ok(Self { races, tracks })
    }

    pub fn builtin() -> Self {
        Self {
            races: race_program(),
            tracks: track_directory(),
        }
    }

    pub fn races(&self) -> &[RaceDefinition] {
        &self.races
    }

    pub fn tracks(&self) -> &[TrackDefinition] {
        &self.tracks
    }

    /// Draw a race, then a track on the same surface (any track when none
    /// match), then one of that track's goings.
    pub fn assign(&self, rng: &mut impl RandomSource) -> Campaign {
        let race = pick(rng, &self.races).clone();
        let track = self.pick_track(&race.surface, rng);
        Campaign { race, track }
    }

    /// Draw a track on `surface`, falling back to the whole directory.
    pub fn pick_track(&self, surface: &str, rng: &mut impl RandomSource) -> AssignedTrack {
        let matching: Vec<&TrackDefinition> = self.tracks.iter().filter(|t| t.surface == surface).collect();
        let definition = if matching.is_empty() {
            tracing::debug!("No track on surface {:?}, drawing from full directory", surface);
            pick(rng, &self.tracks).clone()
        } else {
            (*pick(rng, &matching)).clone()
        };
        let going = pick(rng, &definition.goings).clone();
        AssignedTrack { definition, going }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
