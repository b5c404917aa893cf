//! Fixed enumerations and the race/track directories.

use serde::{Deserialize, Serialize};

/// An anatomical slot in the body map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BodySlot {
    pub key: &'static str,
    pub label: &'static str,
}

pub const BODY_SLOTS: &[BodySlot] = &[
    BodySlot { key: "lfLeg", label: "Left Front Leg" },
    BodySlot { key: "rfLeg", label: "Right Front Leg" },
    BodySlot { key: "lbLeg", label: "Left Back Leg" },
    BodySlot { key: "rbLeg", label: "Right Back Leg" },
    BodySlot { key: "heart", label: "Heart" },
    BodySlot { key: "lungs", label: "Lungs" },
];

pub const TEMPERAMENTS: &[&str] = &["Stoic", "Combative", "Mercurial", "Steady", "Alert", "Playful"];

pub const COAT_COLORS: &[&str] = &[
    "Bay", "Chestnut", "Dapple Gray", "Black", "Blue Roan",
    "Palomino", "Buckskin", "Cremello", "Seal Brown", "Sooty Bay",
];

pub const TRACK_TYPES: &[&str] = &["Dirt", "Turf", "Synthetic"];

pub const TRACK_GOINGS: &[&str] = &["Fast", "Firm", "Good", "Yielding", "Soft", "Sloppy", "Heavy"];

pub const LEANING_FLAGS: &[&str] = &[
    "Leans Inside Rail",
    "Leans Outside Rail",
    "Holds Center Line",
    "Drifts Late Inside",
    "Drifts Late Outside",
];

pub const DISEASE_FLAGS: &[&str] = &[
    "Clean Bill of Health",
    "Seasonal Cough",
    "Bleeder Watch",
    "Mild Colic Watch",
    "Hoof Thrush Treatment",
    "Respiratory Quarantine",
];

pub const NATURE_FLAGS: &[&str] = &["Combatative", "Calculating", "Eager", "Relaxed", "Broody"];

/// Flag added with 60% probability ahead of any nature flag.
pub const COMBATIVE_FLAG: &str = "Combatative";

/// Rivalry flag used while the herd is empty.
pub const RIVALRY_PENDING_FLAG: &str = "Rivalry Pending";

/// A track in the directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackDefinition {
    pub name: String,
    pub surface: String,
    pub region: String,
    pub goings: Vec<String>,
}

/// A race in the program.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub race_type: String,
    pub distance: String,
    pub grade: String,
    pub surface: String,
}

fn track(name: &str, surface: &str, region: &str, goings: &[&str]) -> TrackDefinition {
    TrackDefinition {
        name: name.to_string(),
        surface: surface.to_string(),
        region: region.to_string(),
        goings: goings.iter().map(|g| g.to_string()).collect(),
    }
}

fn race(name: &str, race_type: &str, distance: &str, grade: &str, surface: &str) -> RaceDefinition {
    RaceDefinition {
        name: name.to_string(),
        race_type: race_type.to_string(),
        distance: distance.to_string(),
        grade: grade.to_string(),
        surface: surface.to_string(),
    }
}

/// The built-in track directory.
pub fn track_directory() -> Vec<TrackDefinition> {
    vec![
        track("Arcana Cross Course", "Dirt", "Obsidian Basin Territory", &["Fast", "Good", "Muddy"]),
        track("Veilwater Meadows", "Turf", "Luminous Sound Flats", &["Firm", "Good", "Yielding"]),
        track("Mirage Halo Circuit", "Synthetic", "Sunstep Plateau Range", &["Fast", "Good", "Slow"]),
        track("Starwright Downs", "Dirt", "Astral Prairie Union", &["Fast", "Sloppy", "Heavy"]),
        track("Moonfen Fields", "Turf", "Gossamer Marsh Reach", &["Firm", "Soft", "Heavy"]),
        track("Crystal Loom Track", "Synthetic", "Auric Valley Annex", &["Fast", "Good", "Slow"]),
    ]
}

/// The built-in race program.
pub fn race_program() -> Vec<RaceDefinition> {
    vec![
        race("Fool's Gambit Stakes", "Sprint", "6f", "Grade III", "Dirt"),
        race("High Priestess Dash", "Sprint", "7f", "Grade II", "Turf"),
        race("Chariot Mile", "Mile", "1m", "Grade I", "Dirt"),
        race("Lovers Link Mile", "Mile", "1m", "Grade III", "Synthetic"),
        race("Wheel of Fortune Classic", "Medium", "1 1/16m", "Grade II", "Dirt"),
        race("Hermit Lantern Route", "Medium", "1 1/8m", "Grade I", "Turf"),
        race("Tower Vigil Marathon", "Long", "1 1/2m", "Grade I", "Turf"),
        race("World Arc Handicap", "Long", "1 3/8m", "Grade III", "Synthetic"),
        race("Starseer Cup", "Medium", "1 3/16m", "Grade II", "Synthetic"),
        race("Moonlit Arcana Stakes", "Sprint", "5 1/2f", "Grade III", "Turf"),
    ]
}
