//! Name word banks.
//!
//! Entries are deliberately messy (camel case, hyphens, several words): the
//! composer reduces each one to a single leading or trailing word.

pub const FIRST_NAMES: &[&str] = &[
    "Atlas Runner",
    "Starlight Wanderer",
    "Copper Comet",
    "MidnightExpress",
    "Silver-Lining",
    "Thunder Road",
    "Velvet Hammer",
    "Golden_Arrow",
    "Quiet Storm",
    "Rusty Spur",
    "Wild Clover",
    "Harbor Light",
    "Ember Dancer",
    "Frost Bitten",
    "Lucky Penny",
    "Iron Duke",
    "Saffron Sky",
    "Cinder Trail",
    "BlueMoonRising",
    "Maple Jack",
    "Dusty Boots",
    "Northern Dancer",
    "Tin Soldier",
    "Brave Heart",
    "Sable Knight",
    "Honey Badger",
    "Crimson Tide",
    "Whisper Jet",
    "Granite State",
    "Jolly Roger",
    "Pepper Mill",
    "Rogue Wave",
    "Echo Canyon",
    "Marble Arch",
    "Tango Sierra",
    "Zephyr Gold",
];

pub const MIDDLE_NAMES: &[&str] = &[
    "the Dawn",
    "Dusk Patrol",
    "Moon Over",
    "Beyond Reason",
    "StarCrossed",
    "Against the Grain",
    "Mist-Walker",
    "Within Reach",
    "Quickstep",
    "Blazing Saddles",
    "Through Fire",
    "Across Rivers",
    "Beneath_Stars",
    "Overcast Skies",
    "Almost Famous",
    "Seldom Seen",
    "Royal Flush",
    "Never Again",
];

pub const LAST_NAMES: &[&str] = &[
    "Open Field",
    "Bronze-Mane",
    "Silver Hoof",
    "NightFury",
    "Thistle Down",
    "Wind_Chaser",
    "Long Shot",
    "Iron Horse",
    "Morning Glory",
    "Ridge Runner",
    "Salt Marsh",
    "Stormcloud",
    "Fast Lane",
    "Prairie Fire",
    "Red Rover",
    "Blackwater",
    "Kingsgate",
    "High Tide",
    "Paper Moon",
    "Lightning Bolt",
    "Copper Kettle",
    "Sundance",
    "Ember Glow",
    "Foxglove",
    "Ironbark",
    "Riverbend",
    "Hollow Oak",
    "Stardust",
    "Grey Ghost",
    "Daybreak",
    "Hailstone",
    "Wildfire",
];
