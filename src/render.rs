//! Plain-text views of the stable.
//!
//! The detail view covers vitals, the race card, the body map table and
//! status flags; the inventory view lists every horse in the stable.

use crate::format::format_purse;
use crate::horse::Horse;

const DASH: &str = "—";

/// Status chips shown per inventory entry.
const INVENTORY_CHIPS: usize = 3;

fn row(label: &str, value: &str) -> String {
    format!("  {:<16}{}\n", label, value)
}

/// Vitals, race card, body map and statuses for one horse, or the empty
/// placeholders when nothing has been minted yet.
pub fn render_horse_details(horse: Option<&Horse>) -> String {
    let mut out = String::new();

    let Some(horse) = horse else {
        out.push_str("Awaiting Registration\n");
        out.push_str("No stats yet\n\n");
        for label in ["Temperament", "Stride Length", "Horse Width", "Height", "Age", "Coat Color", "Track Type", "Track Going"] {
            out.push_str(&row(label, DASH));
        }
        out.push_str(&row("Total Purse", &format_purse(0)));
        out.push('\n');
        out.push_str(&render_race_card(None));
        out.push('\n');
        out.push_str(&render_body_table(None));
        out.push('\n');
        out.push_str(&render_statuses(None));
        return out;
    };

    let stats = &horse.stats;
    out.push_str(&format!("♞ {}\n", horse.identity.label));
    out.push_str(&format!("{} yrs • {}\n\n", stats.age, stats.coat_color));
    out.push_str(&row("Temperament", &stats.temperament));
    out.push_str(&row("Stride Length", &stats.stride_length));
    out.push_str(&row("Horse Width", &stats.width));
    out.push_str(&row("Height", stats.height().unwrap_or(DASH)));
    out.push_str(&row("Age", &stats.age.to_string()));
    out.push_str(&row("Coat Color", &stats.coat_color));
    out.push_str(&row("Track Type", stats.preferred_track().unwrap_or(DASH)));
    out.push_str(&row("Track Going", stats.preferred_going().unwrap_or(DASH)));
    out.push_str(&row("Total Purse", &format_purse(stats.total_purse())));
    out.push('\n');
    out.push_str(&render_race_card(Some(horse)));
    out.push('\n');
    out.push_str(&render_body_table(Some(horse)));
    out.push('\n');
    out.push_str(&render_statuses(Some(horse)));
    out
}

/// The campaign assignment, or "Unassigned".
pub fn render_race_card(horse: Option<&Horse>) -> String {
    let mut out = String::from("Race Card (US Graded Stakes tiers)\n");

    let campaign = horse.and_then(|h| h.stats.campaign.as_ref());
    let Some(campaign) = campaign else {
        out.push_str(&row("Race", "Unassigned"));
        for label in ["Grade", "Type & Distance", "Track", "Surface", "Going", "Region"] {
            out.push_str(&row(label, DASH));
        }
        return out;
    };

    let race = &campaign.race;
    let track = &campaign.track;
    out.push_str(&row("Race", &race.name));
    out.push_str(&row("Grade", &race.grade));
    out.push_str(&row("Type & Distance", &format!("{} • {}", race.race_type, race.distance)));
    out.push_str(&row("Track", &track.definition.name));
    out.push_str(&row("Surface", track.surface()));
    out.push_str(&row("Going", &track.going));
    out.push_str(&row("Region", &track.definition.region));
    out
}

/// Per-part conformation, strength and stamina.
pub fn render_body_table(horse: Option<&Horse>) -> String {
    let mut out = String::from("Body Map\n");
    out.push_str(&format!("  {:<16}{:>13}{:>10}{:>9}\n", "Part", "Conformation", "Strength", "Stamina"));

    match horse {
        None => out.push_str("  No anatomy logged. Mint a horse.\n"),
        Some(horse) => {
            for part in &horse.stats.body_map {
                out.push_str(&format!(
                    "  {:<16}{:>12}%{:>9}%{:>8}%\n",
                    part.label, part.conformation, part.strength, part.stamina
                ));
            }
        }
    }
    out
}

pub fn render_statuses(horse: Option<&Horse>) -> String {
    let mut out = String::from("Status Flags\n");
    match horse {
        None => out.push_str("  Mint a horse to track statuses.\n"),
        Some(horse) => {
            for status in horse.stats.statuses.iter() {
                out.push_str(&format!("  - {}\n", status));
            }
        }
    }
    out
}

/// The stable, newest first. `active` marks the horse in the detail view.
pub fn render_inventory(horses: &[Horse], capacity: usize, active: Option<usize>) -> String {
    let mut out = format!("Stable Inventory (tracking last {})\n", capacity);

    if horses.is_empty() {
        out.push_str("  Mint a horse to populate the stable.\n");
        return out;
    }

    for (i, horse) in horses.iter().enumerate() {
        let stats = &horse.stats;
        let marker = if active == Some(i) { ">" } else { " " };
        out.push_str(&format!("{} [{}] ♞ {}\n", marker, i, horse.identity.label));
        out.push_str(&format!(
            "      {} yrs • {} • {}/{}\n",
            stats.age,
            stats.temperament,
            stats.preferred_track().unwrap_or(DASH),
            stats.preferred_going().unwrap_or(DASH),
        ));
        let race_line = match &stats.campaign {
            Some(campaign) => format!("{} • {}", campaign.race.grade, campaign.race.name),
            None => "Race TBD".to_string(),
        };
        out.push_str(&format!("      {}\n", race_line));

        let chips: Vec<String> = stats
            .statuses
            .iter()
            .take(INVENTORY_CHIPS)
            .map(|s| format!("[{}]", s))
            .collect();
        if !chips.is_empty() {
            out.push_str(&format!("      {}\n", chips.join(" ")));
        }
    }
    out
}
