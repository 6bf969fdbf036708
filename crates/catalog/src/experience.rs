//! Experience catalog and lookup
//!
//! The catalog is an ordered, immutable list of guest experiences near the
//! hotel. Lookup is a deliberately loose substring match: the agent runtime
//! passes free text, and the first entry whose name (or any single name
//! token) appears in the query wins. Storage order breaks ties; a one-word
//! name that is also a common English word can match spuriously. That
//! imprecision is part of the contract, not a bug to fix here.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use concierge_config::constants::hotel::CONTACT_EMAIL;

use crate::CatalogError;

/// Fixed reply when no entry matches a query
pub const NO_MATCH_REPLY: &str = "I'm sorry, I couldn’t find anything matching your request. \
Please try asking about a different activity.";

/// One experience record
///
/// `distance` and `travel_time` are display strings with mixed units
/// ("6.7 Miles", "20 Feet", "Various locations"); nothing parses them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Unique display name; may contain curly apostrophes
    pub name: String,
    /// Free-text description
    pub details: String,
    /// Free-text distance from the hotel
    pub distance: String,
    /// Free-text travel time
    #[serde(alias = "time")]
    pub travel_time: String,
}

/// Experience catalog file structure
#[derive(Debug, Deserialize)]
struct ExperienceFile {
    experiences: Vec<CatalogEntry>,
}

/// Candidate paths for a catalog override file
fn default_data_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(data_dir) = std::env::var("CONCIERGE_DATA_DIR") {
        paths.push(PathBuf::from(&data_dir).join("experiences.json"));
    }

    paths.push(PathBuf::from("data/experiences.json"));
    paths
}

/// Process-wide catalog, loaded once
///
/// A JSON override replaces the embedded list when present; otherwise the
/// embedded entries are used. Never mutated after this point.
static EXPERIENCES: Lazy<Vec<CatalogEntry>> = Lazy::new(|| {
    for path in default_data_paths() {
        if let Ok(data) = load_experiences_from_file(&path) {
            tracing::info!(count = data.len(), path = %path.display(), "Loaded experience catalog from file");
            return data;
        }
    }
    builtin_experiences()
});

/// Read-only accessor for the experience catalog
pub fn experiences() -> &'static [CatalogEntry] {
    &EXPERIENCES
}

/// Load an experience catalog from a JSON file
///
/// Enforces the catalog invariant: every name non-empty and unique.
pub fn load_experiences_from_file<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<CatalogEntry>, CatalogError> {
    let content = std::fs::read_to_string(path)?;
    let file: ExperienceFile = serde_json::from_str(&content)?;

    let entries = file.experiences;
    for (i, entry) in entries.iter().enumerate() {
        if entry.name.is_empty() {
            return Err(CatalogError::Invalid(format!("entry {} has an empty name", i)));
        }
        if entries[..i].iter().any(|e| e.name == entry.name) {
            return Err(CatalogError::Invalid(format!(
                "duplicate entry name: {}",
                entry.name
            )));
        }
    }

    Ok(entries)
}

/// Find the first catalog entry matching a free-text query
///
/// Case-insensitive. An entry matches when its whole lower-cased name is a
/// substring of the query, or when any whitespace-delimited token of the
/// name is. First match in storage order wins.
pub fn lookup<'a>(catalog: &'a [CatalogEntry], query: &str) -> Option<&'a CatalogEntry> {
    let query = query.to_lowercase();

    catalog.iter().find(|entry| {
        let name = entry.name.to_lowercase();
        query.contains(&name) || name.split_whitespace().any(|token| query.contains(token))
    })
}

/// Search the experience catalog and return a guest-facing response
///
/// Pure over the process-wide catalog: a formatted description on match,
/// the fixed apology otherwise.
pub fn find_experience(query: &str) -> String {
    match lookup(experiences(), query) {
        Some(entry) => format!(
            "Yes! {} is available just {} away, about {}. {} \
             For more information, you can contact {}.",
            entry.name, entry.distance, entry.travel_time, entry.details, CONTACT_EMAIL
        ),
        None => NO_MATCH_REPLY.to_string(),
    }
}

/// The embedded experience catalog
fn builtin_experiences() -> Vec<CatalogEntry> {
    fn entry(name: &str, details: &str, distance: &str, travel_time: &str) -> CatalogEntry {
        CatalogEntry {
            name: name.to_string(),
            details: details.to_string(),
            distance: distance.to_string(),
            travel_time: travel_time.to_string(),
        }
    }

    vec![
        entry(
            "Catamaran Cruises",
            "Embark on a Catamaran cruise and swim, sunbathe and explore the Caribbean waters.",
            "6.7 Miles",
            "22 Minutes Driving",
        ),
        entry(
            "Ted’s Tours",
            "A fun-filled laid-back day out exploring Barbados with Ted.",
            "3.3 Miles",
            "14 Minutes Driving",
        ),
        entry(
            "Mount Gay Rum Tour",
            "Discover time-honoured secrets and sample rum at the world’s oldest rum distillery.",
            "19.4 Miles",
            "44 Minutes Driving",
        ),
        entry(
            "Atlantis Submarine",
            "Explore reefs and shipwrecks 50 metres underwater in a real submarine.",
            "6.9 Miles",
            "23 Minutes Driving",
        ),
        entry(
            "Jeep Safari",
            "Off-road adventure exploring Barbados' rugged northeast with a guide.",
            "7.2 Miles",
            "20 Minutes Driving",
        ),
        entry(
            "Harrison’s Cave",
            "Tram ride underground to see stunning stalactites and stalagmites.",
            "12.5 Miles",
            "32 Minutes Driving",
        ),
        entry(
            "Hunte’s Gardens",
            "Tropical trails with native plants and rum punch on Anthony Hunte’s porch.",
            "12.8 Miles",
            "31 Minutes Driving",
        ),
        entry(
            "Barbados Wildlife Reserve",
            "Stroll among monkeys, deer, and other wildlife. Feeding time is a must-see.",
            "19.3 Miles",
            "43 Minutes Driving",
        ),
        entry(
            "Orchid World",
            "1,000+ orchids from Barbados and the Caribbean in tropical gardens.",
            "9.3 Miles",
            "24 Minutes Driving",
        ),
        entry(
            "Harbour Lights Dinner Show",
            "Beachside BBQ and live Caribbean entertainment including fire dancers.",
            "4.7 Miles",
            "17 Minutes Driving",
        ),
        entry(
            "George Washington House",
            "Historic house and museum where George Washington stayed in 1751.",
            "4.2 Miles",
            "16 Minutes Driving",
        ),
        entry(
            "Horse Racing",
            "Watch races, enjoy street food, and join locals at Garrison Savannah.",
            "6 Miles",
            "22 Minutes Driving",
        ),
        entry(
            "St. Nicholas Abbey",
            "Historic Jacobean plantation with rum distillery and sugarcane museum.",
            "19.8 Miles",
            "45 Minutes Driving",
        ),
        entry(
            "Barbados National Trust Sites",
            "Historic homes, nature preserves, windmills and weekly heritage hikes.",
            "3.3 Miles",
            "11 Minutes Driving",
        ),
        entry(
            "Horseback Riding",
            "Ride beaches and plantations on the island’s eastern coast.",
            "14.5 Miles",
            "35 Minutes Driving",
        ),
        entry(
            "Deep Sea Fishing",
            "Catch tuna, marlin, and more near dramatic reef drop-offs.",
            "1.6 Miles",
            "7 Minutes Driving",
        ),
        entry(
            "Scuba Diving",
            "Explore shipwrecks and coral reefs in warm, wetsuit-free waters.",
            "2.9 Miles",
            "11 Minutes Driving",
        ),
        entry(
            "Tennis",
            "Play on standard or road tennis courts; road tennis is a local tradition.",
            "4.6 Miles",
            "17 Minutes Driving",
        ),
        entry(
            "Surfing",
            "Barbados offers top surf spots for all levels, steps from Sea Breeze.",
            "20 Feet",
            "1 Minute Walking",
        ),
        entry(
            "Barbados Golf Club",
            "Championship course near the beach with stunning coastal holes.",
            "3.3 Miles",
            "11 Minutes Driving",
        ),
        entry(
            "Sandy Lane",
            "Three elite golf courses including the Green Monkey by Tom Fazio.",
            "11.5 Miles",
            "27 Minutes Driving",
        ),
        entry(
            "Apes Hill",
            "One of the world's top-rated golf courses with lush scenery.",
            "14.2 Miles",
            "33 Minutes Driving",
        ),
        entry(
            "Rockley",
            "Barbados’ first golf course with a unique aviation legacy.",
            "2.6 Miles",
            "11 Minutes Driving",
        ),
        entry(
            "Car Hire",
            "Rent a car from the airport with unlimited mileage. Drive on the left.",
            "6.7 Miles",
            "15 Minutes Driving",
        ),
        entry(
            "Local Artist Shops",
            "Self-guided tour of over 25 studios and galleries across the island.",
            "Various locations",
            "Varies",
        ),
    ]
}
