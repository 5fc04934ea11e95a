//! MatchRecord, MatchResult, and the closed set of known maps.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a recorded match.
pub type MatchId = Uuid;

/// Outcome of a match for the tracked player.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchResult {
    #[default]
    Win,
    Loss,
}

impl MatchResult {
    pub fn is_win(&self) -> bool {
        matches!(self, MatchResult::Win)
    }
}

/// A known multiplayer map. Matches can only be recorded on one of these.
///
/// The set is fixed: the update-stats form offers it as a dropdown, and a few
/// extra maps appear only in the seeded sample roster.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GameMap {
    Afghan,
    Alley,
    AzhirCave,
    Blacksite,
    CrownRaceway,
    DasHouse,
    Departures,
    Derail,
    Dome,
    Estate,
    Exhibit,
    Farm18,
    Favela,
    GraznaRaid,
    Greece,
    GunRunner,
    HackneyYard,
    Highrise,
    Invasion,
    Karachi,
    LasAlmas,
    LevinResort,
    Meat,
    OrlovMilitaryBase,
    PopovPower,
    Quarry,
    Rio,
    Rundown,
    Rust,
    Scrapyard,
    Shipment,
    ShootHouse,
    Skidrow,
    StashHouse,
    SubBase,
    Terminal,
    Underpass,
    Vista,
    Wasteland,
}

impl GameMap {
    /// Every known map, in display order (used for the form dropdown).
    pub const ALL: [GameMap; 39] = [
        GameMap::Afghan,
        GameMap::Alley,
        GameMap::AzhirCave,
        GameMap::Blacksite,
        GameMap::CrownRaceway,
        GameMap::DasHouse,
        GameMap::Departures,
        GameMap::Derail,
        GameMap::Dome,
        GameMap::Estate,
        GameMap::Exhibit,
        GameMap::Farm18,
        GameMap::Favela,
        GameMap::GraznaRaid,
        GameMap::Greece,
        GameMap::GunRunner,
        GameMap::HackneyYard,
        GameMap::Highrise,
        GameMap::Invasion,
        GameMap::Karachi,
        GameMap::LasAlmas,
        GameMap::LevinResort,
        GameMap::Meat,
        GameMap::OrlovMilitaryBase,
        GameMap::PopovPower,
        GameMap::Quarry,
        GameMap::Rio,
        GameMap::Rundown,
        GameMap::Rust,
        GameMap::Scrapyard,
        GameMap::Shipment,
        GameMap::ShootHouse,
        GameMap::Skidrow,
        GameMap::StashHouse,
        GameMap::SubBase,
        GameMap::Terminal,
        GameMap::Underpass,
        GameMap::Vista,
        GameMap::Wasteland,
    ];

    /// Display name, as shown in the form and stored in JSON.
    pub fn name(&self) -> &'static str {
        match self {
            GameMap::Afghan => "Afghan",
            GameMap::Alley => "Alley",
            GameMap::AzhirCave => "Azhir Cave",
            GameMap::Blacksite => "Blacksite",
            GameMap::CrownRaceway => "Crown Raceway",
            GameMap::DasHouse => "Das House",
            GameMap::Departures => "Departures",
            GameMap::Derail => "Derail",
            GameMap::Dome => "Dome",
            GameMap::Estate => "Estate",
            GameMap::Exhibit => "Exhibit",
            GameMap::Farm18 => "Farm 18",
            GameMap::Favela => "Favela",
            GameMap::GraznaRaid => "Grazna Raid",
            GameMap::Greece => "Greece",
            GameMap::GunRunner => "Gun Runner",
            GameMap::HackneyYard => "Hackney Yard",
            GameMap::Highrise => "Highrise",
            GameMap::Invasion => "Invasion",
            GameMap::Karachi => "Karachi",
            GameMap::LasAlmas => "Las Almas",
            GameMap::LevinResort => "Levin Resort",
            GameMap::Meat => "Meat",
            GameMap::OrlovMilitaryBase => "Orlov Military Base",
            GameMap::PopovPower => "Popov Power",
            GameMap::Quarry => "Quarry",
            GameMap::Rio => "Rio",
            GameMap::Rundown => "Rundown",
            GameMap::Rust => "Rust",
            GameMap::Scrapyard => "Scrapyard",
            GameMap::Shipment => "Shipment",
            GameMap::ShootHouse => "Shoot House",
            GameMap::Skidrow => "Skidrow",
            GameMap::StashHouse => "Stash House",
            GameMap::SubBase => "Sub Base",
            GameMap::Terminal => "Terminal",
            GameMap::Underpass => "Underpass",
            GameMap::Vista => "Vista",
            GameMap::Wasteland => "Wasteland",
        }
    }
}

impl fmt::Display for GameMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Map name that is not in the known set.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownMap(pub String);

impl fmt::Display for UnknownMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown map: {}", self.0)
    }
}

impl FromStr for GameMap {
    type Err = UnknownMap;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameMap::ALL
            .iter()
            .copied()
            .find(|m| m.name() == s)
            .ok_or_else(|| UnknownMap(s.to_string()))
    }
}

// Stored and transmitted as the display name so JSON matches the form.
impl Serialize for GameMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for GameMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// One completed game for a player. Immutable once recorded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: MatchId,
    pub map: GameMap,
    /// Kill/death ratio for this match (entered directly, non-negative).
    pub kd: f64,
    pub result: MatchResult,
}

impl MatchRecord {
    pub fn new(map: GameMap, kd: f64, result: MatchResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            map,
            kd,
            result,
        }
    }
}
