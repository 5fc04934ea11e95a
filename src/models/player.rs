//! Player data structure.

use crate::models::game::MatchRecord;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in selection and lookups).
pub type PlayerId = Uuid;

/// A tracked player: profile fields plus an append-only match history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Display name, never empty.
    pub gamertag: String,
    /// Avatar image URL.
    pub image: String,
    /// Baseline K/D seeded at creation. Legacy field: never recomputed and
    /// not used by the derived averages, which always come from `matches`.
    pub kd: f64,
    /// Baseline win/loss seeded at creation. Legacy field, see `kd`.
    #[serde(rename = "win/loss")]
    pub win_loss: f64,
    /// Target average K/D the player is aiming for.
    pub kd_goal: f64,
    /// Completed matches, insertion order = chronological order. Append-only.
    pub matches: Vec<MatchRecord>,
}

impl Player {
    /// Create a new player with the given profile. Baselines start at zero
    /// and the match history starts empty.
    pub fn new(gamertag: impl Into<String>, image: impl Into<String>, kd_goal: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            gamertag: gamertag.into(),
            image: image.into(),
            kd: 0.0,
            win_loss: 0.0,
            kd_goal,
            matches: Vec::new(),
        }
    }

    /// Append a completed match to this player's history.
    pub fn add_match(&mut self, m: MatchRecord) {
        self.matches.push(m);
    }
}
