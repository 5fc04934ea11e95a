//! Derived player statistics, recomputed from match history on every read.

use crate::models::{Player, PlayerId};
use serde::{Deserialize, Serialize};

/// Arithmetic mean of a sequence. The mean of an empty sequence is 0.
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Average K/D across a player's matches (0 with no matches).
pub fn avg_kd(player: &Player) -> f64 {
    let kds: Vec<f64> = player.matches.iter().map(|m| m.kd).collect();
    average(&kds)
}

/// Average "win/loss ratio": each win contributes 2, each loss 0, so the
/// result lands in [0, 2]. Not a true wins/losses ratio, but the formula the
/// product displays; kept as-is.
pub fn avg_win_loss(player: &Player) -> f64 {
    let points: Vec<f64> = player
        .matches
        .iter()
        .map(|m| if m.result.is_win() { 1.0 } else { -1.0 } + 1.0)
        .collect();
    average(&points)
}

/// How the current average K/D compares to the player's goal.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStanding {
    /// Average K/D is above the goal.
    Above,
    /// Average K/D is below the goal.
    Below,
    /// Exactly at the goal.
    AtGoal,
}

/// Three-way comparison of `avg_kd` against `kd_goal`.
pub fn goal_standing(player: &Player) -> GoalStanding {
    let avg = avg_kd(player);
    if avg > player.kd_goal {
        GoalStanding::Above
    } else if avg < player.kd_goal {
        GoalStanding::Below
    } else {
        GoalStanding::AtGoal
    }
}

/// Display view of a player: profile fields plus the derived stats
/// (for API responses; built per request, never cached).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerOverview {
    pub id: PlayerId,
    pub gamertag: String,
    pub image: String,
    pub kd_goal: f64,
    pub matches_played: usize,
    pub avg_kd: f64,
    pub avg_win_loss: f64,
    pub goal_standing: GoalStanding,
}

impl PlayerOverview {
    pub fn from_player(p: &Player) -> Self {
        Self {
            id: p.id,
            gamertag: p.gamertag.clone(),
            image: p.image.clone(),
            kd_goal: p.kd_goal,
            matches_played: p.matches.len(),
            avg_kd: avg_kd(p),
            avg_win_loss: avg_win_loss(p),
            goal_standing: goal_standing(p),
        }
    }
}
