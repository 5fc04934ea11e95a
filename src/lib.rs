//! Player K/D stat tracker: library with models and derived statistics.

pub mod logic;
pub mod models;

pub use logic::{average, avg_kd, avg_win_loss, goal_standing, GoalStanding, PlayerOverview};
pub use models::{
    GameMap, MatchId, MatchRecord, MatchResult, Player, PlayerId, Roster, RosterError, Selection,
    SelectionMode, UnknownMap, DEFAULT_AVATAR_URL,
};
