//! Business logic: derived statistics over the roster model.

mod stats;

pub use stats::{average, avg_kd, avg_win_loss, goal_standing, GoalStanding, PlayerOverview};
