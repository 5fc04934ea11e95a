//! Data structures for the stat tracker: players, matches, roster state.

mod game;
mod player;
mod roster;

pub use game::{GameMap, MatchId, MatchRecord, MatchResult, UnknownMap};
pub use player::{Player, PlayerId};
pub use roster::{Roster, RosterError, Selection, SelectionMode, DEFAULT_AVATAR_URL};
