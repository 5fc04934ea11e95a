//! Roster: the in-memory collection of players plus selection state.

use crate::models::game::{GameMap, MatchId, MatchRecord, MatchResult};
use crate::models::player::{Player, PlayerId};
use serde::{Deserialize, Serialize};

/// Avatar service used when the add-player form leaves the image blank.
pub const DEFAULT_AVATAR_URL: &str = "https://i.pravatar.cc/48";

/// Errors that can occur during roster operations.
///
/// A failed operation never changes the roster; callers decide how to
/// surface the reason.
#[derive(Clone, Debug, PartialEq)]
pub enum RosterError {
    /// Gamertag is empty (or whitespace only).
    EmptyGamertag,
    /// K/D goal is not a non-negative finite number.
    InvalidKdGoal,
    /// Match K/D is not a non-negative finite number.
    InvalidKd,
    /// No player with this id in the roster.
    PlayerNotFound(PlayerId),
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::EmptyGamertag => write!(f, "Gamertag must not be empty"),
            RosterError::InvalidKdGoal => write!(f, "K/D goal must be a non-negative number"),
            RosterError::InvalidKd => write!(f, "K/D must be a non-negative number"),
            RosterError::PlayerNotFound(_) => write!(f, "Player not found"),
        }
    }
}

/// Which panel a selection drives.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// Read-only match history panel.
    View,
    /// Record-a-match form.
    Update,
    /// Edit-profile form.
    Edit,
}

/// The one active (player, panel) pair. At most one exists at a time.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub player_id: PlayerId,
    pub mode: SelectionMode,
}

/// Full roster state: players, the active selection, and the add-player
/// panel flag. Selection and an open add-player panel are mutually exclusive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    /// Tracked players, unique by id. Append or replace-in-place only;
    /// players are never removed.
    pub players: Vec<Player>,
    /// Selecting the active (player, mode) pair again clears this (toggle).
    pub selection: Option<Selection>,
    /// Whether the add-player form is open.
    pub show_add_player: bool,
}

impl Roster {
    /// Create an empty roster with no selection.
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            selection: None,
            show_add_player: false,
        }
    }

    /// The sample roster the app starts with: two players, three matches each.
    pub fn seeded() -> Self {
        let mut merc = Player::new("CallMeMerc", "https://i.pravatar.cc/48?u=118836", 1.65);
        merc.kd = 1.5;
        merc.win_loss = 1.01;
        merc.add_match(MatchRecord::new(GameMap::Rust, 1.85, MatchResult::Loss));
        merc.add_match(MatchRecord::new(GameMap::AzhirCave, 0.9, MatchResult::Win));
        merc.add_match(MatchRecord::new(GameMap::GunRunner, 2.3, MatchResult::Win));

        let mut tacos = Player::new("WillKillForTacos", "https://i.pravatar.cc/48?u=933372", 1.25);
        tacos.kd = 1.05;
        tacos.win_loss = 1.05;
        tacos.add_match(MatchRecord::new(GameMap::HackneyYard, 1.25, MatchResult::Win));
        tacos.add_match(MatchRecord::new(GameMap::GraznaRaid, 0.4, MatchResult::Loss));
        tacos.add_match(MatchRecord::new(GameMap::Rust, 0.75, MatchResult::Loss));

        Self {
            players: vec![merc, tacos],
            selection: None,
            show_add_player: false,
        }
    }

    /// Look up a player by id.
    pub fn get_player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    fn get_player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    /// Add a player from the add-player form. Requires a non-empty gamertag
    /// and a non-negative finite K/D goal. A blank image falls back to the
    /// placeholder avatar service; either way the player id is appended as a
    /// query string so every avatar is distinct.
    ///
    /// On success the add-player panel closes and the new id is returned.
    pub fn add_player(
        &mut self,
        gamertag: &str,
        image: &str,
        kd_goal: f64,
    ) -> Result<PlayerId, RosterError> {
        let gamertag = gamertag.trim();
        if gamertag.is_empty() {
            return Err(RosterError::EmptyGamertag);
        }
        if !kd_goal.is_finite() || kd_goal < 0.0 {
            return Err(RosterError::InvalidKdGoal);
        }
        let image = image.trim();
        let base = if image.is_empty() { DEFAULT_AVATAR_URL } else { image };

        let mut player = Player::new(gamertag, "", kd_goal);
        player.image = format!("{}?={}", base, player.id);
        let id = player.id;
        self.players.push(player);
        self.show_add_player = false;
        Ok(id)
    }

    /// Replace a player's profile fields from the edit form. Blank or absent
    /// fields keep their previous value; the id and match history are never
    /// touched. Clears the selection on success.
    pub fn edit_player(
        &mut self,
        id: PlayerId,
        gamertag: Option<&str>,
        image: Option<&str>,
        kd_goal: Option<f64>,
    ) -> Result<(), RosterError> {
        if let Some(goal) = kd_goal {
            if !goal.is_finite() || goal < 0.0 {
                return Err(RosterError::InvalidKdGoal);
            }
        }
        let player = self
            .get_player_mut(id)
            .ok_or(RosterError::PlayerNotFound(id))?;
        if let Some(tag) = gamertag.map(str::trim).filter(|t| !t.is_empty()) {
            player.gamertag = tag.to_string();
        }
        if let Some(img) = image.map(str::trim).filter(|i| !i.is_empty()) {
            player.image = img.to_string();
        }
        if let Some(goal) = kd_goal {
            player.kd_goal = goal;
        }
        self.selection = None;
        Ok(())
    }

    /// Append a match from the update-stats form to a player's history.
    /// Requires a non-negative finite K/D. Clears the selection on success
    /// and returns the new match id.
    pub fn record_match(
        &mut self,
        player_id: PlayerId,
        map: GameMap,
        kd: f64,
        result: MatchResult,
    ) -> Result<MatchId, RosterError> {
        if !kd.is_finite() || kd < 0.0 {
            return Err(RosterError::InvalidKd);
        }
        let player = self
            .get_player_mut(player_id)
            .ok_or(RosterError::PlayerNotFound(player_id))?;
        let record = MatchRecord::new(map, kd, result);
        let match_id = record.id;
        player.add_match(record);
        self.selection = None;
        Ok(match_id)
    }

    /// Set the active (player, mode) pair. Selecting the pair that is
    /// already active clears it instead (open/close toggle). Any selection
    /// closes the add-player panel.
    pub fn select(&mut self, player_id: PlayerId, mode: SelectionMode) -> Result<(), RosterError> {
        if self.get_player(player_id).is_none() {
            return Err(RosterError::PlayerNotFound(player_id));
        }
        let next = Selection { player_id, mode };
        self.selection = if self.selection == Some(next) {
            None
        } else {
            Some(next)
        };
        self.show_add_player = false;
        Ok(())
    }

    /// Show or hide the add-player form. Clears any active selection.
    pub fn toggle_add_player(&mut self) {
        self.show_add_player = !self.show_add_player;
        self.selection = None;
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}
