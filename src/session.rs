use crate::protocol::{GameStart, PlayerJoined, PlayerName};

/// State for one game session: which players have joined so far.
///
/// Mutated only from the controller's event loop, so plain fields suffice.
/// Scoped to a single session; construct a fresh one per game.
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    start: GameStart,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a join. Returns false if the player already joined; a player's
    /// join is accepted at most once.
    pub fn record_join(&mut self, joined: PlayerJoined) -> bool {
        if self.start.get(joined.player_name).is_some() {
            return false;
        }
        self.start.set(joined);
        true
    }

    pub fn joined(&self, player: PlayerName) -> bool {
        self.start.get(player).is_some()
    }

    pub fn both_joined(&self) -> bool {
        self.start.both_present()
    }

    /// Snapshot of the join records, used as the game-start broadcast payload.
    pub fn game_start(&self) -> &GameStart {
        &self.start
    }
}
