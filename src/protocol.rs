use serde::{Deserialize, Serialize};

/// Identifies one of the two player slots in a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerName {
    Player1,
    Player2,
}

impl PlayerName {
    pub const ALL: [PlayerName; 2] = [PlayerName::Player1, PlayerName::Player2];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerName::Player1 => "Player1",
            PlayerName::Player2 => "Player2",
        }
    }

    /// The opposing player slot.
    pub fn other(&self) -> PlayerName {
        match self {
            PlayerName::Player1 => PlayerName::Player2,
            PlayerName::Player2 => PlayerName::Player1,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            PlayerName::Player1 => 0,
            PlayerName::Player2 => 1,
        }
    }
}

impl std::fmt::Display for PlayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A join announcement decoded from a join request payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerJoined {
    #[serde(rename = "playerName")]
    pub player_name: PlayerName,
}

/// Reply payload for a join request. `player_name` is absent on replies to
/// requests whose payload could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinResult {
    #[serde(rename = "playerName", default, skip_serializing_if = "Option::is_none")]
    pub player_name: Option<PlayerName>,
    pub success: bool,
    pub message: String,
}

/// A board-ready announcement decoded from a board-set request payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSetEvent {
    #[serde(rename = "playerName")]
    pub player_name: PlayerName,
}

/// Reply payload for a board-set request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSetResult {
    #[serde(rename = "playerName", default, skip_serializing_if = "Option::is_none")]
    pub player_name: Option<PlayerName>,
    pub success: bool,
    pub message: String,
}

/// Mapping of player slots to their join records. Broadcast as the
/// game-start payload once both slots are filled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStart {
    #[serde(rename = "Player1", default, skip_serializing_if = "Option::is_none")]
    pub player1: Option<PlayerJoined>,
    #[serde(rename = "Player2", default, skip_serializing_if = "Option::is_none")]
    pub player2: Option<PlayerJoined>,
}

impl GameStart {
    pub fn get(&self, player: PlayerName) -> Option<&PlayerJoined> {
        match player {
            PlayerName::Player1 => self.player1.as_ref(),
            PlayerName::Player2 => self.player2.as_ref(),
        }
    }

    pub fn set(&mut self, joined: PlayerJoined) {
        match joined.player_name {
            PlayerName::Player1 => self.player1 = Some(joined),
            PlayerName::Player2 => self.player2 = Some(joined),
        }
    }

    pub fn both_present(&self) -> bool {
        self.player1.is_some() && self.player2.is_some()
    }
}

/// Encode a payload as UTF-8 JSON.
pub fn encode<T: Serialize>(value: &T) -> anyhow::Result<Vec<u8>> {
    Ok(serde_json::to_vec(value)?)
}

/// Decode a UTF-8 JSON payload. Failures are recoverable; request handlers
/// answer them with a `success:false` reply.
pub fn decode<'de, T: Deserialize<'de>>(payload: &'de [u8]) -> anyhow::Result<T> {
    Ok(serde_json::from_slice(payload)?)
}
