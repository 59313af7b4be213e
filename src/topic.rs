use crate::config::DEFAULT_TOPIC_PREFIX;
use crate::protocol::PlayerName;

/// Builds the topic strings used by the lobby handshake.
///
/// Topics are hierarchical, `/`-separated addresses under a configurable
/// prefix. Subscription patterns use `*` to match exactly one level.
#[derive(Debug, Clone)]
pub struct TopicHelper {
    prefix: String,
}

impl TopicHelper {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Pattern covering join requests from any player.
    pub fn join_request_pattern(&self) -> String {
        format!("{}/JOIN-REQUEST/*", self.prefix)
    }

    /// Topic a player publishes its join request on.
    pub fn join_request_topic(&self, player: PlayerName) -> String {
        format!("{}/JOIN-REQUEST/{}", self.prefix, player)
    }

    /// Pattern covering board-set requests from any player.
    pub fn board_set_request_pattern(&self) -> String {
        format!("{}/BOARD-SET-REQUEST/*", self.prefix)
    }

    /// Topic a player publishes its board-set request on.
    pub fn board_set_request_topic(&self, player: PlayerName) -> String {
        format!("{}/BOARD-SET-REQUEST/{}", self.prefix, player)
    }

    /// Topic the controller broadcasts the game start on.
    pub fn game_start_topic(&self) -> String {
        format!("{}/GAME-START/CONTROLLER", self.prefix)
    }

    /// Reply topic owned by a single bus client.
    pub fn reply_topic(&self, client: &str) -> String {
        format!("{}/REPLY/{}", self.prefix, client)
    }
}

impl Default for TopicHelper {
    fn default() -> Self {
        Self::new(DEFAULT_TOPIC_PREFIX)
    }
}

/// Match a topic against a subscription pattern. `*` matches exactly one
/// topic level; every other segment must match verbatim.
pub fn topic_matches(pattern: &str, topic: &str) -> bool {
    let mut pat = pattern.split('/');
    let mut top = topic.split('/');
    loop {
        match (pat.next(), top.next()) {
            (None, None) => return true,
            (Some("*"), Some(_)) => {}
            (Some(p), Some(t)) if p == t => {}
            _ => return false,
        }
    }
}
