/// Default prefix under which all lobby topics live.
pub const DEFAULT_TOPIC_PREFIX: &str = "BATTLESHIP/LOBBY";

pub const NUM_PLAYERS: usize = 2;
