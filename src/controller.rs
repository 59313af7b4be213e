use log::{debug, info, warn};
use serde::Serialize;

use crate::{
    bus::{BusMessage, MessageBus},
    config::NUM_PLAYERS,
    protocol::{decode, encode, BoardSetEvent, BoardSetResult, JoinResult, PlayerJoined, PlayerName},
    session::GameSession,
    topic::{topic_matches, TopicHelper},
};

/// Lobby phase of a single player slot, as shown on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerPhase {
    WaitingToJoin,
    Joined,
    SettingBoard,
    BoardSet,
}

/// Coordinates the two players' join and board-set handshakes and announces
/// the game start once both players are present.
///
/// All state is mutated between awaits of a single receive loop; the bus
/// serializes handler input, so no locking is needed.
pub struct LobbyController<B: MessageBus> {
    bus: B,
    topics: TopicHelper,
    session: GameSession,
    phases: [PlayerPhase; NUM_PLAYERS],
    boards_set: usize,
    started: bool,
    connected: bool,
}

impl<B: MessageBus> LobbyController<B> {
    pub fn new(bus: B, topics: TopicHelper, session: GameSession) -> Self {
        Self {
            bus,
            topics,
            session,
            phases: [PlayerPhase::WaitingToJoin; NUM_PLAYERS],
            boards_set: 0,
            started: false,
            connected: false,
        }
    }

    /// Connect to the bus and subscribe to both request patterns. Resets the
    /// lobby display state, as happens when the page is re-entered.
    pub async fn activate(&mut self) -> anyhow::Result<()> {
        self.bus.connect().await?;
        self.bus
            .subscribe(&self.topics.join_request_pattern())
            .await?;
        self.bus
            .subscribe(&self.topics.board_set_request_pattern())
            .await?;
        self.phases = [PlayerPhase::WaitingToJoin; NUM_PLAYERS];
        self.boards_set = 0;
        self.started = false;
        self.connected = true;
        Ok(())
    }

    /// Drive the lobby until both boards are set and the controller has
    /// disconnected from the bus.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        while self.connected {
            self.step().await?;
        }
        Ok(())
    }

    /// Receive and handle a single message.
    pub async fn step(&mut self) -> anyhow::Result<()> {
        let msg = self.bus.recv().await?;
        if topic_matches(&self.topics.join_request_pattern(), &msg.topic) {
            self.handle_join(msg).await
        } else if topic_matches(&self.topics.board_set_request_pattern(), &msg.topic) {
            self.handle_board_set(msg).await
        } else {
            debug!("ignoring message on unexpected topic {}", msg.topic);
            Ok(())
        }
    }

    async fn handle_join(&mut self, msg: BusMessage) -> anyhow::Result<()> {
        if msg.payload.is_empty() {
            // Join requests without a payload are dropped without a reply.
            debug!("dropping empty join request on {}", msg.topic);
            return Ok(());
        }
        let joined: PlayerJoined = match decode(&msg.payload) {
            Ok(joined) => joined,
            Err(err) => {
                warn!("malformed join request on {}: {err:#}", msg.topic);
                let result = JoinResult {
                    player_name: None,
                    success: false,
                    message: format!("Malformed join request: {err}"),
                };
                return self.reply(&msg, &result).await;
            }
        };
        let player = joined.player_name;
        if !self.session.record_join(joined) {
            // Duplicate joins are silently dropped: the caller never gets a
            // failure reply on this path.
            info!("{player} attempted to join twice; ignoring");
            return Ok(());
        }
        self.phases[player.index()] = PlayerPhase::Joined;
        info!("{player} joined the game");
        let result = JoinResult {
            player_name: Some(player),
            success: true,
            message: "Successfully joined the game!".to_string(),
        };
        self.reply(&msg, &result).await?;
        self.start_game().await
    }

    async fn handle_board_set(&mut self, msg: BusMessage) -> anyhow::Result<()> {
        let event: BoardSetEvent = match decode(&msg.payload) {
            Ok(event) => event,
            Err(err) => {
                warn!("malformed board-set request on {}: {err:#}", msg.topic);
                let result = BoardSetResult {
                    player_name: None,
                    success: false,
                    message: format!("Malformed board set request: {err}"),
                };
                return self.reply(&msg, &result).await;
            }
        };
        let player = event.player_name;
        let result = if self.phases[player.index()] == PlayerPhase::BoardSet {
            info!("{player} attempted to set its board twice");
            BoardSetResult {
                player_name: Some(player),
                success: false,
                message: format!("Board already set by {player}"),
            }
        } else {
            self.phases[player.index()] = PlayerPhase::BoardSet;
            self.boards_set += 1;
            info!("{player} board set ({}/{})", self.boards_set, NUM_PLAYERS);
            BoardSetResult {
                player_name: Some(player),
                success: true,
                message: "Board set!".to_string(),
            }
        };
        self.reply(&msg, &result).await?;
        if self.boards_set == NUM_PLAYERS {
            // Both boards are in; the lobby's work is done and no further
            // events should be delivered.
            info!("both boards set, disconnecting from the bus");
            self.bus.disconnect().await?;
            self.connected = false;
        }
        Ok(())
    }

    /// Announce the game start once both players have joined. Publishes the
    /// full join mapping and moves both players to the board-setup phase.
    async fn start_game(&mut self) -> anyhow::Result<()> {
        if self.started || !self.session.both_joined() {
            return Ok(());
        }
        self.started = true;
        let payload = encode(self.session.game_start())?;
        self.bus
            .publish(&self.topics.game_start_topic(), payload)
            .await?;
        for player in PlayerName::ALL {
            self.phases[player.index()] = PlayerPhase::SettingBoard;
        }
        info!("both players joined, game start announced");
        Ok(())
    }

    async fn reply<T: Serialize>(&mut self, request: &BusMessage, result: &T) -> anyhow::Result<()> {
        if request.reply_to.is_none() {
            warn!(
                "request on {} carries no reply address; dropping reply",
                request.topic
            );
            return Ok(());
        }
        self.bus.send_reply(request, encode(result)?).await
    }

    /// Unsubscribe from both request patterns on page teardown.
    pub async fn detach(&mut self) -> anyhow::Result<()> {
        self.bus
            .unsubscribe(&self.topics.join_request_pattern())
            .await?;
        self.bus
            .unsubscribe(&self.topics.board_set_request_pattern())
            .await?;
        Ok(())
    }

    /// UI status line for the given player slot.
    pub fn status(&self, player: PlayerName) -> String {
        match self.phases[player.index()] {
            PlayerPhase::WaitingToJoin => format!("Waiting for {player} to Join..."),
            PlayerPhase::Joined => format!("{player} Joined!"),
            PlayerPhase::SettingBoard => format!("Waiting for {player} to set board.."),
            PlayerPhase::BoardSet => format!("{player} Board Set!"),
        }
    }

    pub fn phase(&self, player: PlayerName) -> PlayerPhase {
        self.phases[player.index()]
    }

    pub fn boards_set(&self) -> usize {
        self.boards_set
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }
}
