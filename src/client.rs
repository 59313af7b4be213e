use log::debug;
use serde::de::DeserializeOwned;

use crate::{
    bus::{MessageBus, ReplyTo},
    protocol::{decode, encode, BoardSetEvent, BoardSetResult, GameStart, JoinResult, PlayerJoined, PlayerName},
    topic::{topic_matches, TopicHelper},
};

/// Player-side endpoint of the lobby handshake: issues join and board-set
/// requests and waits for the controller's game-start broadcast.
pub struct PlayerClient<B: MessageBus> {
    bus: B,
    name: PlayerName,
    topics: TopicHelper,
    reply_topic: String,
    next_correlation: u64,
}

impl<B: MessageBus> PlayerClient<B> {
    pub fn new(bus: B, name: PlayerName, topics: TopicHelper) -> Self {
        let reply_topic = topics.reply_topic(name.as_str());
        Self {
            bus,
            name,
            topics,
            reply_topic,
            next_correlation: 0,
        }
    }

    pub fn name(&self) -> PlayerName {
        self.name
    }

    /// Connect and subscribe to this client's reply topic and the game-start
    /// broadcast.
    pub async fn connect(&mut self) -> anyhow::Result<()> {
        self.bus.connect().await?;
        self.bus.subscribe(&self.reply_topic).await?;
        self.bus.subscribe(&self.topics.game_start_topic()).await?;
        Ok(())
    }

    pub async fn disconnect(&mut self) -> anyhow::Result<()> {
        self.bus.disconnect().await
    }

    /// Request to join the game under this client's player name.
    pub async fn join(&mut self) -> anyhow::Result<JoinResult> {
        let topic = self.topics.join_request_topic(self.name);
        let payload = encode(&PlayerJoined {
            player_name: self.name,
        })?;
        self.request(&topic, payload).await
    }

    /// Announce that this player's board is set.
    pub async fn set_board(&mut self) -> anyhow::Result<BoardSetResult> {
        let topic = self.topics.board_set_request_topic(self.name);
        let payload = encode(&BoardSetEvent {
            player_name: self.name,
        })?;
        self.request(&topic, payload).await
    }

    /// Block until the controller broadcasts the game start.
    pub async fn await_game_start(&mut self) -> anyhow::Result<GameStart> {
        let topic = self.topics.game_start_topic();
        loop {
            let msg = self.bus.recv().await?;
            if topic_matches(&topic, &msg.topic) {
                return decode(&msg.payload);
            }
            debug!(
                "{}: skipping message on {} while waiting for game start",
                self.name, msg.topic
            );
        }
    }

    /// Publish a request and wait for the reply bearing its correlation id.
    async fn request<T: DeserializeOwned>(
        &mut self,
        topic: &str,
        payload: Vec<u8>,
    ) -> anyhow::Result<T> {
        let correlation_id = self.next_correlation;
        self.next_correlation += 1;
        let reply_to = ReplyTo {
            topic: self.reply_topic.clone(),
            correlation_id,
        };
        self.bus.publish_request(topic, payload, reply_to).await?;
        loop {
            let msg = self.bus.recv().await?;
            if msg.correlation_id == Some(correlation_id) {
                return decode(&msg.payload);
            }
            debug!("{}: skipping uncorrelated message on {}", self.name, msg.topic);
        }
    }
}
