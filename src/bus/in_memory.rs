use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use tokio::task::yield_now;

use crate::bus::{BusMessage, MessageBus, ReplyTo};
use crate::topic::topic_matches;

#[derive(Default)]
struct ClientState {
    connected: bool,
    disconnects: u32,
    subscriptions: Vec<String>,
    queue: VecDeque<BusMessage>,
}

#[derive(Default)]
struct BrokerState {
    clients: HashMap<String, ClientState>,
}

/// In-process stand-in for the real message bus. Hands out client endpoints
/// sharing one broker state; delivery is FIFO per client.
#[derive(Clone, Default)]
pub struct InMemoryBroker {
    state: Arc<Mutex<BrokerState>>,
}

impl InMemoryBroker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a client endpoint. Endpoints start disconnected.
    pub fn client(&self, name: &str) -> InMemoryBus {
        let mut state = self.state.lock().unwrap();
        state.clients.entry(name.to_string()).or_default();
        InMemoryBus {
            name: name.to_string(),
            state: Arc::clone(&self.state),
        }
    }

    pub fn is_connected(&self, name: &str) -> bool {
        let state = self.state.lock().unwrap();
        state
            .clients
            .get(name)
            .map(|c| c.connected)
            .unwrap_or(false)
    }

    /// Number of times the named client has disconnected.
    pub fn disconnect_count(&self, name: &str) -> u32 {
        let state = self.state.lock().unwrap();
        state.clients.get(name).map(|c| c.disconnects).unwrap_or(0)
    }

    /// Patterns the named client is currently subscribed to.
    pub fn subscriptions(&self, name: &str) -> Vec<String> {
        let state = self.state.lock().unwrap();
        state
            .clients
            .get(name)
            .map(|c| c.subscriptions.clone())
            .unwrap_or_default()
    }
}

/// One client endpoint on an [`InMemoryBroker`].
pub struct InMemoryBus {
    name: String,
    state: Arc<Mutex<BrokerState>>,
}

impl InMemoryBus {
    fn deliver(&self, msg: BusMessage) -> anyhow::Result<()> {
        let mut state = self.state.lock().unwrap();
        let connected = state
            .clients
            .get(&self.name)
            .map(|c| c.connected)
            .unwrap_or(false);
        if !connected {
            return Err(anyhow::anyhow!("client {} is not connected", self.name));
        }
        for client in state.clients.values_mut() {
            if client.connected
                && client
                    .subscriptions
                    .iter()
                    .any(|p| topic_matches(p, &msg.topic))
            {
                client.queue.push_back(msg.clone());
            }
        }
        Ok(())
    }

    fn with_client<R>(&self, f: impl FnOnce(&mut ClientState) -> R) -> anyhow::Result<R> {
        let mut state = self.state.lock().unwrap();
        let client = state
            .clients
            .get_mut(&self.name)
            .ok_or_else(|| anyhow::anyhow!("unknown client {}", self.name))?;
        Ok(f(client))
    }

    /// Pop the next queued message without waiting. Test helper; production
    /// consumers drive `recv`.
    pub fn try_recv(&mut self) -> Option<BusMessage> {
        let mut state = self.state.lock().unwrap();
        state
            .clients
            .get_mut(&self.name)
            .and_then(|c| c.queue.pop_front())
    }
}

#[async_trait::async_trait]
impl MessageBus for InMemoryBus {
    async fn connect(&mut self) -> anyhow::Result<()> {
        self.with_client(|c| c.connected = true)
    }

    async fn disconnect(&mut self) -> anyhow::Result<()> {
        self.with_client(|c| {
            if c.connected {
                c.connected = false;
                c.disconnects += 1;
            }
        })
    }

    async fn subscribe(&mut self, pattern: &str) -> anyhow::Result<()> {
        let name = self.name.clone();
        self.with_client(|c| {
            if !c.connected {
                return Err(anyhow::anyhow!("client {name} subscribed before connecting"));
            }
            if !c.subscriptions.iter().any(|p| p == pattern) {
                c.subscriptions.push(pattern.to_string());
            }
            Ok(())
        })?
    }

    async fn unsubscribe(&mut self, pattern: &str) -> anyhow::Result<()> {
        self.with_client(|c| c.subscriptions.retain(|p| p != pattern))
    }

    async fn publish(&mut self, topic: &str, payload: Vec<u8>) -> anyhow::Result<()> {
        self.deliver(BusMessage {
            topic: topic.to_string(),
            payload,
            reply_to: None,
            correlation_id: None,
        })
    }

    async fn publish_request(
        &mut self,
        topic: &str,
        payload: Vec<u8>,
        reply_to: ReplyTo,
    ) -> anyhow::Result<()> {
        self.deliver(BusMessage {
            topic: topic.to_string(),
            payload,
            reply_to: Some(reply_to),
            correlation_id: None,
        })
    }

    async fn send_reply(&mut self, request: &BusMessage, payload: Vec<u8>) -> anyhow::Result<()> {
        let reply_to = request
            .reply_to
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("request carries no reply address"))?;
        self.deliver(BusMessage {
            topic: reply_to.topic.clone(),
            payload,
            reply_to: None,
            correlation_id: Some(reply_to.correlation_id),
        })
    }

    async fn recv(&mut self) -> anyhow::Result<BusMessage> {
        loop {
            {
                let mut state = self.state.lock().unwrap();
                let client = state
                    .clients
                    .get_mut(&self.name)
                    .ok_or_else(|| anyhow::anyhow!("unknown client {}", self.name))?;
                if let Some(msg) = client.queue.pop_front() {
                    return Ok(msg);
                }
                if !client.connected {
                    return Err(anyhow::anyhow!("client {} is disconnected", self.name));
                }
            }
            yield_now().await;
        }
    }
}
