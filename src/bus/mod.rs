pub mod in_memory;

/// Address a reply should be published to, together with the correlation id
/// the requester is waiting on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyTo {
    pub topic: String,
    pub correlation_id: u64,
}

/// A message delivered to a bus client.
#[derive(Debug, Clone)]
pub struct BusMessage {
    pub topic: String,
    pub payload: Vec<u8>,
    /// Present on request messages; answered through `send_reply`.
    pub reply_to: Option<ReplyTo>,
    /// Present on replies; echoes the correlation id of the request.
    pub correlation_id: Option<u64>,
}

/// Capability interface over the publish/subscribe bus. The controller and
/// the player clients only ever talk to the bus through this trait.
#[async_trait::async_trait]
pub trait MessageBus: Send + Sync {
    async fn connect(&mut self) -> anyhow::Result<()>;
    async fn disconnect(&mut self) -> anyhow::Result<()>;
    async fn subscribe(&mut self, pattern: &str) -> anyhow::Result<()>;
    async fn unsubscribe(&mut self, pattern: &str) -> anyhow::Result<()>;
    /// One-way broadcast with no expected reply.
    async fn publish(&mut self, topic: &str, payload: Vec<u8>) -> anyhow::Result<()>;
    /// Publish a request carrying a reply address and correlation id.
    async fn publish_request(
        &mut self,
        topic: &str,
        payload: Vec<u8>,
        reply_to: ReplyTo,
    ) -> anyhow::Result<()>;
    /// Reply to a correlation-bearing request message.
    async fn send_reply(&mut self, request: &BusMessage, payload: Vec<u8>) -> anyhow::Result<()>;
    /// Next message delivered to this client, in arrival order.
    async fn recv(&mut self) -> anyhow::Result<BusMessage>;
}
