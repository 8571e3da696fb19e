//! Dial seam between the connection state machine and the wire.
//!
//! The machine never touches a socket directly: it asks a `Dialer` for a
//! `Transport` and speaks frames through channels. Tests script this seam;
//! production uses the tokio-tungstenite dialer.

use async_trait::async_trait;
use tokio::sync::mpsc;

use wsparley_core::error::Result;

// --------------------
// Endpoint
// --------------------

/// Dial target: server address (`host:port`) plus the channel the connection
/// is scoped to. The path shape is fixed by the server's routing contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    server_addr: String,
    channel: String,
}

impl Endpoint {
    pub fn new(server_addr: impl Into<String>, channel: impl Into<String>) -> Self {
        Self { server_addr: server_addr.into(), channel: channel.into() }
    }

    /// Socket URL, plain `ws` scheme (this protocol has no TLS variant).
    pub fn url(&self) -> String {
        format!("ws://{}/channel/{}", self.server_addr, self.channel)
    }

    pub fn server_addr(&self) -> &str {
        &self.server_addr
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }
}

// --------------------
// Transport
// --------------------

/// Events a live transport reports upward, in arrival order.
#[derive(Debug)]
pub enum TransportEvent {
    /// Handshake completed; frames may flow.
    Opened,
    /// One inbound text frame.
    Frame(String),
    /// The transport is gone (peer close or failure). Terminal.
    Closed,
}

/// One live transport: an outbound frame pipe plus the inbound event stream.
///
/// The dialer owns the socket tasks behind these channels. Dropping `tx`
/// tears the writer down; the reader reports `Closed` exactly once.
pub struct Transport {
    pub tx: mpsc::Sender<String>,
    pub events: mpsc::Receiver<TransportEvent>,
}

// --------------------
// Dialer
// --------------------

/// Capability probe + dial.
#[async_trait]
pub trait Dialer: Send + Sync {
    /// Whether this platform can open persistent socket connections at all.
    fn supports(&self) -> bool {
        true
    }

    /// Open a transport to the endpoint. The transport reports `Opened` once
    /// its handshake completes; dialers that finish the handshake inside
    /// `dial` queue that event before returning.
    async fn dial(&self, endpoint: &Endpoint) -> Result<Transport>;
}
