//! Shared test fixtures: scripted dialer, ledger renderer, settle helper.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::time::Instant;

use wsparley_client::render::{ConfirmPrompt, LogRenderer};
use wsparley_client::transport::{Dialer, Endpoint, Transport, TransportEvent};
use wsparley_core::error::{Result, WsParleyError};

// --------------------
// Ledger renderer
// --------------------

/// Ordered record of everything the client displayed.
#[derive(Clone, Default)]
pub struct Ledger(Arc<Mutex<Vec<String>>>);

impl Ledger {
    pub fn push(&self, entry: impl Into<String>) {
        self.0.lock().unwrap().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn contains(&self, line: &str) -> bool {
        self.0.lock().unwrap().iter().any(|l| l == line)
    }

    pub fn count_of(&self, line: &str) -> usize {
        self.0.lock().unwrap().iter().filter(|l| *l == line).count()
    }
}

pub struct LedgerRenderer(pub Ledger);

impl LogRenderer for LedgerRenderer {
    fn append_line(&self, line: &str) {
        self.0.push(line);
    }
}

// --------------------
// Scripted dialer
// --------------------

/// The server side of one scripted transport: fire events at the client,
/// watch what it wrote.
pub struct ServerEnd {
    pub ev_tx: mpsc::Sender<TransportEvent>,
    pub sent_rx: mpsc::Receiver<String>,
}

impl ServerEnd {
    pub async fn fire(&self, event: TransportEvent) {
        self.ev_tx.send(event).await.unwrap();
    }
}

/// Dialer whose transports are driven by the test instead of a socket.
pub struct ScriptedDialer {
    supports: bool,
    fail_dial: bool,
    dials: AtomicUsize,
    hand_off: mpsc::Sender<ServerEnd>,
}

impl ScriptedDialer {
    /// Dials succeed; the test fires `Opened`/`Frame`/`Closed` itself.
    pub fn ready() -> (Arc<Self>, mpsc::Receiver<ServerEnd>) {
        Self::build(true, false)
    }

    /// Capability probe says no.
    pub fn unsupported() -> (Arc<Self>, mpsc::Receiver<ServerEnd>) {
        Self::build(false, false)
    }

    /// Every dial fails with a transport error.
    pub fn failing() -> (Arc<Self>, mpsc::Receiver<ServerEnd>) {
        Self::build(true, true)
    }

    fn build(supports: bool, fail_dial: bool) -> (Arc<Self>, mpsc::Receiver<ServerEnd>) {
        let (hand_off, ends) = mpsc::channel(8);
        let dialer = Arc::new(Self { supports, fail_dial, dials: AtomicUsize::new(0), hand_off });
        (dialer, ends)
    }

    pub fn dial_count(&self) -> usize {
        self.dials.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Dialer for ScriptedDialer {
    fn supports(&self) -> bool {
        self.supports
    }

    async fn dial(&self, _endpoint: &Endpoint) -> Result<Transport> {
        self.dials.fetch_add(1, Ordering::SeqCst);
        if self.fail_dial {
            return Err(WsParleyError::Transport("scripted dial failure".into()));
        }
        let (tx, sent_rx) = mpsc::channel(64);
        let (ev_tx, events) = mpsc::channel(64);
        let _ = self.hand_off.send(ServerEnd { ev_tx, sent_rx }).await;
        Ok(Transport { tx, events })
    }
}

// --------------------
// Prompts
// --------------------

/// Prompt that declines everything.
pub struct DeclineAll;

impl ConfirmPrompt for DeclineAll {
    fn confirm(&self, _question: &str) -> bool {
        false
    }
}

// --------------------
// Settling
// --------------------

/// Poll until `cond` holds; panic with `what` after two seconds.
pub async fn wait_until<F: Fn() -> bool>(what: &str, cond: F) {
    let deadline = Instant::now() + Duration::from_secs(2);
    while Instant::now() < deadline {
        if cond() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("timed out waiting for {what}");
}
