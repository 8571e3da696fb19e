//! Connection state machine.
//!
//! One task per connection owns the transport: it forwards queued outbound
//! frames, maps transport events onto the lifecycle, and emits `ConnEvent`s
//! in arrival order. `Closed` is terminal; recovering means a fresh `open`,
//! never an automatic reconnect.

use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

use wsparley_core::error::{Result, WsParleyError};

use crate::transport::{Dialer, Endpoint, TransportEvent};

// --------------------
// States & events
// --------------------

/// Lifecycle states. `Closed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnState {
    Idle,
    Connecting,
    Open,
    Closed,
}

/// Lifecycle + content events, delivered in transport arrival order.
/// Subscribers get exactly one `Opened` and exactly one `Closed` per
/// connection; frames only ever arrive in between.
#[derive(Debug)]
pub enum ConnEvent {
    Opened,
    Frame(String),
    Closed,
}

// --------------------
// Handle
// --------------------

/// Cheap clonable handle to one connection. The machine winds down when
/// every handle is dropped, closing the transport and emitting `Closed`.
#[derive(Clone)]
pub struct ConnectionHandle {
    out_tx: mpsc::Sender<String>,
    state: Arc<Mutex<ConnState>>,
}

impl ConnectionHandle {
    /// Current lifecycle state.
    pub fn state(&self) -> ConnState {
        *self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Queue one text frame. Guarded: anything but `Open` is a structured
    /// no-op, so callers racing the lifecycle never panic and never write
    /// onto a dead socket.
    pub fn send(&self, frame: String) -> Result<()> {
        if self.state() != ConnState::Open {
            return Err(WsParleyError::NotOpen);
        }
        self.out_tx
            .try_send(frame)
            .map_err(|_| WsParleyError::Transport("outbound queue unavailable".into()))
    }
}

// --------------------
// Machine
// --------------------

/// Start a connection: the state is `Connecting` from this call on, and the
/// dial happens in the background. Returns the handle plus the event stream
/// the caller drives.
pub fn open(
    dialer: Arc<dyn Dialer>,
    endpoint: Endpoint,
) -> (ConnectionHandle, mpsc::Receiver<ConnEvent>) {
    let state = Arc::new(Mutex::new(ConnState::Connecting));
    let (out_tx, out_rx) = mpsc::channel::<String>(64);
    let (ev_tx, ev_rx) = mpsc::channel::<ConnEvent>(64);

    let handle = ConnectionHandle { out_tx, state: Arc::clone(&state) };
    tokio::spawn(run_machine(dialer, endpoint, state, out_rx, ev_tx));

    (handle, ev_rx)
}

fn set_state(cell: &Mutex<ConnState>, next: ConnState) {
    *cell.lock().unwrap_or_else(|e| e.into_inner()) = next;
}

async fn run_machine(
    dialer: Arc<dyn Dialer>,
    endpoint: Endpoint,
    state: Arc<Mutex<ConnState>>,
    mut out_rx: mpsc::Receiver<String>,
    ev_tx: mpsc::Sender<ConnEvent>,
) {
    let mut transport = match dialer.dial(&endpoint).await {
        Ok(t) => t,
        Err(e) => {
            tracing::warn!(url = %endpoint.url(), error = %e, "dial failed");
            set_state(&state, ConnState::Closed);
            let _ = ev_tx.send(ConnEvent::Closed).await;
            return;
        }
    };

    loop {
        tokio::select! {
            // outbound writer
            maybe_out = out_rx.recv() => {
                match maybe_out {
                    Some(frame) => {
                        if transport.tx.send(frame).await.is_err() {
                            break;
                        }
                    }
                    None => break,
                }
            }

            // transport events
            incoming = transport.events.recv() => {
                let Some(event) = incoming else { break; };
                match event {
                    TransportEvent::Opened => {
                        set_state(&state, ConnState::Open);
                        tracing::info!(channel = %endpoint.channel(), "connection open");
                        if ev_tx.send(ConnEvent::Opened).await.is_err() {
                            break;
                        }
                    }
                    TransportEvent::Frame(text) => {
                        if ev_tx.send(ConnEvent::Frame(text)).await.is_err() {
                            break;
                        }
                    }
                    TransportEvent::Closed => break,
                }
            }
        }
    }

    set_state(&state, ConnState::Closed);
    tracing::info!(channel = %endpoint.channel(), "connection closed");
    let _ = ev_tx.send(ConnEvent::Closed).await;
}
