//! WebSocket dialer (tokio-tungstenite).
//!
//! One socket per dial, split into a writer task fed by the outbound pipe and
//! a reader task that forwards text frames upward. Ping/pong stays inside the
//! socket library; this protocol rides on text frames only.

use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

use wsparley_core::error::{Result, WsParleyError};

use crate::transport::dialer::{Dialer, Endpoint, Transport, TransportEvent};

/// Production dialer.
pub struct WsDialer;

#[async_trait]
impl Dialer for WsDialer {
    async fn dial(&self, endpoint: &Endpoint) -> Result<Transport> {
        let url = endpoint.url();
        let (socket, _resp) = connect_async(url.as_str())
            .await
            .map_err(|e| WsParleyError::Transport(format!("dial {url} failed: {e}")))?;
        let (mut ws_tx, mut ws_rx) = socket.split();

        let (tx, mut out_rx) = mpsc::channel::<String>(64);
        let (ev_tx, events) = mpsc::channel::<TransportEvent>(64);

        // Queue the open notification ahead of any inbound frame.
        let _ = ev_tx.try_send(TransportEvent::Opened);

        // writer
        tokio::spawn(async move {
            while let Some(frame) = out_rx.recv().await {
                if ws_tx.send(Message::Text(frame.into())).await.is_err() {
                    return;
                }
            }
            // pipe dropped: close the socket politely
            let _ = ws_tx.close().await;
        });

        // reader
        tokio::spawn(async move {
            while let Some(incoming) = ws_rx.next().await {
                match incoming {
                    Ok(Message::Text(text)) => {
                        if ev_tx.send(TransportEvent::Frame(text.to_string())).await.is_err() {
                            return;
                        }
                    }
                    Ok(Message::Close(_)) | Err(_) => break,
                    // binary/ping/pong are not part of this protocol
                    Ok(_) => {}
                }
            }
            let _ = ev_tx.send(TransportEvent::Closed).await;
        });

        Ok(Transport { tx, events })
    }
}
