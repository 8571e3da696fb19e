//! Inbound router: classify frames by kind and hand display lines to the
//! renderer.

use std::sync::Arc;

use wsparley_core::error::Result;
use wsparley_core::protocol::envelope::{self, ChatBody, Envelope, Kind, TipsBody};

use crate::render::LogRenderer;

/// Routes decoded envelopes to display lines.
pub struct InboundRouter {
    renderer: Arc<dyn LogRenderer>,
}

impl InboundRouter {
    pub fn new(renderer: Arc<dyn LogRenderer>) -> Self {
        Self { renderer }
    }

    /// Decode one frame and render its display line.
    ///
    /// Undecodable frames are dropped: the error is returned for observers
    /// and logged at debug, nothing reaches the renderer, nothing panics.
    pub fn route(&self, frame: &str) -> Result<()> {
        let env = match envelope::decode(frame) {
            Ok(env) => env,
            Err(e) => {
                tracing::debug!(error = %e, "dropping inbound frame");
                return Err(e);
            }
        };
        self.renderer.append_line(&display_line(&env));
        Ok(())
    }
}

/// Display transformation per kind. Total: payloads whose shape does not
/// match degrade to empty fields (absent sender renders as `?`) instead of
/// dropping a frame that did decode.
pub fn display_line(env: &Envelope) -> String {
    match &env.kind {
        Kind::Tips => {
            let body: TipsBody = env.payload_as().unwrap_or_else(|e| {
                tracing::debug!(error = %e, "tips payload degraded");
                TipsBody::default()
            });
            format!("tips:{}", body.message)
        }
        Kind::Login | Kind::Chat | Kind::Other(_) => {
            let body: ChatBody = env.payload_as().unwrap_or_else(|e| {
                tracing::debug!(error = %e, "chat payload degraded");
                ChatBody::default()
            });
            format!("{}:{}", body.sender_nick.as_deref().unwrap_or("?"), body.message)
        }
    }
}
