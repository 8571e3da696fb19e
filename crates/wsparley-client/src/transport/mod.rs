//! Transport layer: the dial seam and the production WebSocket dialer.

pub mod dialer;
pub mod ws;

pub use dialer::{Dialer, Endpoint, Transport, TransportEvent};
pub use ws::WsDialer;
