//! wsParley client library entry.
//!
//! This crate wires the transport dialer, connection state machine, session,
//! dispatcher, and inbound router into a cohesive chat client. It is intended
//! to be consumed by the demo binary (`main.rs`), by embedders, and by
//! integration tests.

pub mod client;
pub mod conn;
pub mod outbound;
pub mod render;
pub mod router;
pub mod session;
pub mod signup;
pub mod transport;
