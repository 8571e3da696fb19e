//! wsParley core: wire-level chat protocol contracts and the shared error surface.
//!
//! This crate defines the tagged message envelope, the sign-up call contracts,
//! and the error type shared by the client runtime and embedders. It
//! intentionally carries no transport or runtime dependencies so it can be
//! reused in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `WsParleyError`/`Result` so a hosting
//! process never crashes on malformed server traffic.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{Result, WsParleyError};
