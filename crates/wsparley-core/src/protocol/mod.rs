//! Protocol modules (chat envelope + sign-up contracts).
//!
//! This module hosts the wire formats the client speaks:
//! - Envelope: JSON text frames tagged by `kind`, payload kept as RawValue.
//! - Sign-up: the one-shot HTTP registration request/reply pair.
//!
//! All parsers are panic-free: malformed input is reported as `WsParleyError`
//! instead of panicking, keeping the client resilient to whatever the server
//! (or a proxy in between) emits.

pub mod envelope;
pub mod signup;
