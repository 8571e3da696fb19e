//! Top-level facade crate for wsParley.
//!
//! Re-exports the protocol core and the client runtime so users can depend on
//! a single crate.

pub mod core {
    pub use wsparley_core::*;
}

pub mod client {
    pub use wsparley_client::*;
}
