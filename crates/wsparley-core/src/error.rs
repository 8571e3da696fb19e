//! Shared error type across wsParley crates.

use thiserror::Error;

/// Stable failure codes surfaced to embedders (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCode {
    /// A required input was empty or otherwise unusable.
    InvalidInput,
    /// The platform cannot open persistent socket connections.
    Unsupported,
    /// Malformed wire data (bad JSON, missing payload).
    BadEnvelope,
    /// No connection, or the connection is not in the `Open` state.
    NotOpen,
    /// The transport failed while dialing or sending.
    Transport,
    /// The remote side answered with a non-success application code.
    RemoteRejected,
    /// Internal failure.
    Internal,
}

impl FailureCode {
    /// String representation used in logs and assertions.
    pub fn as_str(self) -> &'static str {
        match self {
            FailureCode::InvalidInput => "INVALID_INPUT",
            FailureCode::Unsupported => "UNSUPPORTED",
            FailureCode::BadEnvelope => "BAD_ENVELOPE",
            FailureCode::NotOpen => "NOT_OPEN",
            FailureCode::Transport => "TRANSPORT",
            FailureCode::RemoteRejected => "REMOTE_REJECTED",
            FailureCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, WsParleyError>;

/// Unified error type used by the protocol core and the client runtime.
///
/// Every failure an operation can hit is a variant here; callers decide which
/// ones reach the user (most are dropped or logged, matching the page-client
/// policy of never letting a bad message take the session down).
#[derive(Debug, Error)]
pub enum WsParleyError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("sockets unsupported: {0}")]
    Unsupported(String),
    #[error("bad envelope: {0}")]
    BadEnvelope(String),
    #[error("connection not open")]
    NotOpen,
    #[error("transport: {0}")]
    Transport(String),
    #[error("remote rejected (code {code}): {message}")]
    RemoteRejected { code: i64, message: String },
    #[error("internal: {0}")]
    Internal(String),
}

impl WsParleyError {
    /// Map internal error to a stable failure code.
    pub fn failure_code(&self) -> FailureCode {
        match self {
            WsParleyError::InvalidInput(_) => FailureCode::InvalidInput,
            WsParleyError::Unsupported(_) => FailureCode::Unsupported,
            WsParleyError::BadEnvelope(_) => FailureCode::BadEnvelope,
            WsParleyError::NotOpen => FailureCode::NotOpen,
            WsParleyError::Transport(_) => FailureCode::Transport,
            WsParleyError::RemoteRejected { .. } => FailureCode::RemoteRejected,
            WsParleyError::Internal(_) => FailureCode::Internal,
        }
    }
}
