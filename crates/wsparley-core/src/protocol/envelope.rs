//! Chat envelope (JSON text frames).
//!
//! Every frame on the wire is `{"kind": <string>, "jsonObj": <object>}`.
//! The payload is stored as `RawValue` to enable lazy, per-kind parsing.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;

use crate::error::{Result, WsParleyError};

// --------------------
// Kind tag
// --------------------

/// Message kind tag.
///
/// Closed set of the kinds this client understands; anything else lands in
/// `Other` so an unrecognized tag degrades in the router instead of failing
/// the decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Kind {
    Login,
    Chat,
    Tips,
    Other(String),
}

impl Kind {
    /// Wire representation of the tag.
    pub fn as_str(&self) -> &str {
        match self {
            Kind::Login => "login",
            Kind::Chat => "chat",
            Kind::Tips => "tips",
            Kind::Other(tag) => tag,
        }
    }
}

impl From<&str> for Kind {
    fn from(tag: &str) -> Self {
        match tag {
            "login" => Kind::Login,
            "chat" => Kind::Chat,
            "tips" => Kind::Tips,
            other => Kind::Other(other.to_string()),
        }
    }
}

impl Default for Kind {
    /// Frames without a tag route through the default display branch.
    fn default() -> Self {
        Kind::Other(String::new())
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Kind {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Kind {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(Kind::from(tag.as_str()))
    }
}

// --------------------
// Envelope
// --------------------

/// Inbound envelope (one per text frame).
///
/// Unknown extra fields are ignored; servers are free to attach metadata the
/// client does not read.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    /// Kind tag. Missing tags decode as an empty `Other`.
    #[serde(default)]
    pub kind: Kind,
    /// Kind-dependent payload, stored as raw JSON (lazy parsing).
    #[serde(rename = "jsonObj")]
    pub payload: Box<RawValue>,
}

impl Envelope {
    /// Materialize the payload as a typed struct.
    pub fn payload_as<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(self.payload.get())
            .map_err(|e| WsParleyError::BadEnvelope(format!("payload decode failed: {e}")))
    }
}

/// Parse one wire frame into an envelope.
///
/// Fails on non-JSON text and on frames whose `jsonObj` is absent or `null`;
/// both are reported as `BadEnvelope`, never a panic. Callers drop such
/// frames without rendering anything.
pub fn decode(text: &str) -> Result<Envelope> {
    let env: Envelope = serde_json::from_str(text).map_err(|e| {
        tracing::trace!(error = %e, "envelope rejected");
        WsParleyError::BadEnvelope(format!("invalid envelope json: {e}"))
    })?;
    if env.payload.get() == "null" {
        tracing::trace!("envelope rejected: null payload");
        return Err(WsParleyError::BadEnvelope("payload is null".into()));
    }
    Ok(env)
}

/// Serialize a fresh envelope for the wire.
///
/// Always succeeds for serializable payloads; a serializer failure is an
/// internal error, not a protocol one.
pub fn encode<T: Serialize>(kind: &Kind, payload: &T) -> Result<String> {
    #[derive(Serialize)]
    struct Wire<'a, T: Serialize> {
        kind: &'a Kind,
        #[serde(rename = "jsonObj")]
        payload: &'a T,
    }

    serde_json::to_string(&Wire { kind, payload })
        .map_err(|e| WsParleyError::Internal(format!("envelope encode failed: {e}")))
}

// --------------------
// Typed payloads
// --------------------

/// `login` payload: the identity announcement sent once per connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginPayload {
    pub id: String,
    pub nick: String,
}

/// Outbound `chat` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSend {
    pub message: String,
}

/// Inbound `chat` body (server rebroadcast).
///
/// Servers are inconsistent about sender metadata, so absent fields degrade
/// instead of failing the frame.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatBody {
    #[serde(default)]
    pub message: String,
    #[serde(rename = "senderNick", default)]
    pub sender_nick: Option<String>,
}

/// Inbound `tips` body (system-originated notices).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TipsBody {
    #[serde(default)]
    pub message: String,
}
