//! Sign-up contracts (one-shot HTTP registration).

use serde::{Deserialize, Serialize};

/// Application-level success sentinel in `SignUpReply::err_code`.
pub const SIGNUP_OK: i64 = 1000;

/// Registration request body, form-encoded on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpForm {
    pub name: String,
    /// Free-text self introduction; optional on the wire.
    #[serde(default)]
    pub introduce: String,
    /// Sent in the clear; the sign-up endpoint has no TLS variant.
    pub password: String,
}

/// Registration reply.
///
/// `err_code == SIGNUP_OK` carries the created account in `json_obj`; any
/// other code is a remote rejection whose `err_msg` is shown to the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpReply {
    #[serde(rename = "errCode")]
    pub err_code: i64,
    #[serde(rename = "errMsg", default)]
    pub err_msg: String,
    #[serde(rename = "jsonObj", default)]
    pub json_obj: Option<serde_json::Value>,
}
