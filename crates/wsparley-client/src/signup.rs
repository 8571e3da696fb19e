//! One-shot sign-up call.

use std::time::Duration;

use wsparley_core::error::{Result, WsParleyError};
use wsparley_core::protocol::signup::{SignUpForm, SignUpReply, SIGNUP_OK};

use crate::render::ConfirmPrompt;

/// Typed client for the registration endpoint.
pub struct SignUpClient {
    base_url: String,
    http: reqwest::Client,
}

impl SignUpClient {
    /// `server_addr` is `host:port`, the same address the socket dials; the
    /// call goes over plain HTTP the way the socket goes over plain WS.
    pub fn new(server_addr: &str) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();
        Self { base_url: format!("http://{server_addr}"), http }
    }

    /// Register an account. The reply's `jsonObj` comes back on the success
    /// sentinel; any other application code is a `RemoteRejected` carrying
    /// the server's message.
    pub async fn sign_up(&self, form: &SignUpForm) -> Result<serde_json::Value> {
        if form.name.is_empty() {
            return Err(WsParleyError::InvalidInput("sign-up requires a name".into()));
        }
        if form.password.is_empty() {
            return Err(WsParleyError::InvalidInput("sign-up requires a password".into()));
        }

        let url = format!("{}/signUp", self.base_url);
        let resp = self
            .http
            .post(&url)
            .form(form)
            .send()
            .await
            .map_err(|e| WsParleyError::Transport(format!("sign-up request failed: {e}")))?;
        let reply: SignUpReply = resp
            .json()
            .await
            .map_err(|e| WsParleyError::BadEnvelope(format!("sign-up reply not json: {e}")))?;

        if reply.err_code != SIGNUP_OK {
            tracing::warn!(code = reply.err_code, msg = %reply.err_msg, "sign-up rejected");
            return Err(WsParleyError::RemoteRejected {
                code: reply.err_code,
                message: reply.err_msg,
            });
        }
        Ok(reply.json_obj.unwrap_or(serde_json::Value::Null))
    }

    /// Sign-up behind a confirmation prompt; declining aborts with `Ok(None)`
    /// and no request is made.
    pub async fn sign_up_with_confirm(
        &self,
        form: &SignUpForm,
        prompt: &dyn ConfirmPrompt,
    ) -> Result<Option<serde_json::Value>> {
        if form.name.is_empty() {
            return Err(WsParleyError::InvalidInput("sign-up requires a name".into()));
        }
        if form.password.is_empty() {
            return Err(WsParleyError::InvalidInput("sign-up requires a password".into()));
        }
        if !prompt.confirm("register this account?") {
            return Ok(None);
        }
        self.sign_up(form).await.map(Some)
    }
}
