//! wsParley demo client.
//!
//! Terminal chat: connect to a channel, auto-login, type lines to send.
//! Usage: wsparley-client [server_addr] [channel] [user_id] [nick]

use std::env;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{fmt, EnvFilter};

use wsparley_client::client::ChatClient;
use wsparley_client::render::StdoutRenderer;
use wsparley_client::transport::WsDialer;

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let mut args = env::args().skip(1);
    let server_addr = args.next().unwrap_or_else(|| "127.0.0.1:7200".to_string());
    let channel = args.next().unwrap_or_else(|| "lobby".to_string());
    let user_id = args.next().unwrap_or_else(|| format!("guest-{}", std::process::id()));
    let nick = args.next().unwrap_or_else(|| "guest".to_string());

    let client = ChatClient::new(Arc::new(WsDialer), Arc::new(StdoutRenderer));
    client.set_identity(&user_id, &nick);
    client.connect(&server_addr, &channel).expect("connect failed");

    tracing::info!(%server_addr, %channel, "type lines to chat, /quit to exit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        let line = line.trim();
        if line == "/quit" {
            break;
        }
        if line.is_empty() {
            continue;
        }
        if let Err(e) = client.send_chat(line) {
            eprintln!("send failed: {e}");
        }
    }
}
