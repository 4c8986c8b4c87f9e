use std::{net::SocketAddr, sync::Arc};

use serde_json::Value;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
};

use newsroom::{config::Config, memory::MemoryStore, router, state::AppState};

/// State over the in-process store, serving static files from `dist_path`.
pub fn test_state(dist_path: &str) -> Arc<AppState> {
    let config = Config {
        port: 1323,
        mongo_uri: "mongodb://127.0.0.1:27017".to_string(),
        mongo_db: "newsroom".to_string(),
        dist_path: dist_path.to_string(),
        request_timeout_secs: 10,
    };

    Arc::new(AppState {
        config,
        store: Arc::new(MemoryStore::new()),
    })
}

/// Serves the real router on an ephemeral port and returns its address.
pub async fn spawn_app(state: Arc<AppState>) -> SocketAddr {
    let app = router(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve app");
    });

    addr
}

pub async fn spawn_default_app() -> SocketAddr {
    spawn_app(test_state("dist")).await
}

/// One HTTP/1.1 exchange, returning the full response text.
pub async fn raw(addr: SocketAddr, request: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.expect("connect server");
    stream
        .write_all(request.as_bytes())
        .await
        .expect("write request");

    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");

    response
}

pub async fn get(addr: SocketAddr, path: &str) -> (u16, Value) {
    let request =
        format!("GET {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    parse(raw(addr, &request).await)
}

pub async fn send_form(addr: SocketAddr, method: &str, path: &str, body: &str) -> (u16, Value) {
    let request = format!(
        "{method} {path} HTTP/1.1\r\nHost: {addr}\r\n\
         Content-Type: application/x-www-form-urlencoded\r\n\
         Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    parse(raw(addr, &request).await)
}

fn parse(response: String) -> (u16, Value) {
    let status = response
        .strip_prefix("HTTP/1.1 ")
        .and_then(|rest| rest.get(..3))
        .expect("status line")
        .parse()
        .expect("numeric status");

    let body = response
        .split_once("\r\n\r\n")
        .map(|(_, body)| body)
        .unwrap_or_default();

    let json = serde_json::from_str(body).unwrap_or(Value::Null);

    (status, json)
}
