// Test helper functions

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::Router;
use courseable::core::config::Config;
use courseable::server::dispatch::DispatchTable;
use courseable::server::{router, Server, ServerHandle, ServerState};

/// Config pointing at the given data file, with retry timing suitable
/// for tests
#[allow(dead_code)] // Used in integration tests
pub fn test_config(data_file: &Path, port: u16) -> Config {
    let mut config = Config::default();
    config.server.port = port;
    config.server.data_file = data_file.to_path_buf();
    config.client.connect_attempts = 3;
    config.client.retry_delay_ms = 50;
    config.client.request_timeout_sec = 2;
    config
}

/// Build the application router directly, without binding a socket
#[allow(dead_code)] // Used in integration tests
pub fn test_app(config: &Config) -> Router {
    let state = ServerState::new(config).expect("Failed to load course data");
    router(DispatchTable::new(Arc::new(state)))
}

/// Start a real server on the configured port
#[allow(dead_code)] // Used in integration tests
pub async fn spawn_server(config: Config) -> ServerHandle {
    Server::new(config)
        .bind()
        .await
        .expect("Failed to bind server")
        .spawn()
}

/// Serve an arbitrary router on an ephemeral port, for impersonating
/// services that are not course API servers
#[allow(dead_code)] // Used in integration tests
pub async fn spawn_router(app: Router) -> (SocketAddr, tokio::task::JoinHandle<()>) {
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0))
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    let task = tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (addr, task)
}

/// Reserve a port that is currently free
#[allow(dead_code)] // Used in integration tests
pub fn free_port() -> u16 {
    let listener =
        std::net::TcpListener::bind(("127.0.0.1", 0)).expect("Failed to bind probe listener");
    listener
        .local_addr()
        .expect("Failed to read local addr")
        .port()
}
