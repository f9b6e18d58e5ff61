//! HTTP server half of the course API.
//!
//! The server loads its course data once at startup, answers an identity
//! probe at the root path, and serves the pre-serialized summary payload.
//! All routing decisions live in the [`dispatch`] table; the framework
//! router only hands requests through untouched.

pub mod cache;
pub mod dispatch;
pub mod middleware;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::core::config::Config;
use crate::core::error::{CourseableError, Result};
use crate::core::types::SENTINEL;
use crate::server::cache::SummaryCache;
use crate::server::dispatch::DispatchTable;

/// Shared state available to route handlers.
pub struct ServerState {
    pub cache: SummaryCache,
}

impl ServerState {
    /// Load the course data and build the handler state.
    ///
    /// This is the only time the source file is read; requests are
    /// served from the cache from here on.
    pub fn new(config: &Config) -> Result<Self> {
        let cache = SummaryCache::from_path(&config.server.data_file)?;
        info!(count = cache.len(), "Loaded course summaries");
        Ok(Self { cache })
    }
}

/// Build the application router.
///
/// Every request funnels through the dispatch table via the fallback
/// handler, so the table sees the raw request target (including any
/// query string) before any framework normalization happens.
pub fn router(table: DispatchTable) -> Router {
    Router::new()
        .fallback(dispatch_request)
        .layer(axum::middleware::from_fn(middleware::log_request))
        .with_state(Arc::new(table))
}

async fn dispatch_request(
    State(table): State<Arc<DispatchTable>>,
    request: Request,
) -> Response {
    let target = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("");
    table
        .dispatch(target, request.method().as_str())
        .into_response()
}

/// The course API server, configured but not yet bound.
pub struct Server {
    config: Config,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Load course data, bind the listen socket, and prepare the router.
    pub async fn bind(self) -> Result<RunningServer> {
        let state = Arc::new(ServerState::new(&self.config)?);
        let app = router(DispatchTable::new(state));
        let listener = TcpListener::bind((
            self.config.server.host.as_str(),
            self.config.server.port,
        ))
        .await?;
        let addr = listener.local_addr()?;
        info!(%addr, "Course API server listening");
        Ok(RunningServer { addr, listener, app })
    }
}

/// A bound server that has not started serving yet.
pub struct RunningServer {
    addr: SocketAddr,
    listener: TcpListener,
    app: Router,
}

impl RunningServer {
    /// The address the listen socket actually bound, which differs from
    /// the configured one when port 0 requested an ephemeral port.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Serve connections until the process is stopped.
    pub async fn serve(self) -> Result<()> {
        axum::serve(self.listener, self.app).await?;
        Ok(())
    }

    /// Serve connections on a background task.
    pub fn spawn(self) -> ServerHandle {
        let addr = self.addr;
        let task = tokio::spawn(async move {
            if let Err(e) = axum::serve(self.listener, self.app).await {
                error!(error = %e, "Course API server stopped");
            }
        });
        ServerHandle { addr, task }
    }
}

/// Handle to a server running in the background. Dropping the handle
/// stops the server.
pub struct ServerHandle {
    addr: SocketAddr,
    task: JoinHandle<()>,
}

impl ServerHandle {
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Check what is listening on the configured port before starting.
///
/// Returns `Ok(true)` when a course API server already answers the
/// identity probe there, `Ok(false)` when nothing answers, and
/// [`CourseableError::PortOccupied`] when the port is held by some
/// other service.
pub async fn already_running(config: &Config) -> Result<bool> {
    let http = reqwest::Client::builder()
        .timeout(config.request_timeout())
        .build()
        .map_err(|e| {
            CourseableError::ServerError(format!("Failed to build probe client: {}", e))
        })?;
    let url = config.base_url();
    match http.get(&url).send().await {
        Ok(response) => {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            if status.is_success() && body == SENTINEL {
                debug!(%url, "Identity probe answered by a course API server");
                Ok(true)
            } else {
                Err(CourseableError::PortOccupied(config.server.port))
            }
        }
        Err(_) => Ok(false),
    }
}
