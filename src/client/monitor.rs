//! Connection monitor.
//!
//! Before any request is issued, the client has to verify that whatever
//! is listening on the configured port really is a course API server.
//! The monitor probes the root path until the response body matches the
//! expected sentinel, retrying a bounded number of times with a fixed
//! delay in between, then settles into a terminal state. The body check
//! is the correctness gate here: an HTTP 200 from a stranger on our
//! port must not count as connected.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use crate::client::error::RequestError;
use crate::core::types::SENTINEL;

/// Where the client stands with the server.
///
/// The state starts [`Unresolved`](ConnectionState::Unresolved) and
/// makes exactly one transition, to either
/// [`Connected`](ConnectionState::Connected) or
/// [`Failed`](ConnectionState::Failed). It never moves again after
/// that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Unresolved,
    Connected,
    Failed,
}

/// Probe until the server is verified or attempts run out, then publish
/// the terminal state.
pub(crate) async fn establish(
    http: reqwest::Client,
    base_url: String,
    attempts: u32,
    delay: Duration,
    state: watch::Sender<ConnectionState>,
) {
    for attempt in 1..=attempts {
        match probe(&http, &base_url).await {
            Ok(()) => {
                info!(attempt, url = %base_url, "Course server verified");
                state.send_replace(ConnectionState::Connected);
                return;
            }
            Err(error) => {
                if matches!(error, RequestError::ForeignService { .. }) {
                    warn!(attempt, %error, "Port answered with an unexpected body");
                } else {
                    debug!(attempt, %error, "Connection probe failed");
                }
            }
        }
        if attempt < attempts {
            sleep(delay).await;
        }
    }
    error!(attempts, url = %base_url, "Could not connect to the course server");
    state.send_replace(ConnectionState::Failed);
}

/// One probe of the root path. Succeeds only when the response is a
/// success status carrying exactly the sentinel body.
async fn probe(http: &reqwest::Client, base_url: &str) -> Result<(), RequestError> {
    let response = http.get(base_url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(RequestError::Status { status });
    }
    let body = response.text().await?;
    if body != SENTINEL {
        return Err(RequestError::ForeignService {
            url: base_url.to_string(),
        });
    }
    Ok(())
}
